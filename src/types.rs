//! `Deserialize` for std types, on top of any `Deserializer`.
//!
//! Containers (`Vec`, `BTreeMap`) spend one level of the depth budget each.
//! A `Vec` whose elements occupy no bytes may not declare more elements
//! than the input has bytes.
//! Maps additionally pass the byte range of every key to the ordering
//! check, so a map decodes only when its keys were written sorted and
//! unique.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::errors::DecodeError;
use crate::format::Deserializer;

/// A value that can be decoded from a `Deserializer`.
pub trait Deserialize: Sized {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Deserialize for $ty {
                fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
                    de.$method()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => deserialize_bool,
    () => deserialize_unit,
    u8 => deserialize_u8,
    u16 => deserialize_u16,
    u32 => deserialize_u32,
    u64 => deserialize_u64,
    u128 => deserialize_u128,
    i8 => deserialize_i8,
    i16 => deserialize_i16,
    i32 => deserialize_i32,
    i64 => deserialize_i64,
    i128 => deserialize_i128,
    String => deserialize_str,
}

impl<T: Deserialize> Deserialize for Option<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
        if de.deserialize_option_tag()? {
            Ok(Some(T::deserialize(de)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Deserialize> Deserialize for Box<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
        Ok(Box::new(T::deserialize(de)?))
    }
}

// Cap on up-front allocation; a declared length is untrusted until the
// elements have actually been read.
const MAX_PREALLOC: usize = 4096;

impl<T: Deserialize> Deserialize for Vec<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
        let len = de.deserialize_len()?;
        de.increase_container_depth()?;
        let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
        for i in 0..len {
            let start = de.get_buffer_offset();
            items.push(T::deserialize(de)?);
            // Elements that occupy no bytes would let an 8-byte length spin
            // the loop indefinitely; cap their count at the input size.
            if i == 0 && de.get_buffer_offset() == start {
                let input_len = start + de.remaining_bytes();
                if len > input_len {
                    tracing::debug!(
                        offset = start,
                        len,
                        input_len,
                        "zero-width elements exceed input size"
                    );
                    return Err(DecodeError::LengthOutOfRange(
                        i64::try_from(len).unwrap_or(i64::MAX),
                    ));
                }
            }
        }
        de.decrease_container_depth();
        Ok(items)
    }
}

impl<K: Deserialize + Ord, V: Deserialize> Deserialize for BTreeMap<K, V> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
        let len = de.deserialize_len()?;
        de.increase_container_depth()?;
        let mut map = BTreeMap::new();
        let mut prev_key: Option<Range<usize>> = None;
        for _ in 0..len {
            let start = de.get_buffer_offset();
            let key = K::deserialize(de)?;
            let key_range = start..de.get_buffer_offset();
            if let Some(prev) = prev_key.take() {
                de.check_that_key_slices_are_increasing(prev, key_range.clone())?;
            }
            let value = V::deserialize(de)?;
            map.insert(key, value);
            prev_key = Some(key_range);
        }
        de.decrease_container_depth();
        Ok(map)
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Deserialize),+> Deserialize for ($($name,)+) {
            fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
                Ok(($($name::deserialize(de)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D0);
