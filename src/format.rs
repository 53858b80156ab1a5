//! The decoder interface walked by schema-driven decoding code.
//!
//! Per-type decoders (hand-written or generated) only talk to this trait;
//! `LcsDeserializer` is the canonical implementation.  All methods share
//! one cursor and one error contract: the first `Err` aborts the decode.

use std::ops::Range;

use crate::errors::DecodeError;

pub trait Deserializer {
    fn deserialize_str(&mut self) -> Result<String, DecodeError>;
    fn deserialize_bytes(&mut self) -> Result<Vec<u8>, DecodeError>;
    fn deserialize_bool(&mut self) -> Result<bool, DecodeError>;
    fn deserialize_unit(&mut self) -> Result<(), DecodeError>;
    fn deserialize_char(&mut self) -> Result<char, DecodeError>;
    fn deserialize_f32(&mut self) -> Result<f32, DecodeError>;
    fn deserialize_f64(&mut self) -> Result<f64, DecodeError>;

    fn deserialize_u8(&mut self) -> Result<u8, DecodeError>;
    fn deserialize_u16(&mut self) -> Result<u16, DecodeError>;
    fn deserialize_u32(&mut self) -> Result<u32, DecodeError>;
    fn deserialize_u64(&mut self) -> Result<u64, DecodeError>;
    fn deserialize_u128(&mut self) -> Result<u128, DecodeError>;

    fn deserialize_i8(&mut self) -> Result<i8, DecodeError>;
    fn deserialize_i16(&mut self) -> Result<i16, DecodeError>;
    fn deserialize_i32(&mut self) -> Result<i32, DecodeError>;
    fn deserialize_i64(&mut self) -> Result<i64, DecodeError>;
    fn deserialize_i128(&mut self) -> Result<i128, DecodeError>;

    /// Element count of a following sequence or map, or byte length of a
    /// string or blob.
    fn deserialize_len(&mut self) -> Result<usize, DecodeError>;

    /// Discriminant of a following enum variant.
    fn deserialize_variant_index(&mut self) -> Result<u32, DecodeError>;

    /// `true` when an `Option` value is present.
    fn deserialize_option_tag(&mut self) -> Result<bool, DecodeError>;

    /// Call on entering every nested container; fails once the depth budget
    /// is spent.
    fn increase_container_depth(&mut self) -> Result<(), DecodeError>;

    /// Call on leaving a container entered with `increase_container_depth`.
    fn decrease_container_depth(&mut self);

    /// Offset of the next unread byte.
    fn get_buffer_offset(&self) -> usize;

    /// Number of input bytes not yet consumed.
    fn remaining_bytes(&self) -> usize;

    /// Check that the serialized key `key2` strictly follows `key1`.
    ///
    /// Both ranges are offsets into the input, as reported by
    /// `get_buffer_offset` around each key.
    fn check_that_key_slices_are_increasing(
        &self,
        key1: Range<usize>,
        key2: Range<usize>,
    ) -> Result<(), DecodeError>;
}
