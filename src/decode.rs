//! LCS canonical decoder.
//!
//! Every scalar in LCS has exactly one valid encoding.  Besides parsing,
//! the decoder rejects any input for which a shorter or differently
//! ordered encoding of the same value exists:
//!   (a) ULEB128 integers carry no redundant trailing zero digit
//!   (b) ULEB128 integers fit in u32 and use at most 5 bytes
//!   (c) lengths are non-negative and within `max_length`
//!   (d) bool and option tags are exactly 0x00 or 0x01
//!   (e) map keys are serialized in strictly increasing byte order
//!   (f) exactly one root value, end of input immediately after

use std::ops::Range;

use crate::config::DecoderConfig;
use crate::constants::ULEB128_U32_LAST_SHIFT;
use crate::errors::DecodeError;
use crate::format::Deserializer;
use crate::reader::ByteReader;

/// Decoder for one top-level LCS value.
///
/// Owns the cursor for the whole decode; create a new one per input.
#[derive(Debug)]
pub struct LcsDeserializer<'a> {
    reader: ByteReader<'a>,
    max_length: usize,
}

impl<'a> LcsDeserializer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, &DecoderConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: &DecoderConfig) -> Self {
        Self {
            reader: ByteReader::new(input, config.max_container_depth),
            max_length: config.max_length,
        }
    }

    /// Decode a ULEB128 integer, rejecting overflow and non-minimal forms.
    pub fn deserialize_uleb128_as_u32(&mut self) -> Result<u32, DecodeError> {
        let start = self.reader.position();
        let mut value: u64 = 0;
        for shift in (0..=ULEB128_U32_LAST_SHIFT).step_by(7) {
            let byte = self.reader.read_u8()?;
            let digit = byte & 0x7F;
            value |= u64::from(digit) << shift;
            if value > u64::from(u32::MAX) {
                tracing::debug!(offset = start, value, "uleb128 value exceeds u32");
                return Err(DecodeError::Uleb128Overflow);
            }
            if digit == byte {
                if shift > 0 && digit == 0 {
                    tracing::debug!(offset = start, "uleb128 ends with a zero digit");
                    return Err(DecodeError::NonCanonicalUleb128);
                }
                // Checked against u32::MAX above.
                return Ok(value as u32);
            }
        }
        tracing::debug!(offset = start, "uleb128 continues past 5 bytes");
        Err(DecodeError::Uleb128Overflow)
    }

    /// Fail with `TrailingBytes` unless the whole input has been consumed.
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.reader.remaining() {
            0 => Ok(()),
            n => {
                tracing::debug!(offset = self.reader.position(), trailing = n, "trailing bytes");
                Err(DecodeError::TrailingBytes(n))
            }
        }
    }

    fn key_slice(&self, range: Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.reader
            .input()
            .get(range.clone())
            .ok_or_else(|| DecodeError::InvalidKeyRange {
                start: range.start,
                end: range.end,
            })
    }
}

impl<'a> Deserializer for LcsDeserializer<'a> {
    fn deserialize_str(&mut self) -> Result<String, DecodeError> {
        let len = self.deserialize_len()?;
        let raw = self.reader.read_slice(len)?;
        let s = std::str::from_utf8(raw).map_err(|_| DecodeError::InvalidUtf8)?;
        Ok(s.to_owned())
    }

    fn deserialize_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let len = self.deserialize_len()?;
        Ok(self.reader.read_slice(len)?.to_vec())
    }

    fn deserialize_bool(&mut self) -> Result<bool, DecodeError> {
        match self.reader.read_u8()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            b => Err(DecodeError::InvalidBool(b)),
        }
    }

    fn deserialize_unit(&mut self) -> Result<(), DecodeError> {
        Ok(())
    }

    fn deserialize_char(&mut self) -> Result<char, DecodeError> {
        Err(DecodeError::Unsupported("char"))
    }

    fn deserialize_f32(&mut self) -> Result<f32, DecodeError> {
        Err(DecodeError::Unsupported("f32"))
    }

    fn deserialize_f64(&mut self) -> Result<f64, DecodeError> {
        Err(DecodeError::Unsupported("f64"))
    }

    fn deserialize_u8(&mut self) -> Result<u8, DecodeError> {
        self.reader.read_u8()
    }

    fn deserialize_u16(&mut self) -> Result<u16, DecodeError> {
        self.reader.read_u16()
    }

    fn deserialize_u32(&mut self) -> Result<u32, DecodeError> {
        self.reader.read_u32()
    }

    fn deserialize_u64(&mut self) -> Result<u64, DecodeError> {
        self.reader.read_u64()
    }

    fn deserialize_u128(&mut self) -> Result<u128, DecodeError> {
        self.reader.read_u128()
    }

    fn deserialize_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_le_bytes(self.reader.read_array()?))
    }

    fn deserialize_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.reader.read_array()?))
    }

    fn deserialize_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.reader.read_array()?))
    }

    fn deserialize_i64(&mut self) -> Result<i64, DecodeError> {
        self.reader.read_i64()
    }

    fn deserialize_i128(&mut self) -> Result<i128, DecodeError> {
        Ok(i128::from_le_bytes(self.reader.read_array()?))
    }

    /// Lengths are a fixed 8-byte signed little-endian field.
    fn deserialize_len(&mut self) -> Result<usize, DecodeError> {
        let offset = self.reader.position();
        let value = self.reader.read_i64()?;
        match usize::try_from(value) {
            Ok(len) if len <= self.max_length => Ok(len),
            _ => {
                tracing::debug!(offset, value, max = self.max_length, "length out of range");
                Err(DecodeError::LengthOutOfRange(value))
            }
        }
    }

    /// Variant tags follow the same minimal ULEB128 rule as other u32s.
    fn deserialize_variant_index(&mut self) -> Result<u32, DecodeError> {
        self.deserialize_uleb128_as_u32()
    }

    fn deserialize_option_tag(&mut self) -> Result<bool, DecodeError> {
        match self.reader.read_u8()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            b => Err(DecodeError::InvalidOptionTag(b)),
        }
    }

    fn increase_container_depth(&mut self) -> Result<(), DecodeError> {
        let result = self.reader.enter_container();
        if result.is_err() {
            tracing::debug!(offset = self.reader.position(), "container depth exceeded");
        }
        result
    }

    fn decrease_container_depth(&mut self) {
        self.reader.leave_container();
    }

    fn get_buffer_offset(&self) -> usize {
        self.reader.position()
    }

    fn remaining_bytes(&self) -> usize {
        self.reader.remaining()
    }

    fn check_that_key_slices_are_increasing(
        &self,
        key1: Range<usize>,
        key2: Range<usize>,
    ) -> Result<(), DecodeError> {
        let offset = key2.start;
        let prev = self.key_slice(key1)?;
        let next = self.key_slice(key2)?;
        // Unsigned byte-lexicographic order, as `[u8]: Ord` defines it.
        match prev.cmp(next) {
            std::cmp::Ordering::Less => Ok(()),
            std::cmp::Ordering::Equal => {
                tracing::debug!(offset, "duplicate map key");
                Err(DecodeError::DuplicateKey)
            }
            std::cmp::Ordering::Greater => {
                tracing::debug!(offset, "map key out of order");
                Err(DecodeError::KeyOrder)
            }
        }
    }
}
