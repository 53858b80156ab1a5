//! Byte cursor over an immutable input buffer.
//!
//! The cursor only moves forward.  A read that cannot be satisfied fails
//! with `Truncated` and leaves the position where it was.  The cursor also
//! carries the remaining nesting-depth budget for the decode it belongs to.
//!
//! There is no platform-native-width integer read.  Variant tags, the only
//! field that used one, are ULEB128 encoded and go through `read_u8`.

use crate::errors::DecodeError;

/// Forward-only reader over `&[u8]` with a container-depth budget.
#[derive(Debug)]
pub struct ByteReader<'a> {
    input: &'a [u8],
    pos: usize,
    max_depth: usize,
    remaining_depth: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(input: &'a [u8], max_depth: usize) -> Self {
        Self {
            input,
            pos: 0,
            max_depth,
            remaining_depth: max_depth,
        }
    }

    /// The whole input, including bytes already consumed.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    pub fn remaining_depth(&self) -> usize {
        self.remaining_depth
    }

    /// Consume `len` bytes and return them as a slice of the input.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.input[start..self.pos])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    // ── Fixed-width little-endian integers ───────────────────

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_u128(&mut self) -> Result<u128, DecodeError> {
        Ok(u128::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    // ── Depth budget ─────────────────────────────────────────

    /// Spend one level of the depth budget.
    pub fn enter_container(&mut self) -> Result<(), DecodeError> {
        if self.remaining_depth == 0 {
            return Err(DecodeError::DepthExceeded(self.max_depth));
        }
        self.remaining_depth -= 1;
        Ok(())
    }

    /// Give back one level; never exceeds the initial budget.
    pub fn leave_container(&mut self) {
        if self.remaining_depth < self.max_depth {
            self.remaining_depth += 1;
        }
    }
}
