//! Minimal LCS encoder for building test inputs.

/// Minimal ULEB128 encoding of `v`.
pub fn uleb128(mut v: u32) -> Vec<u8> {
    let mut out = Vec::new();
    while v >= 0x80 {
        out.push((v as u8 & 0x7F) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
    out
}

/// Fixed 8-byte signed little-endian length field.
pub fn len(n: i64) -> Vec<u8> {
    n.to_le_bytes().to_vec()
}

pub fn string(s: &str) -> Vec<u8> {
    let mut out = len(s.len() as i64);
    out.extend_from_slice(s.as_bytes());
    out
}

/// Concatenate encoded pieces.
pub fn cat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}
