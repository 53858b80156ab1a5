//! LCS constants: ULEB128 bounds and default decoding limits.

/// Name of the canonical format this crate decodes.
pub const FORMAT_NAME: &str = "LCS";

/// A u32 ULEB128 value occupies at most 5 bytes (shifts 0, 7, 14, 21, 28).
pub const MAX_ULEB128_U32_BYTES: usize = 5;

/// Bit offset of the last digit a u32 ULEB128 value may carry.
pub(crate) const ULEB128_U32_LAST_SHIFT: u32 = 7 * (MAX_ULEB128_U32_BYTES as u32 - 1);

// ── Default limits ───────────────────────────────────────────
// Both are overridable through `DecoderConfig`.

/// Maximum depth of nested containers before decoding fails.
pub const DEFAULT_MAX_CONTAINER_DEPTH: usize = 500;

/// Largest container length accepted: the host's native signed size maximum.
pub const DEFAULT_MAX_LENGTH: usize = isize::MAX as usize;
