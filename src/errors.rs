//! LCS decode error codes and error type.
//!
//! Every failure aborts the whole decode.  Each variant carries a stable
//! string code (`ERR_*`) so conformance vectors can name the violated
//! rule without depending on message wording.

// ── Error codes ──────────────────────────────────────────────

pub const ERR_TRUNCATED: &str = "ERR_TRUNCATED";
pub const ERR_OVERFLOW: &str = "ERR_OVERFLOW";
pub const ERR_NON_CANONICAL: &str = "ERR_NON_CANONICAL";
pub const ERR_LENGTH_RANGE: &str = "ERR_LENGTH_RANGE";
pub const ERR_DEPTH: &str = "ERR_DEPTH";
pub const ERR_KEY_ORDER: &str = "ERR_KEY_ORDER";
pub const ERR_DUP_KEY: &str = "ERR_DUP_KEY";
pub const ERR_KEY_RANGE: &str = "ERR_KEY_RANGE";
pub const ERR_BOOL: &str = "ERR_BOOL";
pub const ERR_OPTION_TAG: &str = "ERR_OPTION_TAG";
pub const ERR_UTF8: &str = "ERR_UTF8";
pub const ERR_UNSUPPORTED: &str = "ERR_UNSUPPORTED";
pub const ERR_TRAILING: &str = "ERR_TRAILING";
pub const ERR_UNKNOWN_VARIANT: &str = "ERR_UNKNOWN_VARIANT";

/// LCS decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("overflow while parsing uleb128-encoded uint32 value")]
    Uleb128Overflow,

    /// A terminating zero digit after the first byte: a shorter encoding exists.
    #[error("invalid uleb128 number (unexpected zero digit)")]
    NonCanonicalUleb128,

    #[error("incorrect length value {0}")]
    LengthOutOfRange(i64),

    #[error("exceeded maximum container depth {0}")]
    DepthExceeded(usize),

    #[error("map keys are not in increasing byte order")]
    KeyOrder,

    #[error("duplicate map key")]
    DuplicateKey,

    #[error("key range {start}..{end} lies outside the input")]
    InvalidKeyRange { start: usize, end: usize },

    #[error("invalid boolean byte 0x{0:02x}")]
    InvalidBool(u8),

    #[error("invalid option tag 0x{0:02x}")]
    InvalidOptionTag(u8),

    #[error("invalid UTF-8 in string")]
    InvalidUtf8,

    #[error("{0} values are not supported by LCS")]
    Unsupported(&'static str),

    #[error("{0} trailing bytes after root value")]
    TrailingBytes(usize),

    #[error("unknown variant index {0}")]
    UnknownVariant(u32),
}

impl DecodeError {
    /// The stable `ERR_*` code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::Truncated { .. } => ERR_TRUNCATED,
            DecodeError::Uleb128Overflow => ERR_OVERFLOW,
            DecodeError::NonCanonicalUleb128 => ERR_NON_CANONICAL,
            DecodeError::LengthOutOfRange(_) => ERR_LENGTH_RANGE,
            DecodeError::DepthExceeded(_) => ERR_DEPTH,
            DecodeError::KeyOrder => ERR_KEY_ORDER,
            DecodeError::DuplicateKey => ERR_DUP_KEY,
            DecodeError::InvalidKeyRange { .. } => ERR_KEY_RANGE,
            DecodeError::InvalidBool(_) => ERR_BOOL,
            DecodeError::InvalidOptionTag(_) => ERR_OPTION_TAG,
            DecodeError::InvalidUtf8 => ERR_UTF8,
            DecodeError::Unsupported(_) => ERR_UNSUPPORTED,
            DecodeError::TrailingBytes(_) => ERR_TRAILING,
            DecodeError::UnknownVariant(_) => ERR_UNKNOWN_VARIANT,
        }
    }
}
