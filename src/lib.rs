//! # lcs-canon — canonical LCS decoding
//!
//! Decode LCS bytes while rejecting every input that is well formed but
//! not canonical, so that independent decoders always agree and
//! re-encoding a decoded value reproduces the input exactly.
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use lcs_canon::from_bytes;
//!
//! # let bytes: &[u8] = &[];
//! let map: BTreeMap<String, u64> = from_bytes(bytes).unwrap();
//! ```
//!
//! Values are decoded through [`Deserialize`], which walks a
//! [`Deserializer`].  [`LcsDeserializer`] can also be driven directly by
//! hand-written or generated per-type decoders.

pub mod config;
pub mod constants;
pub mod decode;
pub mod errors;
pub mod format;
pub mod reader;
pub mod types;

pub use config::{ConfigError, DecoderConfig};
pub use constants::FORMAT_NAME;
pub use decode::LcsDeserializer;
pub use errors::{
    DecodeError, ERR_BOOL, ERR_DEPTH, ERR_DUP_KEY, ERR_KEY_ORDER, ERR_KEY_RANGE,
    ERR_LENGTH_RANGE, ERR_NON_CANONICAL, ERR_OPTION_TAG, ERR_OVERFLOW, ERR_TRAILING,
    ERR_TRUNCATED, ERR_UNKNOWN_VARIANT, ERR_UNSUPPORTED, ERR_UTF8,
};
pub use format::Deserializer;
pub use reader::ByteReader;
pub use types::Deserialize;

// ── Core API ─────────────────────────────────────────────────

/// Decode exactly one `T` from `input` with the default limits.
pub fn from_bytes<T: Deserialize>(input: &[u8]) -> Result<T, DecodeError> {
    from_bytes_with_config(input, &DecoderConfig::default())
}

/// Decode exactly one `T` from `input`; trailing bytes are an error.
pub fn from_bytes_with_config<T: Deserialize>(
    input: &[u8],
    config: &DecoderConfig,
) -> Result<T, DecodeError> {
    let mut de = LcsDeserializer::with_config(input, config);
    let value = T::deserialize(&mut de)?;
    de.finish()?;
    tracing::trace!(len = input.len(), "decoded root value");
    Ok(value)
}
