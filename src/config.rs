//! Decoder limits.
//!
//! The defaults come from `constants`.  A config can also be loaded from
//! JSON, e.g. `{"max_container_depth": 64}`; omitted fields keep their
//! defaults and unknown fields are rejected.  A `max_length` above the
//! native size limit is rejected on every path that sets it.

use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_CONTAINER_DEPTH, DEFAULT_MAX_LENGTH};

/// Limits applied by an `LcsDeserializer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Number of nested containers a single decode may enter.
    pub max_container_depth: usize,
    /// Largest accepted container length.
    pub max_length: usize,
}

/// Unvalidated wire form of `DecoderConfig`.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawDecoderConfig {
    max_container_depth: usize,
    max_length: usize,
}

impl Default for RawDecoderConfig {
    fn default() -> Self {
        Self {
            max_container_depth: DEFAULT_MAX_CONTAINER_DEPTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_container_depth: DEFAULT_MAX_CONTAINER_DEPTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid decoder config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_length {max_length} exceeds the native size limit {limit}")]
    MaxLengthTooLarge { max_length: usize, limit: usize },
}

impl<'de> Deserialize<'de> for DecoderConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDecoderConfig::deserialize(deserializer)?;
        DecoderConfig::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl DecoderConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawDecoderConfig = serde_json::from_str(text)?;
        DecoderConfig::from_raw(raw)
    }

    fn from_raw(raw: RawDecoderConfig) -> Result<Self, ConfigError> {
        DecoderConfig::default()
            .with_max_container_depth(raw.max_container_depth)
            .with_max_length(raw.max_length)
    }

    pub fn with_max_container_depth(mut self, depth: usize) -> Self {
        self.max_container_depth = depth;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Result<Self, ConfigError> {
        if max_length > DEFAULT_MAX_LENGTH {
            return Err(ConfigError::MaxLengthTooLarge {
                max_length,
                limit: DEFAULT_MAX_LENGTH,
            });
        }
        self.max_length = max_length;
        Ok(self)
    }
}
