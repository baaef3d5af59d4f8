//! raffle_io: the only crate that touches the filesystem.
//!
//! - `loader`: read a local YAML/JSON configuration into `RaffleConfig`
//! - `canonical_json`: sorted-key compact JSON and atomic file writes
//! - `hasher`: SHA-256 digests and seed derivation from free-form phrases
//!
//! Shared error type (`IoError`) with `From` conversions used across modules.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod canonical_json;
pub mod hasher;
pub mod loader;

/// Unified error for raffle_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors.
    #[error("io/path error: {0}")]
    Path(String),

    /// Input is larger than the loader accepts.
    #[error("limit exceeded: {0}")]
    Limit(String),

    /// JSON serialization/deserialization errors.
    #[error("json error: {0}")]
    Json(String),

    /// YAML deserialization errors.
    #[error("yaml error: {0}")]
    Yaml(String),

    /// Document parsed but is not a usable raffle configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json(e.to_string())
    }
}

impl From<serde_yaml::Error> for IoError {
    fn from(e: serde_yaml::Error) -> Self {
        IoError::Yaml(e.to_string())
    }
}

/// Returns true if `s` looks like a URL (any `<scheme>://`, including `file://`).
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    s.trim().contains("://")
}

