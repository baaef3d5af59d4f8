//! Loader: read a local raffle configuration (YAML or JSON) and return a typed
//! `RaffleConfig` plus the digest of the source bytes. No network I/O.
//!
//! The document must be a mapping with `prizes`, `entries` and `preferences`.
//! Unknown keys are ignored so configs can carry comments-as-data (titles, dates).

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use raffle_core::{Participant, Preferences, Prize, RaffleConfig};
use serde::Deserialize;

use crate::{hasher, looks_like_url_strict, IoError};

/// Upper bound on configuration size.
pub const MAX_CONFIG_BYTES: u64 = 4 * 1024 * 1024;

/// Source syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` → JSON; everything else is read as YAML (a JSON superset).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// A parsed configuration and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RaffleConfig,
    pub format: ConfigFormat,
    /// SHA-256 (lowercase hex) of the raw file bytes.
    pub source_sha256: String,
}

/// Raw document shape; every key optional so a missing one can be named.
#[derive(Deserialize)]
struct RawConfig {
    prizes: Option<Vec<Prize>>,
    entries: Option<Vec<Participant>>,
    preferences: Option<Preferences>,
}

/// Read, size-check, parse and hash the configuration at `path`.
pub fn load_config(path: &Path) -> Result<LoadedConfig, IoError> {
    if let Some(s) = path.to_str() {
        if looks_like_url_strict(s) {
            return Err(IoError::Path(format!("not a local path: {s}")));
        }
    }

    let bytes = read_with_limit(path)?;
    let format = ConfigFormat::from_path(path);
    let config = parse_config(&bytes, format)?;

    Ok(LoadedConfig {
        config,
        format,
        source_sha256: hasher::sha256_hex(&bytes),
    })
}

/// Parse configuration bytes in the given syntax.
pub fn parse_config(bytes: &[u8], format: ConfigFormat) -> Result<RaffleConfig, IoError> {
    let raw: Option<RawConfig> = match format {
        ConfigFormat::Json => serde_json::from_slice(bytes)?,
        ConfigFormat::Yaml => serde_yaml::from_slice(bytes)?,
    };
    let raw = raw.ok_or_else(|| IoError::Config("document is empty".into()))?;

    Ok(RaffleConfig {
        prizes: raw.prizes.ok_or_else(|| missing("prizes"))?,
        entries: raw.entries.ok_or_else(|| missing("entries"))?,
        preferences: raw.preferences.ok_or_else(|| missing("preferences"))?,
    })
}

fn missing(key: &str) -> IoError {
    IoError::Config(format!("missing key '{key}'"))
}

fn read_with_limit(path: &Path) -> Result<Vec<u8>, IoError> {
    let f = File::open(path).map_err(|e| IoError::Path(format!("open {}: {e}", path.display())))?;
    let mut buf = Vec::new();
    f.take(MAX_CONFIG_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| IoError::Path(format!("read {}: {e}", path.display())))?;
    if buf.len() as u64 > MAX_CONFIG_BYTES {
        return Err(IoError::Limit(format!(
            "{} exceeds {MAX_CONFIG_BYTES} bytes",
            path.display()
        )));
    }
    Ok(buf)
}
