// crates/raffle_cli/src/args.rs
//
// CLI argument surface and seed handling.
//
// - CONFIG is a local YAML/JSON file (no scheme:// paths)
// - SEED is optional and any string is accepted. A decimal u64 or 0x-hex
//   (≤16 digits) maps directly onto the ChaCha20 seed; anything else is hashed
//   (SHA-256) into the full seed. Without SEED, or with an empty one, the OS
//   entropy source is used.

use std::path::{Path, PathBuf};

use clap::Parser;
use raffle_io::hasher::seed_from_phrase;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "raffle",
    disable_help_subcommand = true,
    about = "Draw a random visiting order and hand out prizes by preference",
    after_help = "Without SEED the operating system's cryptographic random generator is used \
                  and results are not repeatable."
)]
pub struct Args {
    /// Raffle configuration (YAML or JSON) with `prizes`, `entries` and `preferences`.
    pub config: PathBuf,

    /// Optional seed for repeatable results.
    pub seed: Option<String>,

    /// Write the full run record (canonical JSON) to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Check the configuration only; do not draw.
    #[arg(long)]
    pub validate_only: bool,

    /// Print only the result lines.
    #[arg(long)]
    pub quiet: bool,

    /// Log level for diagnostics on stderr (`RUST_LOG` overrides).
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// A seed as typed by the user plus the 32 bytes it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSpec {
    pub text: String,
    pub bytes: [u8; 32],
}

/// Errors surfaced by argument validation.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

impl Args {
    /// The seed to draw with, or `None` for the OS entropy source.
    pub fn seed(&self) -> Option<SeedSpec> {
        self.seed.as_deref().and_then(parse_seed)
    }
}

/// Seed parser: decimal u64, 0x-hex (1..=16 nybbles), or any other phrase.
/// Blank input means "no seed".
pub fn parse_seed(s: &str) -> Option<SeedSpec> {
    let text = s.trim();
    if text.is_empty() {
        return None;
    }
    let bytes = match numeric_seed(text) {
        Some(n) => u64_seed_bytes(n),
        None => seed_from_phrase(text),
    };
    Some(SeedSpec { text: text.to_string(), bytes })
}

/// `None` means "not a clean u64, treat as phrase".
fn numeric_seed(s: &str) -> Option<u64> {
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return u64::from_str_radix(rest, 16).ok();
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u64>().ok();
    }
    None
}

/// Same mapping as `SeededSource::from_seed_u64`.
fn u64_seed_bytes(n: u64) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&n.to_le_bytes());
    seed
}

#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

/// Ensure a path is local (no scheme) and exists as a regular file.
fn ensure_local_exists(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    match std::fs::metadata(p) {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(CliError::NotFound(p.display().to_string())),
    }
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    ensure_local_exists(&args.config)?;
    if let Some(out) = &args.out {
        if let Some(s) = out.to_str() {
            if has_scheme(s) {
                return Err(CliError::NonLocalPath(s.to_string()));
            }
        }
    }
    Ok(args)
}
