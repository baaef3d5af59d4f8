// crates/raffle_cli/src/main.rs
//
// Wires up exit codes, typed error mapping, logging, CLI parsing, the
// validate-only short-circuit, and the full run path
// (load → source → pipeline → print → optional record file).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};
use raffle_core::{EntropySource, RaffleConfig, RandomSource, SeededSource};
use raffle_algo::ValidationError;
use raffle_io::{canonical_json, hasher, loader, IoError};
use raffle_pipeline::{RaffleError, RunRecord, SourceEcho};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Configuration parsed but failed structural validation; one line per defect.
    Validation(Vec<String>),
    /// Reading, parsing or writing files.
    Io(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("raffle: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_tracing(&args.log_level);

    let result = if args.validate_only { validate_only(&args) } else { run_once(&args) };
    let rc = match result {
        Ok(()) => exitcodes::OK,
        Err(e) => report_error(&e),
    };
    ExitCode::from(rc as u8)
}

/// Diagnostics go to stderr so stdout carries only the raffle output.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("raffle={level}"))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn load(args: &Args) -> Result<loader::LoadedConfig, MainError> {
    let loaded = loader::load_config(&args.config).map_err(map_io_err)?;
    debug!(
        path = %args.config.display(),
        format = ?loaded.format,
        sha256 = %loaded.source_sha256,
        "configuration loaded"
    );
    Ok(loaded)
}

fn validate_only(args: &Args) -> Result<(), MainError> {
    let loaded = load(args)?;
    let cfg = &loaded.config;
    let errors = raffle_algo::validate(&cfg.prizes, &cfg.entries, &cfg.preferences);
    if !errors.is_empty() {
        return Err(validation_err(&errors));
    }
    if !args.quiet {
        println!("configuration OK");
    }
    Ok(())
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let loaded = load(args)?;

    let (mut source, echo): (Box<dyn RandomSource>, SourceEcho) = match args.seed() {
        Some(seed) => {
            if !args.quiet {
                println!("Using random seed: {}", seed.text);
            }
            (
                Box::new(SeededSource::from_seed_bytes(seed.bytes)),
                SourceEcho::Seeded { seed: seed.text.clone() },
            )
        }
        None => {
            if !args.quiet {
                println!("Using system random number generator");
            }
            (Box::new(EntropySource::new()), SourceEcho::System)
        }
    };

    if !args.quiet {
        println!("Running raffle with configuration:");
        println!("{}", render_config(&loaded.config)?);
    }

    let mut record = raffle_pipeline::run(&loaded.config, source.as_mut(), echo).map_err(map_raffle_err)?;
    record.config_sha256 = Some(hasher::sha256_canonical(&loaded.config).map_err(map_io_err)?);

    if !args.quiet {
        println!("{}", "=".repeat(78));
        println!("Results:\n");
    }
    print!("{}", render_results(&record));

    if let Some(out) = &args.out {
        canonical_json::write_canonical_file(&record, out).map_err(map_io_err)?;
        info!(path = %out.display(), "run record written");
    }
    Ok(())
}

fn render_config(cfg: &RaffleConfig) -> Result<String, MainError> {
    serde_json::to_string_pretty(cfg).map_err(|e| MainError::Io(format!("render configuration: {e}")))
}

/// `participant -> prize` lines sorted by participant.
fn render_results(record: &RunRecord) -> String {
    let mut rows: Vec<_> = record.assignments.iter().collect();
    rows.sort_by(|a, b| a.participant.cmp(&b.participant));
    rows.iter()
        .map(|a| format!("{} -> {}\n", a.participant, a.prize))
        .collect()
}

fn report_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(msgs) => {
            eprintln!("raffle: invalid configuration:");
            for m in msgs {
                eprintln!("  - {m}");
            }
            exitcodes::VALIDATION
        }
        MainError::Io(m) => {
            eprintln!("raffle: error: {m}");
            exitcodes::IO
        }
    }
}

fn map_io_err(e: IoError) -> MainError {
    MainError::Io(e.to_string())
}

fn map_raffle_err(e: RaffleError) -> MainError {
    match e {
        RaffleError::ValidationFailure(errors) => validation_err(&errors),
    }
}

/// `[code] message` per defect, in validator order.
fn validation_err(errors: &[ValidationError]) -> MainError {
    MainError::Validation(errors.iter().map(|e| format!("[{}] {e}", e.code())).collect())
}
