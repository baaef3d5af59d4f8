//! raffle_pipeline: orchestration surface (validate → select → assign).
//! This crate stays I/O-free: configuration loading lives in `raffle_io`, and
//! the random source is always supplied by the caller.

use raffle_algo::{assign_prizes, draw_selection_order, validate, ValidationError};
use raffle_core::{Assignment, EntropySource, Participant, Preferences, Prize, RandomSource};
use thiserror::Error;
use tracing::{debug, info};

pub mod record;

pub use record::{run, EngineMeta, RunRecord, SourceEcho};

/// Single error surface for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaffleError {
    /// The configuration has structural defects; every defect found is carried.
    #[error("raffle configuration failed validation ({} error(s))", .0.len())]
    ValidationFailure(Vec<ValidationError>),
}

impl RaffleError {
    /// Human-readable messages, in the order the validator produced them.
    pub fn messages(&self) -> Vec<String> {
        match self {
            RaffleError::ValidationFailure(errs) => errs.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Run a raffle with an explicit random source.
///
/// Fails with `ValidationFailure` before any draw is taken if the configuration
/// is inconsistent. Participants left without an available preferred prize are
/// omitted from the result.
pub fn raffle<R>(
    prizes: &[Prize],
    entries: &[Participant],
    preferences: &Preferences,
    rng: &mut R,
) -> Result<Vec<Assignment>, RaffleError>
where
    R: RandomSource + ?Sized,
{
    let order = checked_selection_order(prizes, entries, preferences, rng)?;
    let assignments = assign_prizes(prizes, preferences, &order);
    info!(assigned = assignments.len(), participants = order.len(), "raffle complete");
    Ok(assignments)
}

/// Run a raffle with a fresh operating-system entropy source.
/// The result is not reproducible; inject a `SeededSource` through `raffle` for that.
pub fn raffle_with_entropy(
    prizes: &[Prize],
    entries: &[Participant],
    preferences: &Preferences,
) -> Result<Vec<Assignment>, RaffleError> {
    raffle(prizes, entries, preferences, &mut EntropySource::new())
}

/// Validate, then draw the visitation order.
pub(crate) fn checked_selection_order<R>(
    prizes: &[Prize],
    entries: &[Participant],
    preferences: &Preferences,
    rng: &mut R,
) -> Result<Vec<Participant>, RaffleError>
where
    R: RandomSource + ?Sized,
{
    let errors = validate(prizes, entries, preferences);
    if !errors.is_empty() {
        debug!(errors = errors.len(), "validation failed");
        return Err(RaffleError::ValidationFailure(errors));
    }
    debug!(prizes = prizes.len(), tickets = entries.len(), "validation passed");

    let order = draw_selection_order(entries, rng);
    debug!(order = ?order, "selection order drawn");
    Ok(order)
}
