// crates/raffle_pipeline/src/record.rs
//
// Audit record of one raffle run: what was drawn, who got what, who got
// nothing, which prizes were left, and how the random source was set up.
//
// - `selection_order` is the full visitation order, so a reader can replay the
//   greedy assignment by hand from the configuration.
// - `unassigned` lists participants whose ranking was exhausted; the core
//   result omits them, the record names them.
// - `config_sha256` is filled by the caller that loaded the configuration.

use raffle_algo::{assign_prizes, leftover_prizes, unassigned_participants};
use raffle_core::{Assignment, Participant, Prize, RaffleConfig, RandomSource};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{checked_selection_order, RaffleError};

/// Engine identifiers echoed into every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMeta {
    pub name: String,
    pub version: String,
}

impl Default for EngineMeta {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// How the random source was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceEcho {
    /// ChaCha20 seeded from the given seed text; reproducible.
    Seeded { seed: String },
    /// Operating-system entropy; not reproducible.
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub engine: EngineMeta,
    pub source: SourceEcho,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub config_sha256: Option<String>,
    pub selection_order: Vec<Participant>,
    pub assignments: Vec<Assignment>,
    pub unassigned: Vec<Participant>,
    pub leftover_prizes: Vec<Prize>,
}

/// Run a raffle over `config` and return the full audit record.
pub fn run<R>(config: &RaffleConfig, rng: &mut R, source: SourceEcho) -> Result<RunRecord, RaffleError>
where
    R: RandomSource + ?Sized,
{
    let order = checked_selection_order(&config.prizes, &config.entries, &config.preferences, rng)?;
    let assignments = assign_prizes(&config.prizes, &config.preferences, &order);
    let unassigned = unassigned_participants(&order, &assignments);
    let leftover = leftover_prizes(&config.prizes, &assignments);

    for p in &unassigned {
        warn!(participant = %p, "no preferred prize left");
    }
    info!(
        assigned = assignments.len(),
        unassigned = unassigned.len(),
        leftover = leftover.len(),
        "raffle complete"
    );

    Ok(RunRecord {
        engine: EngineMeta::default(),
        source,
        config_sha256: None,
        selection_order: order,
        assignments,
        unassigned,
        leftover_prizes: leftover,
    })
}
