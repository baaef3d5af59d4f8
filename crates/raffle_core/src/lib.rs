//! raffle_core: Core types, multiset helpers, and injectable random sources.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across the
//! engine (`raffle_io`, `raffle_algo`, `raffle_pipeline`, `raffle_cli`).
//!
//! - Opaque identifiers: `Participant`, `Prize`
//! - Inputs/outputs: `Preferences`, `RaffleConfig`, `Assignment`
//! - Count-based multisets (`Multiset`) for the hat and the prize pool
//! - `RandomSource`: the single "uniform integer in [0, n)" primitive, with a
//!   seeded ChaCha20 implementation and an OS-entropy implementation
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod entities;
pub mod multiset;
pub mod rng;
pub mod tokens;

pub use entities::{Assignment, Preferences, RaffleConfig};
pub use multiset::Multiset;
pub use rng::{EntropySource, RandomSource, ScriptedSource, SeededSource};
pub use tokens::{Participant, Prize};
