// crates/raffle_algo/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Pure raffle stages. No I/O, no logging, no hidden randomness: every draw
//! comes from the `RandomSource` the caller passes in.
//!
//! - `validate`: structural checks on (prizes, entries, preferences)
//! - `select`  : deduplicated random visitation order
//! - `assign`  : greedy preference-ordered allocation over a prize multiset

extern crate alloc;

pub use raffle_core::{Assignment, Participant, Preferences, Prize, RandomSource};

pub mod assign;
pub mod select;
pub mod validate;

pub use assign::{assign_prizes, leftover_prizes, unassigned_participants};
pub use select::draw_selection_order;
pub use validate::{validate, ValidationError};
