//! Raffle inputs and outputs.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokens::{Participant, Prize};

/// Ranked prize list per participant, most desirable first.
///
/// A `BTreeMap` keeps every walk over the map in participant order, so
/// validation output is byte-identical across runs.
pub type Preferences = BTreeMap<Participant, Vec<Prize>>;

/// One allocation decision, in the order the decision was made.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub participant: Participant,
    pub prize: Prize,
}

impl Assignment {
    pub fn new(participant: Participant, prize: Prize) -> Self {
        Self { participant, prize }
    }
}

/// The three plain structures a raffle consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RaffleConfig {
    /// Prize multiset; duplicates are additional copies.
    pub prizes: Vec<Prize>,
    /// Ticket list; duplicates are additional tickets for the same participant.
    pub entries: Vec<Participant>,
    pub preferences: Preferences,
}

/// Deduplicate a slice by equality, keeping the first occurrence of each value.
pub fn distinct_in_order<T: Ord>(items: &[T]) -> Vec<&T> {
    let mut seen = alloc::collections::BTreeSet::new();
    items.iter().filter(|it| seen.insert(*it)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn distinct_keeps_first_ticket_order() {
        let entries: Vec<Participant> =
            vec!["bob".into(), "alice".into(), "bob".into(), "carol".into(), "alice".into()];
        let names: Vec<&str> = distinct_in_order(&entries).into_iter().map(|p| p.as_str()).collect();
        assert_eq!(names, ["bob", "alice", "carol"]);
    }
}
