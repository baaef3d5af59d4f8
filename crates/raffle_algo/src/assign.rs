//! Greedy preference-ordered allocation.
//!
//! Contract:
//! - `remaining` is a count map over the prize multiset; copies of the same
//!   prize are interchangeable.
//! - Participants are visited strictly in `selection_order`. Each takes the
//!   first prize in their own ranking that still has a copy left.
//! - A participant whose ranking is exhausted (or who has no ranking at all)
//!   receives nothing. This is not an error; see `unassigned_participants`.
//! - Unclaimed prizes stay unused; see `leftover_prizes`.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use raffle_core::{Assignment, Multiset, Participant, Preferences, Prize};

/// Assign prizes in visitation order. Output order is decision order.
pub fn assign_prizes(
    prizes: &[Prize],
    preferences: &Preferences,
    selection_order: &[Participant],
) -> Vec<Assignment> {
    let mut remaining: Multiset<'_, Prize> = prizes.iter().collect();
    let mut out = Vec::with_capacity(selection_order.len().min(prizes.len()));

    for participant in selection_order {
        let Some(ranked) = preferences.get(participant) else { continue };
        if let Some(prize) = ranked.iter().find(|p| remaining.contains(p)) {
            remaining.remove_one(prize);
            out.push(Assignment::new(participant.clone(), prize.clone()));
        }
    }
    out
}

/// Participants in `selection_order` that received no assignment, in visit order.
pub fn unassigned_participants(
    selection_order: &[Participant],
    assignments: &[Assignment],
) -> Vec<Participant> {
    let served: BTreeSet<&Participant> = assignments.iter().map(|a| &a.participant).collect();
    selection_order
        .iter()
        .filter(|p| !served.contains(p))
        .cloned()
        .collect()
}

/// Prize copies left over after `assignments`, sorted by identifier.
pub fn leftover_prizes(prizes: &[Prize], assignments: &[Assignment]) -> Vec<Prize> {
    let mut pool: Multiset<'_, Prize> = prizes.iter().collect();
    for a in assignments {
        pool.remove_one(&a.prize);
    }
    pool.iter()
        .flat_map(|(prize, count)| core::iter::repeat(prize).take(count))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prizes(xs: &[&str]) -> Vec<Prize> {
        xs.iter().map(|s| Prize::from(*s)).collect()
    }

    fn people(xs: &[&str]) -> Vec<Participant> {
        xs.iter().map(|s| Participant::from(*s)).collect()
    }

    fn pairs(out: &[Assignment]) -> Vec<(&str, &str)> {
        out.iter().map(|a| (a.participant.as_str(), a.prize.as_str())).collect()
    }

    #[test]
    fn multiset_prizes_are_consumed_by_count() {
        let ps: Preferences = ["alice", "bob", "carol"]
            .iter()
            .map(|p| (Participant::from(*p), prizes(&["foo", "bar"])))
            .collect();
        let out = assign_prizes(&prizes(&["foo", "foo", "bar"]), &ps, &people(&["alice", "bob", "carol"]));
        assert_eq!(pairs(&out), [("alice", "foo"), ("bob", "foo"), ("carol", "bar")]);
    }

    #[test]
    fn earlier_visitors_get_first_choice() {
        let mut ps = Preferences::new();
        ps.insert("alice".into(), prizes(&["car", "bike"]));
        ps.insert("bob".into(), prizes(&["car", "bike"]));
        let stock = prizes(&["bike", "car"]);

        let out = assign_prizes(&stock, &ps, &people(&["bob", "alice"]));
        assert_eq!(pairs(&out), [("bob", "car"), ("alice", "bike")]);
    }

    #[test]
    fn exhausted_ranking_is_silently_skipped() {
        let mut ps = Preferences::new();
        ps.insert("alice".into(), prizes(&["foo"]));
        ps.insert("bob".into(), prizes(&["foo"]));
        let stock = prizes(&["foo", "bar"]);
        let order = people(&["alice", "bob", "nobody"]);

        let out = assign_prizes(&stock, &ps, &order);
        assert_eq!(pairs(&out), [("alice", "foo")]);
        assert_eq!(unassigned_participants(&order, &out), people(&["bob", "nobody"]));
        assert_eq!(leftover_prizes(&stock, &out), prizes(&["bar"]));
    }

    #[test]
    fn leftovers_keep_duplicate_copies() {
        let stock = prizes(&["foo", "bar", "foo", "foo"]);
        let out = vec![Assignment::new("alice".into(), "foo".into())];
        assert_eq!(leftover_prizes(&stock, &out), prizes(&["bar", "foo", "foo"]));
    }
}
