//! crates/raffle_algo/src/validate.rs
//! Structural validation before any randomness is applied.
//! Deterministic outputs; no RNG.
//!
//! Every check runs regardless of what the others found, so callers receive
//! the complete list of defects in one pass. Emission order is stable:
//! sufficiency, then preference completeness (participants in map order,
//! prizes in first-occurrence order), then preference presence (entries in
//! first-ticket order).

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use raffle_core::entities::distinct_in_order;
use raffle_core::{Participant, Preferences, Prize};

/// One structural defect in a raffle configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Fewer prizes than distinct participants.
    NotEnoughPrizes { participants: usize, prizes: usize },
    /// A participant's preference list omits one of the prize kinds on offer.
    PrizeNotRanked { participant: Participant, prize: Prize },
    /// A participant holds tickets but has no preference list.
    MissingPreferences { participant: Participant },
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NotEnoughPrizes { .. } => "Prizes.Insufficient",
            ValidationError::PrizeNotRanked { .. } => "Preferences.PrizeNotRanked",
            ValidationError::MissingPreferences { .. } => "Preferences.Missing",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotEnoughPrizes { participants, .. } => {
                write!(f, "not enough prizes for {participants} participants")
            }
            ValidationError::PrizeNotRanked { participant, prize } => {
                write!(f, "'{participant}' does not have prize '{prize}' in preference list")
            }
            ValidationError::MissingPreferences { participant } => {
                write!(f, "missing preferences for entry '{participant}'")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// Top-level entry point. An empty result means the configuration is valid.
pub fn validate(
    prizes: &[Prize],
    entries: &[Participant],
    preferences: &Preferences,
) -> Vec<ValidationError> {
    let distinct_entries = distinct_in_order(entries);

    let mut errors = Vec::new();
    errors.extend(check_sufficiency(prizes, distinct_entries.len()));
    errors.extend(check_preference_completeness(prizes, preferences));
    errors.extend(check_preference_presence(&distinct_entries, preferences));
    errors
}

fn check_sufficiency(prizes: &[Prize], participants: usize) -> Option<ValidationError> {
    (prizes.len() < participants).then(|| ValidationError::NotEnoughPrizes {
        participants,
        prizes: prizes.len(),
    })
}

/// Keyed by the preference map itself; a ranked list for someone with no
/// tickets is still checked.
fn check_preference_completeness(prizes: &[Prize], preferences: &Preferences) -> Vec<ValidationError> {
    let kinds = distinct_in_order(prizes);
    let mut errors = Vec::new();

    for (participant, ranked) in preferences {
        let ranked: BTreeSet<&Prize> = ranked.iter().collect();
        for prize in &kinds {
            if !ranked.contains(*prize) {
                errors.push(ValidationError::PrizeNotRanked {
                    participant: participant.clone(),
                    prize: (*prize).clone(),
                });
            }
        }
    }
    errors
}

fn check_preference_presence(entries: &[&Participant], preferences: &Preferences) -> Vec<ValidationError> {
    entries
        .iter()
        .filter(|p| !preferences.contains_key(**p))
        .map(|p| ValidationError::MissingPreferences { participant: (*p).clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn prizes(xs: &[&str]) -> Vec<Prize> {
        xs.iter().map(|s| Prize::from(*s)).collect()
    }

    fn entries(xs: &[&str]) -> Vec<Participant> {
        xs.iter().map(|s| Participant::from(*s)).collect()
    }

    fn prefs(rows: &[(&str, &[&str])]) -> Preferences {
        rows.iter().map(|(p, ranked)| (Participant::from(*p), prizes(ranked))).collect()
    }

    #[test]
    fn valid_configuration_has_no_errors() {
        let errs = validate(
            &prizes(&["foo", "bar"]),
            &entries(&["alice", "bob"]),
            &prefs(&[("alice", &["foo", "bar"]), ("bob", &["bar", "foo"])]),
        );
        assert!(errs.is_empty(), "{errs:?}");
    }

    #[test]
    fn insufficient_prizes_counts_distinct_participants() {
        let ps = prefs(&[("alice", &["foo"]), ("bob", &["foo"])]);
        // Extra tickets do not raise the participant count.
        let ok = validate(&prizes(&["foo", "foo"]), &entries(&["alice", "bob", "alice", "bob"]), &ps);
        assert!(ok.is_empty());

        let errs = validate(&prizes(&["foo"]), &entries(&["alice", "bob", "alice"]), &ps);
        assert_eq!(errs, vec![ValidationError::NotEnoughPrizes { participants: 2, prizes: 1 }]);
        assert_eq!(errs[0].to_string(), "not enough prizes for 2 participants");
    }

    #[test]
    fn reports_every_unranked_prize() {
        let errs = validate(
            &prizes(&["foo", "bar", "foo", "baz"]),
            &entries(&["alice"]),
            &prefs(&[("alice", &["bar"])]),
        );
        let msgs: Vec<_> = errs.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            msgs,
            [
                "'alice' does not have prize 'foo' in preference list",
                "'alice' does not have prize 'baz' in preference list",
            ]
        );
    }

    #[test]
    fn completeness_is_keyed_by_preferences_not_entries() {
        // dave holds no ticket but his incomplete list is still reported.
        let errs = validate(
            &prizes(&["foo", "bar"]),
            &entries(&["alice"]),
            &prefs(&[("alice", &["foo", "bar"]), ("dave", &["foo"])]),
        );
        assert_eq!(
            errs,
            vec![ValidationError::PrizeNotRanked { participant: "dave".into(), prize: "bar".into() }]
        );
    }

    #[test]
    fn missing_preferences_reported_once_per_participant() {
        let errs = validate(
            &prizes(&["foo", "foo", "foo"]),
            &entries(&["carol", "alice", "carol"]),
            &prefs(&[("alice", &["foo"])]),
        );
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].to_string(), "missing preferences for entry 'carol'");
        assert_eq!(errs[0].code(), "Preferences.Missing");
    }

    #[test]
    fn all_checks_fire_together() {
        let errs = validate(
            &prizes(&["foo", "baz"]),
            &entries(&["alice", "bob", "carol"]),
            &prefs(&[("alice", &["foo"]), ("bob", &["baz"])]),
        );
        let msgs: Vec<_> = errs.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            msgs,
            [
                "not enough prizes for 3 participants",
                "'alice' does not have prize 'baz' in preference list",
                "'bob' does not have prize 'foo' in preference list",
                "missing preferences for entry 'carol'",
            ]
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let p = prizes(&["foo"]);
        let e = entries(&["alice", "bob"]);
        let ps = prefs(&[("alice", &[])]);
        assert_eq!(validate(&p, &e, &ps), validate(&p, &e, &ps));
    }
}
