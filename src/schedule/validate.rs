//! Offline schedule checks, mainly for tests and host-side sanity passes.

use std::collections::{BTreeMap, HashSet};

use super::round::Round;

/// Result of [`validate_schedule`].
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks that no player is double-booked within a round and that match ids
/// never repeat across the schedule.
pub fn validate_schedule(rounds: &[Round]) -> ValidationReport {
    let mut errors = Vec::new();
    let mut match_ids: HashSet<&str> = HashSet::new();

    for round in rounds {
        let mut on_court: HashSet<&str> = HashSet::new();
        for m in &round.matches {
            if !match_ids.insert(&m.id) {
                errors.push(format!("match id {} repeats in round {}", m.id, round.id));
            }
            for player in m.players() {
                if !on_court.insert(player) {
                    errors.push(format!(
                        "player {player} appears in more than one match in round {}",
                        round.id
                    ));
                }
            }
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Rest totals per player plus the spread between the most- and least-rested.
#[derive(Debug, Clone)]
pub struct RestStats {
    pub rest_counts: BTreeMap<String, u32>,
    pub max_diff: u32,
}

/// Counts resting rounds per player. Players who never rest still appear
/// with a zero count.
pub fn compute_rest_stats(rounds: &[Round], players: &[String]) -> RestStats {
    let mut rest_counts: BTreeMap<String, u32> =
        players.iter().map(|p| (p.clone(), 0)).collect();

    for round in rounds {
        for player in &round.resting {
            if let Some(count) = rest_counts.get_mut(player) {
                *count += 1;
            }
        }
    }

    let max = rest_counts.values().copied().max().unwrap_or(0);
    let min = rest_counts.values().copied().min().unwrap_or(0);

    RestStats {
        rest_counts,
        max_diff: max - min,
    }
}

/// Longest run of consecutive rounds the player sits out.
pub fn longest_rest_run(rounds: &[Round], player: &str) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    for round in rounds {
        if round.resting.iter().any(|p| p == player) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
