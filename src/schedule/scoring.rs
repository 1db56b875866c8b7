//! Candidate ordering for the round packer.
//!
//! Matches are ranked by a strict priority ladder: forced rotation first,
//! then collective recency, rest balance, the single longest waiter, and
//! finally partnership freshness. Ties after every rung fall back to
//! enumeration order via stable sort.

use std::cmp::Ordering;

use super::enumerate::{PendingMatch, TeamSlot};
use super::stats::StateTracker;

/// Rest-average differences at or below this are treated as ties.
pub(crate) const REST_BALANCE_DEAD_BAND: f64 = 0.3;

/// Recency penalty for a team fielded within the last round.
const RECENCY_NEAR_PENALTY: i64 = 100;

/// Recency penalty for a team fielded two rounds ago.
const RECENCY_CLOSE_PENALTY: i64 = 50;

/// Rotation limits derived from roster size.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RotationPolicy {
    /// Longest tolerated run of consecutive rests; a player whose wait
    /// reaches this is urgent and must be scheduled.
    pub rest_cap: i64,
    /// Wait at which a player starts being prioritized ahead of ordinary
    /// rotation factors.
    pub warn_threshold: i64,
}

impl RotationPolicy {
    pub fn for_roster(player_count: usize) -> Self {
        let rest_cap = if player_count <= 7 { 1 } else { 2 };
        Self {
            rest_cap,
            warn_threshold: (rest_cap - 1).max(1),
        }
    }
}

/// Priority vector for one candidate match at the current round.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CandidateScore {
    pub max_wait: i64,
    pub sum_wait: i64,
    pub min_wait: i64,
    pub avg_rest: f64,
    pub freshness: i64,
}

pub(crate) fn score_match(
    m: &PendingMatch,
    teams: &[TeamSlot],
    tracker: &StateTracker,
    round: usize,
) -> CandidateScore {
    let mut max_wait = i64::MIN;
    let mut min_wait = i64::MAX;
    let mut sum_wait = 0;
    let mut rest_total = 0u32;
    let mut player_count = 0u32;

    for player in m.players(teams) {
        let wait = tracker.wait(player, round);
        max_wait = max_wait.max(wait);
        min_wait = min_wait.min(wait);
        sum_wait += wait;
        rest_total += tracker.rest_count(player);
        player_count += 1;
    }

    CandidateScore {
        max_wait,
        sum_wait,
        min_wait,
        avg_rest: f64::from(rest_total) / f64::from(player_count),
        freshness: freshness(m, tracker, round),
    }
}

/// Partnership freshness: lower is fresher. Combined team usage dominates,
/// then a recency penalty per team, then how recently the fresher of the two
/// teams was fielded.
fn freshness(m: &PendingMatch, tracker: &StateTracker, round: usize) -> i64 {
    let team_a = tracker.team(m.team_a);
    let team_b = tracker.team(m.team_b);

    let usage = i64::from(team_a.usage_count) + i64::from(team_b.usage_count);
    let since_a = round as i64 - team_a.last_used_round;
    let since_b = round as i64 - team_b.last_used_round;

    usage * 100 + recency_penalty(since_a) + recency_penalty(since_b) + (10 - since_a.min(since_b))
}

fn recency_penalty(since: i64) -> i64 {
    if since <= 1 {
        RECENCY_NEAR_PENALTY
    } else if since <= 2 {
        RECENCY_CLOSE_PENALTY
    } else {
        0
    }
}

/// Orders candidates best-first. Each rung only decides when it produces a
/// strict difference; everything else falls through to the next.
pub(crate) fn compare(a: &CandidateScore, b: &CandidateScore, policy: &RotationPolicy) -> Ordering {
    // Forced rotation: someone is at or past the rest cap.
    if a.max_wait >= policy.rest_cap || b.max_wait >= policy.rest_cap {
        let ord = b.max_wait.cmp(&a.max_wait);
        if ord != Ordering::Equal {
            return ord;
        }
    } else if a.max_wait >= policy.warn_threshold || b.max_wait >= policy.warn_threshold {
        let ord = b.max_wait.cmp(&a.max_wait);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    let ord = b.sum_wait.cmp(&a.sum_wait);
    if ord != Ordering::Equal {
        return ord;
    }

    if (a.avg_rest - b.avg_rest).abs() > REST_BALANCE_DEAD_BAND {
        let ord = b.avg_rest.total_cmp(&a.avg_rest);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    let ord = b.min_wait.cmp(&a.min_wait);
    if ord != Ordering::Equal {
        return ord;
    }

    a.freshness.cmp(&b.freshness)
}
