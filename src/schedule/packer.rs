//! Round packing: two-pass greedy selection, urgency repair, and the safety
//! gate that stops the session before the rotation cap breaks.

use tracing::debug;

use crate::ids::IdSource;

use super::enumerate::{generate_all_matches, PendingMatch, TeamSlot};
use super::scoring::{compare, score_match, RotationPolicy};
use super::stats::StateTracker;

/// A match chosen for the round under construction. Repair can introduce
/// matches that were never in the remaining pool; those must not be removed
/// from it afterwards.
#[derive(Debug)]
pub(crate) struct SelectedMatch {
    pub m: PendingMatch,
    pub from_remaining: bool,
}

/// Working state for one round: chosen matches plus per-player court flags.
#[derive(Debug)]
pub(crate) struct RoundPlan {
    pub selected: Vec<SelectedMatch>,
    pub used: Vec<bool>,
}

impl RoundPlan {
    fn can_place(&self, m: &PendingMatch, teams: &[TeamSlot]) -> bool {
        !m.contains_any(teams, &self.used)
    }

    fn place(&mut self, m: PendingMatch, teams: &[TeamSlot], from_remaining: bool) {
        for player in m.players(teams) {
            self.used[player] = true;
        }
        self.selected.push(SelectedMatch { m, from_remaining });
    }
}

/// Flags players whose wait has reached the rest cap. They must play this
/// round or their consecutive-rest run exceeds the limit.
pub(crate) fn urgent_players(
    tracker: &StateTracker,
    round: usize,
    policy: &RotationPolicy,
    player_count: usize,
) -> Vec<bool> {
    (0..player_count)
        .map(|p| tracker.wait(p, round) >= policy.rest_cap)
        .collect()
}

/// Safety gate: true when an urgent player exists but no remaining match can
/// field any urgent player. Scheduling must halt rather than let the rest cap
/// break.
pub(crate) fn gate_blocks(
    remaining: &[PendingMatch],
    teams: &[TeamSlot],
    urgent: &[bool],
) -> bool {
    if !urgent.iter().any(|&u| u) {
        return false;
    }
    !remaining.iter().any(|m| m.contains_any(teams, urgent))
}

/// Two-pass packing over the scored candidate order.
///
/// Pass A walks the order taking only matches that field at least one urgent
/// player; pass B refills from the top with anything still player-disjoint.
/// Both stop at the court count.
pub(crate) fn pack_round(
    remaining: &[PendingMatch],
    teams: &[TeamSlot],
    tracker: &StateTracker,
    policy: &RotationPolicy,
    round: usize,
    courts: usize,
    urgent: &[bool],
) -> RoundPlan {
    let scores: Vec<_> = remaining
        .iter()
        .map(|m| score_match(m, teams, tracker, round))
        .collect();

    let mut order: Vec<usize> = (0..remaining.len()).collect();
    order.sort_by(|&a, &b| compare(&scores[a], &scores[b], policy));

    let mut plan = RoundPlan {
        selected: Vec::with_capacity(courts),
        used: vec![false; urgent.len()],
    };
    let mut taken = vec![false; remaining.len()];

    // Pass A: force matches that cover urgent players.
    for &idx in &order {
        if plan.selected.len() == courts {
            break;
        }
        let m = &remaining[idx];
        if m.contains_any(teams, urgent) && plan.can_place(m, teams) {
            taken[idx] = true;
            plan.place(m.clone(), teams, true);
        }
    }

    // Pass B: fill the remaining courts with the best-scored disjoint matches.
    for &idx in &order {
        if plan.selected.len() == courts {
            break;
        }
        let m = &remaining[idx];
        if !taken[idx] && plan.can_place(m, teams) {
            taken[idx] = true;
            plan.place(m.clone(), teams, true);
        }
    }

    plan
}

/// Urgency repair: when packing left an urgent player off court and a court
/// is still free, re-enumerate the full match set (repeats of already played
/// compositions allowed, each under a fresh id) and seat the missing players.
pub(crate) fn repair_urgency(
    plan: &mut RoundPlan,
    teams: &[TeamSlot],
    urgent: &[bool],
    courts: usize,
    ids: &dyn IdSource,
) {
    let missing = |plan: &RoundPlan| {
        urgent
            .iter()
            .zip(plan.used.iter())
            .any(|(&is_urgent, &on_court)| is_urgent && !on_court)
    };

    if !missing(plan) || plan.selected.len() >= courts {
        return;
    }

    debug!(
        selected = plan.selected.len(),
        "urgent player missed by packing, entering repair"
    );

    for m in generate_all_matches(teams, ids) {
        if plan.selected.len() == courts || !missing(plan) {
            break;
        }
        let covers_missing = m
            .players(teams)
            .any(|p| urgent[p] && !plan.used[p]);
        if covers_missing && plan.can_place(&m, teams) {
            plan.place(m, teams, false);
        }
    }
}
