//! The scheduling driver: normalise, enumerate, then pack rounds until the
//! match space is covered or the safety gate stops the session.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{Result, SchedulerError};
use crate::ids::IdSource;
use crate::roster::{MatchType, Roster, Team, LARGE_ROSTER_WARNING};

use super::enumerate::{generate_all_matches, generate_teams, TeamSlot};
use super::packer::{gate_blocks, pack_round, repair_urgency, urgent_players};
use super::round::{Match, Round, Schedule};
use super::scoring::RotationPolicy;
use super::stats::StateTracker;

/// Hard cap on produced rounds. A legitimate session never gets near this;
/// hitting it means the remaining pool is not draining.
pub const MAX_ROUNDS: usize = 1000;

/// Session parameters fixed for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub courts: usize,
    pub match_type: MatchType,
}

/// Generates complete session schedules.
///
/// Pure with respect to its inputs: the same roster, config, and id sequence
/// always yield the same schedule. No I/O, no clock, no hidden state.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SessionConfig,
}

impl Scheduler {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn generate_schedule(&self, players: &[String], ids: &dyn IdSource) -> Result<Schedule> {
        if self.config.courts < 1 {
            return Err(SchedulerError::InvalidCourtCount);
        }
        let roster = Roster::normalize(players)?;
        let warning = roster.is_large().then(|| LARGE_ROSTER_WARNING.to_string());

        info!(
            players = roster.len(),
            courts = self.config.courts,
            match_type = ?self.config.match_type,
            "generating schedule"
        );

        let schedule_id = ids.next_id();
        let policy = RotationPolicy::for_roster(roster.len());
        let teams = generate_teams(roster.len(), self.config.match_type);
        let mut remaining = generate_all_matches(&teams, ids);
        let mut tracker = StateTracker::new(roster.len(), teams.len());
        let mut rounds = Vec::new();

        let mut round = 0;
        while !remaining.is_empty() && round < MAX_ROUNDS {
            let urgent = urgent_players(&tracker, round, &policy, roster.len());
            if gate_blocks(&remaining, &teams, &urgent) {
                debug!(round, "no remaining match covers an urgent player, stopping");
                break;
            }

            let mut plan = pack_round(
                &remaining,
                &teams,
                &tracker,
                &policy,
                round,
                self.config.courts,
                &urgent,
            );
            repair_urgency(&mut plan, &teams, &urgent, self.config.courts, ids);
            if plan.selected.is_empty() {
                break;
            }

            let committed: HashSet<String> = plan
                .selected
                .iter()
                .filter(|s| s.from_remaining)
                .map(|s| s.m.id.clone())
                .collect();
            remaining.retain(|m| !committed.contains(&m.id));

            let teams_used: Vec<usize> = plan
                .selected
                .iter()
                .flat_map(|s| [s.m.team_a, s.m.team_b])
                .collect();

            let matches: Vec<Match> = plan
                .selected
                .iter()
                .map(|s| {
                    Match::new(
                        s.m.id.clone(),
                        resolve_team(&teams[s.m.team_a], &roster),
                        resolve_team(&teams[s.m.team_b], &roster),
                    )
                })
                .collect();
            let resting: Vec<String> = roster
                .players()
                .iter()
                .enumerate()
                .filter(|(idx, _)| !plan.used[*idx])
                .map(|(_, name)| name.clone())
                .collect();

            rounds.push(Round::new(round, matches, resting));
            tracker.commit_round(round, &plan.used, &teams_used);
            round += 1;
        }

        info!(rounds = rounds.len(), "schedule complete");

        Ok(Schedule {
            schedule_id,
            rounds,
            warning,
        })
    }
}

fn resolve_team(slot: &TeamSlot, roster: &Roster) -> Team {
    Team::new(
        slot.members
            .iter()
            .map(|&p| roster.players()[p].clone())
            .collect(),
    )
}

/// One-shot convenience over [`Scheduler`].
pub fn generate_schedule(
    players: &[String],
    courts: usize,
    match_type: MatchType,
    ids: &dyn IdSource,
) -> Result<Schedule> {
    Scheduler::new(SessionConfig { courts, match_type }).generate_schedule(players, ids)
}
