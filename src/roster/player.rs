use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};

/// Smallest roster the scheduler accepts.
pub const MIN_PLAYERS: usize = 5;

/// Rosters above this size get a degradation warning on the schedule.
pub const LARGE_ROSTER_LIMIT: usize = 16;

/// Warning tag attached to schedules for oversized rosters.
pub const LARGE_ROSTER_WARNING: &str = "large_n; fallback_to_greedy";

/// Match format for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    /// Players per team for this format.
    pub fn team_size(&self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::Doubles => 2,
        }
    }
}

/// A normalized session roster.
///
/// Built from raw host input: ids are trimmed, empties dropped, and
/// duplicates removed keeping the first occurrence. Order is preserved; the
/// engine's tie-breaking depends on it.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    pub fn normalize(raw: &[String]) -> Result<Self> {
        let mut players: Vec<String> = Vec::with_capacity(raw.len());
        for id in raw {
            let id = id.trim();
            if id.is_empty() {
                continue;
            }
            if !players.iter().any(|p| p == id) {
                players.push(id.to_string());
            }
        }

        if players.len() < MIN_PLAYERS {
            return Err(SchedulerError::NotEnoughPlayers {
                min: MIN_PLAYERS,
                found: players.len(),
            });
        }

        Ok(Self { players })
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether this roster is large enough to warrant the degradation warning.
    pub fn is_large(&self) -> bool {
        self.players.len() > LARGE_ROSTER_LIMIT
    }
}
