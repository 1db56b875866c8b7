use crate::roster::Team;
use serde::{Deserialize, Serialize};

/// One contest between two teams that share no player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub team_a: Team,
    pub team_b: Team,
}

impl Match {
    pub fn new(id: String, team_a: Team, team_b: Team) -> Self {
        Self { id, team_a, team_b }
    }

    /// All players on both teams.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.team_a
            .players
            .iter()
            .chain(self.team_b.players.iter())
            .map(String::as_str)
    }

    /// Canonical key for the unordered team pair. Two matches with the same
    /// composition share a key even when their ids differ.
    pub fn key(&self) -> String {
        let (a, b) = (self.team_a.key(), self.team_b.key());
        if a <= b {
            format!("{a}~{b}")
        } else {
            format!("{b}~{a}")
        }
    }
}

/// One time-slice: up to `courts` simultaneous matches plus everyone sitting
/// out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub matches: Vec<Match>,
    pub resting: Vec<String>,
    pub completed: bool,
}

impl Round {
    /// Rounds are identified by 1-based position: `r1`, `r2`, ...
    pub fn new(index: usize, matches: Vec<Match>, resting: Vec<String>) -> Self {
        Self {
            id: format!("r{}", index + 1),
            matches,
            resting,
            completed: false,
        }
    }

    /// All players on court this round.
    pub fn playing(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().flat_map(|m| m.players())
    }
}

/// A full generated session plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: String,
    pub rounds: Vec<Round>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
