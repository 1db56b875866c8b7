use serde::{Deserialize, Serialize};

/// A team: one player in singles, two in doubles.
///
/// Serializes as a bare player array, which is what the host API expects for
/// the `teamA`/`teamB` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    pub players: Vec<String>,
}

impl Team {
    pub fn new(players: Vec<String>) -> Self {
        Self { players }
    }

    /// Canonical key: sorted player ids joined with `|`. Teams compare equal
    /// regardless of player order.
    pub fn key(&self) -> String {
        let mut sorted: Vec<&str> = self.players.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.join("|")
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    pub fn is_disjoint(&self, other: &Team) -> bool {
        !self.players.iter().any(|p| other.contains(p))
    }
}
