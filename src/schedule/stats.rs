//! Per-player and per-team rotation state.

/// `last_played_round` for a player who has not played yet.
pub(crate) const NEVER_PLAYED_ROUND: i64 = -1;

/// `last_used_round` for a team that has not been fielded yet. Must stay at
/// or below -(rest cap + recency window) so a fresh team never trips the
/// recency penalties in the freshness score.
pub(crate) const NEVER_USED_ROUND: i64 = -10;

#[derive(Debug, Clone)]
pub(crate) struct PlayerStats {
    pub play_count: u32,
    pub rest_count: u32,
    pub last_played_round: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct TeamStats {
    pub usage_count: u32,
    pub last_used_round: i64,
}

/// Tracks rotation state across the scheduling loop. Index-keyed against the
/// player roster and team arena; updated once per committed round.
#[derive(Debug)]
pub(crate) struct StateTracker {
    players: Vec<PlayerStats>,
    teams: Vec<TeamStats>,
}

impl StateTracker {
    pub fn new(player_count: usize, team_count: usize) -> Self {
        Self {
            players: vec![
                PlayerStats {
                    play_count: 0,
                    rest_count: 0,
                    last_played_round: NEVER_PLAYED_ROUND,
                };
                player_count
            ],
            teams: vec![
                TeamStats {
                    usage_count: 0,
                    last_used_round: NEVER_USED_ROUND,
                };
                team_count
            ],
        }
    }

    /// Rounds since the player last played, as seen from `round`. Always ≥ 1:
    /// a player who played the previous round has waited exactly one.
    pub fn wait(&self, player: usize, round: usize) -> i64 {
        round as i64 - self.players[player].last_played_round
    }

    pub fn rest_count(&self, player: usize) -> u32 {
        self.players[player].rest_count
    }

    pub fn play_count(&self, player: usize) -> u32 {
        self.players[player].play_count
    }

    pub fn team(&self, team: usize) -> &TeamStats {
        &self.teams[team]
    }

    /// Applies the outcome of one produced round: every fielded player's play
    /// count and last-played round move, every sitting player's rest count
    /// moves, and both teams of every match are marked used.
    pub fn commit_round(&mut self, round: usize, playing: &[bool], teams_used: &[usize]) {
        for (player, stats) in self.players.iter_mut().enumerate() {
            if playing[player] {
                stats.play_count += 1;
                stats.last_played_round = round as i64;
            } else {
                stats.rest_count += 1;
            }
        }
        for &team in teams_used {
            let stats = &mut self.teams[team];
            stats.usage_count += 1;
            stats.last_used_round = round as i64;
        }
    }
}
