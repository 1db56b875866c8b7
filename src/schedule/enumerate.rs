//! Combinatorial enumeration of teams and valid matches.
//!
//! Players, teams, and matches are tracked by index into small arenas rather
//! than by id; names are only resolved when a round is emitted. Enumeration
//! order is a function of roster order and is stable, which the scorer's
//! final tie-break relies on.

use crate::ids::IdSource;
use crate::roster::MatchType;

/// A team in the session arena, as ascending player indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TeamSlot {
    pub members: Vec<usize>,
}

impl TeamSlot {
    pub fn is_disjoint(&self, other: &TeamSlot) -> bool {
        !self.members.iter().any(|m| other.members.contains(m))
    }
}

/// A schedulable match: two disjoint teams from the arena plus the opaque id
/// it will carry if committed.
#[derive(Debug, Clone)]
pub(crate) struct PendingMatch {
    pub id: String,
    pub team_a: usize,
    pub team_b: usize,
}

impl PendingMatch {
    pub fn players<'a>(&self, teams: &'a [TeamSlot]) -> impl Iterator<Item = usize> + 'a {
        teams[self.team_a]
            .members
            .iter()
            .chain(teams[self.team_b].members.iter())
            .copied()
    }

    pub fn contains_any(&self, teams: &[TeamSlot], players: &[bool]) -> bool {
        self.players(teams).any(|p| players[p])
    }
}

/// Every possible team for the roster: one per player in singles, every
/// unordered player pair in doubles.
pub(crate) fn generate_teams(player_count: usize, match_type: MatchType) -> Vec<TeamSlot> {
    match match_type {
        MatchType::Singles => (0..player_count)
            .map(|p| TeamSlot { members: vec![p] })
            .collect(),
        MatchType::Doubles => {
            let mut teams = Vec::with_capacity(player_count * (player_count - 1) / 2);
            for i in 0..player_count {
                for j in (i + 1)..player_count {
                    teams.push(TeamSlot {
                        members: vec![i, j],
                    });
                }
            }
            teams
        }
    }
}

/// Every valid match: unordered team pairs that share no player, in team
/// enumeration order. Each gets a fresh id from the source.
pub(crate) fn generate_all_matches(teams: &[TeamSlot], ids: &dyn IdSource) -> Vec<PendingMatch> {
    let mut matches = Vec::new();
    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            if teams[i].is_disjoint(&teams[j]) {
                matches.push(PendingMatch {
                    id: ids.next_id(),
                    team_a: i,
                    team_b: j,
                });
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn singles_teams_are_one_per_player() {
        let teams = generate_teams(5, MatchType::Singles);
        assert_eq!(teams.len(), 5);
        assert_eq!(teams[3].members, vec![3]);
    }

    #[test]
    fn doubles_teams_are_all_pairs() {
        let teams = generate_teams(5, MatchType::Doubles);
        assert_eq!(teams.len(), 10);
        assert_eq!(teams[0].members, vec![0, 1]);
        assert_eq!(teams[9].members, vec![3, 4]);
    }

    #[test]
    fn singles_matches_cover_all_pairs() {
        let teams = generate_teams(5, MatchType::Singles);
        let matches = generate_all_matches(&teams, &SequentialIds::default());
        assert_eq!(matches.len(), 10);
    }

    #[test]
    fn doubles_matches_exclude_overlapping_teams() {
        // 5 players: C(5,2) = 10 teams, 10 * C(3,2) / 2 = 15 disjoint pairs.
        let teams = generate_teams(5, MatchType::Doubles);
        let matches = generate_all_matches(&teams, &SequentialIds::default());
        assert_eq!(matches.len(), 15);
        for m in &matches {
            assert!(teams[m.team_a].is_disjoint(&teams[m.team_b]));
        }
    }

    #[test]
    fn enumeration_order_is_stable() {
        let teams = generate_teams(6, MatchType::Doubles);
        let a = generate_all_matches(&teams, &SequentialIds::default());
        let b = generate_all_matches(&teams, &SequentialIds::default());
        let pairs_a: Vec<(usize, usize)> = a.iter().map(|m| (m.team_a, m.team_b)).collect();
        let pairs_b: Vec<(usize, usize)> = b.iter().map(|m| (m.team_a, m.team_b)).collect();
        assert_eq!(pairs_a, pairs_b);
    }

    #[test]
    fn every_match_gets_a_fresh_id() {
        let ids = SequentialIds::default();
        let teams = generate_teams(5, MatchType::Singles);
        let first = generate_all_matches(&teams, &ids);
        let second = generate_all_matches(&teams, &ids);
        assert_eq!(first[0].id, "m-1");
        assert_eq!(second[0].id, "m-11");
    }
}
