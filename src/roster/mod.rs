pub mod player;
pub mod team;

pub use player::{MatchType, Roster, LARGE_ROSTER_LIMIT, LARGE_ROSTER_WARNING, MIN_PLAYERS};
pub use team::Team;
