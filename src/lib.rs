//! shuttleplan
//!
//! A round-robin match scheduling SDK for badminton club sessions. Given a
//! roster, a court count, and a format (singles or doubles), it produces an
//! ordered sequence of rounds that covers the space of distinct matches while
//! spreading rest fairly and capping how long anyone sits out in a row.
//!
//! # Quick Start
//!
//! ```rust
//! use shuttleplan::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Storage plus an id source for schedules and matches
//!     let store = Arc::new(InMemoryStore::new());
//!     let manager = ScheduleManager::new(store, Arc::new(UuidIds));
//!
//!     let players: Vec<String> = ["Ana", "Ben", "Caro", "Dev", "Ema", "Finn"]
//!         .iter()
//!         .map(|s| s.to_string())
//!         .collect();
//!
//!     // Generate and persist a doubles session on one court
//!     let schedule = manager
//!         .create_schedule(&players, 1, MatchType::Doubles)
//!         .await?;
//!
//!     for round in &schedule.rounds {
//!         println!(
//!             "{}: {} matches, {} resting",
//!             round.id,
//!             round.matches.len(),
//!             round.resting.len()
//!         );
//!     }
//!
//!     // Mark the first round as played
//!     manager.toggle_round(&schedule.schedule_id, "r1").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The engine itself is synchronous and pure — [`schedule::generate_schedule`]
//! can be called directly without the async storage layer.

pub mod error;
pub mod ids;
pub mod persistence;
pub mod roster;
pub mod schedule;

// Re-export commonly used types
pub use error::{Result, SchedulerError};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use persistence::{InMemoryStore, ScheduleRecord, ScheduleStore, ScheduleSummary};
pub use roster::{MatchType, Roster, Team};
pub use schedule::{
    compute_rest_stats, generate_schedule, longest_rest_run, validate_schedule, Match, RestStats,
    Round, Schedule, ScheduleManager, Scheduler, SessionConfig, ValidationReport, MAX_ROUNDS,
};

/// Prelude module for convenient imports
pub mod prelude;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn basic_scheduling_flow() -> Result<()> {
        let store = Arc::new(InMemoryStore::new());
        let manager = ScheduleManager::new(store, Arc::new(SequentialIds::default()));

        let players: Vec<String> = ["Ana", "Ben", "Caro", "Dev", "Ema"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let schedule = manager
            .create_schedule(&players, 1, MatchType::Singles)
            .await?;
        assert!(!schedule.rounds.is_empty());

        let report = validate_schedule(&schedule.rounds);
        assert!(report.valid);

        let round = manager.toggle_round(&schedule.schedule_id, "r1").await?;
        assert!(round.completed);

        Ok(())
    }
}
