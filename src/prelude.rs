//! Prelude module with commonly used types and traits
//!
//! Import this module to get all the essential types for using shuttleplan:
//!
//! ```rust
//! use shuttleplan::prelude::*;
//! ```

pub use crate::{
    error::{Result, SchedulerError},
    ids::{IdSource, SequentialIds, UuidIds},
    persistence::{InMemoryStore, ScheduleRecord, ScheduleStore, ScheduleSummary},
    roster::{MatchType, Roster, Team, LARGE_ROSTER_WARNING, MIN_PLAYERS},
    schedule::{
        compute_rest_stats, generate_schedule, longest_rest_run, validate_schedule, Match,
        RestStats, Round, Schedule, ScheduleManager, Scheduler, SessionConfig, ValidationReport,
        MAX_ROUNDS,
    },
};

// Re-export common external dependencies
pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
