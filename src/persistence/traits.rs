use crate::error::Result;
use crate::schedule::{Round, Schedule};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schedule as the store keeps it: the generated plan plus bookkeeping the
/// engine itself never touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub schedule: Schedule,
    pub created_at: DateTime<Utc>,
}

/// Listing entry for stored schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub schedule_id: String,
    pub created_at: DateTime<Utc>,
    pub round_count: usize,
    pub completed_rounds: usize,
}

/// Storage abstraction for generated schedules.
///
/// The store is the only writer of persisted state; round toggling happens
/// here, under the store's own locking, so concurrent hosts cannot interleave
/// a read-modify-write.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn save_schedule(&self, record: &ScheduleRecord) -> Result<()>;
    async fn load_schedule(&self, schedule_id: &str) -> Result<Option<ScheduleRecord>>;
    async fn delete_schedule(&self, schedule_id: &str) -> Result<()>;
    async fn list_schedules(&self) -> Result<Vec<ScheduleSummary>>;

    /// Flips `completed` on the named round and returns its new state. Each
    /// call inverts the flag; two calls restore the original value.
    async fn toggle_round(&self, schedule_id: &str, round_id: &str) -> Result<Round>;
}
