use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::error::{Result, SchedulerError};
use crate::ids::IdSource;
use crate::persistence::{ScheduleRecord, ScheduleStore, ScheduleSummary};
use crate::roster::MatchType;

use super::engine::{Scheduler, SessionConfig};
use super::round::{Round, Schedule};

/// Orchestrates schedule generation and storage. This is the seam a host
/// transport mounts; the engine below it stays pure.
pub struct ScheduleManager {
    store: Arc<dyn ScheduleStore>,
    ids: Arc<dyn IdSource>,
}

impl ScheduleManager {
    pub fn new(store: Arc<dyn ScheduleStore>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    /// Generates a schedule and persists it. Returns the generated plan.
    pub async fn create_schedule(
        &self,
        players: &[String],
        courts: usize,
        match_type: MatchType,
    ) -> Result<Schedule> {
        let scheduler = Scheduler::new(SessionConfig { courts, match_type });
        let schedule = scheduler.generate_schedule(players, self.ids.as_ref())?;

        let record = ScheduleRecord {
            schedule: schedule.clone(),
            created_at: Utc::now(),
        };
        self.store.save_schedule(&record).await?;

        info!(schedule_id = %schedule.schedule_id, "schedule stored");
        Ok(schedule)
    }

    pub async fn get_schedule(&self, schedule_id: &str) -> Result<Schedule> {
        self.store
            .load_schedule(schedule_id)
            .await?
            .map(|record| record.schedule)
            .ok_or_else(|| SchedulerError::ScheduleNotFound(schedule_id.to_string()))
    }

    /// Flips completion on one round and returns its new state.
    pub async fn toggle_round(&self, schedule_id: &str, round_id: &str) -> Result<Round> {
        self.store.toggle_round(schedule_id, round_id).await
    }

    pub async fn delete_schedule(&self, schedule_id: &str) -> Result<()> {
        self.store.delete_schedule(schedule_id).await
    }

    pub async fn list_schedules(&self) -> Result<Vec<ScheduleSummary>> {
        self.store.list_schedules().await
    }
}
