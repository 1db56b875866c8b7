use super::traits::{ScheduleRecord, ScheduleStore, ScheduleSummary};
use crate::error::{Result, SchedulerError};
use crate::schedule::Round;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// In-memory schedule store (for development/testing and single-process
/// hosts).
pub struct InMemoryStore {
    schedules: Arc<RwLock<HashMap<String, ScheduleRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            schedules: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn save_schedule(&self, record: &ScheduleRecord) -> Result<()> {
        let mut schedules = self.schedules.write().await;
        schedules.insert(record.schedule.schedule_id.clone(), record.clone());
        Ok(())
    }

    async fn load_schedule(&self, schedule_id: &str) -> Result<Option<ScheduleRecord>> {
        let schedules = self.schedules.read().await;
        Ok(schedules.get(schedule_id).cloned())
    }

    async fn delete_schedule(&self, schedule_id: &str) -> Result<()> {
        let mut schedules = self.schedules.write().await;
        schedules
            .remove(schedule_id)
            .map(|_| ())
            .ok_or_else(|| SchedulerError::ScheduleNotFound(schedule_id.to_string()))
    }

    async fn list_schedules(&self) -> Result<Vec<ScheduleSummary>> {
        let schedules = self.schedules.read().await;
        let mut summaries: Vec<ScheduleSummary> = schedules
            .values()
            .map(|record| ScheduleSummary {
                schedule_id: record.schedule.schedule_id.clone(),
                created_at: record.created_at,
                round_count: record.schedule.rounds.len(),
                completed_rounds: record
                    .schedule
                    .rounds
                    .iter()
                    .filter(|r| r.completed)
                    .count(),
            })
            .collect();
        summaries.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.schedule_id.cmp(&b.schedule_id))
        });
        Ok(summaries)
    }

    async fn toggle_round(&self, schedule_id: &str, round_id: &str) -> Result<Round> {
        let mut schedules = self.schedules.write().await;
        let record = schedules
            .get_mut(schedule_id)
            .ok_or_else(|| SchedulerError::ScheduleNotFound(schedule_id.to_string()))?;

        let round = record
            .schedule
            .rounds
            .iter_mut()
            .find(|r| r.id == round_id)
            .ok_or_else(|| SchedulerError::RoundNotFound(round_id.to_string()))?;

        round.completed = !round.completed;
        Ok(round.clone())
    }
}
