use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use shared_database::ids::new_id;
use shared_utils::validation::non_blank;

use crate::models::{PeriodCycle, PeriodCycleRequest, TrackerError};
use crate::repository::PeriodRepository;
use crate::services::parse_date;

pub const CYCLE_HISTORY: u64 = 12;

pub struct PeriodService {
    cycles: Arc<dyn PeriodRepository>,
}

impl PeriodService {
    pub fn new(cycles: Arc<dyn PeriodRepository>) -> Self {
        Self { cycles }
    }

    pub async fn add_cycle(
        &self,
        user_id: &str,
        request: PeriodCycleRequest,
    ) -> Result<PeriodCycle, TrackerError> {
        if request.start_date.trim().is_empty() {
            return Err(TrackerError::Validation("startDate is required".to_string()));
        }
        let start_date = parse_date("startDate", &request.start_date)?;
        let end_date = match non_blank(request.end_date.as_deref()) {
            Some(raw) => Some(parse_date("endDate", &raw)?),
            None => None,
        };
        if end_date.is_some_and(|end| end < start_date) {
            return Err(TrackerError::Validation(
                "endDate cannot be before startDate".to_string(),
            ));
        }
        if request.cycle_length.is_some_and(|len| len <= 0) {
            return Err(TrackerError::Validation(
                "cycleLength must be greater than 0".to_string(),
            ));
        }

        let now = Utc::now();
        let cycle = self
            .cycles
            .create(PeriodCycle {
                id: new_id(),
                user_id: user_id.to_string(),
                start_date,
                end_date,
                cycle_length: request.cycle_length,
                flow: non_blank(request.flow.as_deref()),
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!("Recorded period cycle {} for user {}", cycle.id, user_id);
        Ok(cycle)
    }

    pub async fn cycles(&self, user_id: &str) -> Result<Vec<PeriodCycle>, TrackerError> {
        Ok(self.cycles.latest(user_id, CYCLE_HISTORY).await?)
    }

    pub async fn reset(&self, user_id: &str) -> Result<u64, TrackerError> {
        let removed = self.cycles.delete_by_user(user_id).await?;
        info!("Reset period tracker for user {} ({} cycles)", user_id, removed);
        Ok(removed)
    }
}
