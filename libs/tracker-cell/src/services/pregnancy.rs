use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};

use shared_database::ids::new_id;
use shared_utils::validation::non_blank;

use crate::models::{PregnancyRequest, PregnancyTracker, PregnancyView, TrackerError};
use crate::repository::PregnancyRepository;
use crate::services::parse_date;

/// Naegele's rule: due date is 280 days after the last menstrual period.
pub const GESTATION_DAYS: i64 = 280;

pub struct PregnancyService {
    trackers: Arc<dyn PregnancyRepository>,
}

impl PregnancyService {
    pub fn new(trackers: Arc<dyn PregnancyRepository>) -> Self {
        Self { trackers }
    }

    pub async fn current(&self, user_id: &str) -> Result<Option<PregnancyView>, TrackerError> {
        let now = Utc::now();
        Ok(self
            .trackers
            .find_by_user(user_id)
            .await?
            .map(|tracker| PregnancyView {
                current_week: tracker.current_week(now),
                tracker,
            }))
    }

    /// Creates the user's tracker or overwrites the existing one in place.
    pub async fn upsert(
        &self,
        user_id: &str,
        request: PregnancyRequest,
    ) -> Result<PregnancyView, TrackerError> {
        if request.last_period_date.trim().is_empty() {
            return Err(TrackerError::Validation("lastPeriodDate is required".to_string()));
        }
        let last_period_date = parse_date("lastPeriodDate", &request.last_period_date)?;
        let due_date = match non_blank(request.due_date.as_deref()) {
            Some(raw) => parse_date("dueDate", &raw)?,
            None => last_period_date + Duration::days(GESTATION_DAYS),
        };
        if due_date <= last_period_date {
            return Err(TrackerError::Validation(
                "dueDate must be after lastPeriodDate".to_string(),
            ));
        }
        if request.weight.is_some_and(|w| w <= 0.0) {
            return Err(TrackerError::Validation("weight must be greater than 0".to_string()));
        }

        let now = Utc::now();
        let tracker = match self.trackers.find_by_user(user_id).await? {
            Some(existing) => {
                debug!("Updating pregnancy tracker {}", existing.id);
                let tracker = PregnancyTracker {
                    due_date,
                    last_period_date,
                    weight: request.weight,
                    notes: non_blank(request.notes.as_deref()),
                    updated_at: now,
                    ..existing
                };
                self.trackers.update(&tracker).await?;
                tracker
            }
            None => {
                let tracker = self
                    .trackers
                    .create(PregnancyTracker {
                        id: new_id(),
                        user_id: user_id.to_string(),
                        due_date,
                        last_period_date,
                        weight: request.weight,
                        notes: non_blank(request.notes.as_deref()),
                        created_at: now,
                        updated_at: now,
                    })
                    .await?;
                info!("Started pregnancy tracker for user {}", user_id);
                tracker
            }
        };

        Ok(PregnancyView {
            current_week: tracker.current_week(now),
            tracker,
        })
    }
}
