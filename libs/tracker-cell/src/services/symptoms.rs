use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use shared_database::ids::new_id;

use crate::models::{SymptomsKind, SymptomsRequest, SymptomsTracking, TrackerError};
use crate::repository::SymptomsRepository;
use crate::services::date_or_now;

pub const SYMPTOMS_HISTORY: u64 = 30;

pub struct SymptomsService {
    entries: Arc<dyn SymptomsRepository>,
}

impl SymptomsService {
    pub fn new(entries: Arc<dyn SymptomsRepository>) -> Self {
        Self { entries }
    }

    pub async fn submit(
        &self,
        user_id: &str,
        request: SymptomsRequest,
    ) -> Result<SymptomsTracking, TrackerError> {
        let kind = SymptomsKind::parse(&request.kind).ok_or_else(|| {
            TrackerError::Validation("type must be Period or Pregnancy".to_string())
        })?;
        let now = Utc::now();
        let date = date_or_now("date", request.date.as_deref(), now)?;

        let entry = self
            .entries
            .create(SymptomsTracking {
                id: new_id(),
                user_id: user_id.to_string(),
                kind,
                date,
                tags: request.tags,
                created_at: now,
                updated_at: now,
            })
            .await?;
        debug!("Stored {:?} symptoms entry {}", kind, entry.id);
        Ok(entry)
    }

    pub async fn history(&self, user_id: &str) -> Result<Vec<SymptomsTracking>, TrackerError> {
        Ok(self.entries.latest(user_id, SYMPTOMS_HISTORY).await?)
    }
}
