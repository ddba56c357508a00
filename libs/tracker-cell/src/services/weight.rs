use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use shared_database::ids::new_id;
use shared_utils::validation::non_blank;

use crate::models::{TrackerError, WeightEntry, WeightRequest};
use crate::repository::WeightRepository;
use crate::services::date_or_now;

pub const WEIGHT_HISTORY: u64 = 30;

/// Body-mass index from kilograms and centimetres.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let metres = height_cm / 100.0;
    Some(weight_kg / (metres * metres))
}

pub struct WeightService {
    entries: Arc<dyn WeightRepository>,
}

impl WeightService {
    pub fn new(entries: Arc<dyn WeightRepository>) -> Self {
        Self { entries }
    }

    pub async fn add_entry(
        &self,
        user_id: &str,
        request: WeightRequest,
    ) -> Result<WeightEntry, TrackerError> {
        if request.weight.is_nan() || request.weight <= 0.0 {
            return Err(TrackerError::Validation("weight must be greater than 0".to_string()));
        }
        let now = Utc::now();
        let date = date_or_now("date", request.date.as_deref(), now)?;
        let height = request.height.filter(|h| *h > 0.0);

        let entry = self
            .entries
            .create(WeightEntry {
                id: new_id(),
                user_id: user_id.to_string(),
                date,
                weight: request.weight,
                height,
                bmi: height.and_then(|h| bmi(request.weight, h)),
                waist_size: request.waist_size.filter(|w| *w > 0.0),
                notes: non_blank(request.notes.as_deref()),
                created_at: now,
                updated_at: now,
            })
            .await?;
        debug!("Stored weight entry {} for user {}", entry.id, user_id);
        Ok(entry)
    }

    pub async fn entries(&self, user_id: &str) -> Result<Vec<WeightEntry>, TrackerError> {
        Ok(self.entries.latest(user_id, WEIGHT_HISTORY).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_uses_centimetres() {
        let value = bmi(60.0, 160.0).unwrap();
        assert!((value - 23.4375).abs() < 1e-9);
        assert_eq!(bmi(60.0, 0.0), None);
        assert_eq!(bmi(0.0, 160.0), None);
    }
}
