pub mod period;
pub mod pregnancy;
pub mod symptoms;
pub mod weight;

pub use period::PeriodService;
pub use pregnancy::PregnancyService;
pub use symptoms::SymptomsService;
pub use weight::WeightService;

use chrono::{DateTime, Utc};

use shared_models::time;

use crate::models::TrackerError;

fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>, TrackerError> {
    time::parse(raw.trim()).ok_or(TrackerError::InvalidDate(field))
}

/// Blank or missing dates fall back to `now`.
fn date_or_now(
    field: &'static str,
    raw: Option<&str>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, TrackerError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => parse_date(field, raw),
        None => Ok(now),
    }
}
