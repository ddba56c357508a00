pub mod clinic;
pub mod diagnostic;

pub use clinic::ClinicService;
pub use diagnostic::DiagnosticService;

use chrono::{DateTime, Utc};
use shared_models::time;

use crate::models::ClinicError;

fn parse_visit_date(raw: &str) -> Result<DateTime<Utc>, ClinicError> {
    if raw.trim().is_empty() {
        return Err(ClinicError::Validation("date is required".to_string()));
    }
    time::parse(raw.trim()).ok_or(ClinicError::InvalidDate)
}
