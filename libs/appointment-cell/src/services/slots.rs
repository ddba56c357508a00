//! Time-slot parsing and generation.
//!
//! Slots are stored as free text: generated slots look like `"14:30"`, while
//! clinic-entered ones look like `"10:00 AM - 11:00 AM"`. Two slots collide when their
//! start times are equal, or, when either has no readable start, when their text matches.

use chrono::{Duration, NaiveTime};

use doctor_cell::models::Timing;

pub const SLOT_MINUTES: i64 = 30;

const FORMATS: [&str; 4] = ["%H:%M", "%I:%M %p", "%I:%M%p", "%H:%M:%S"];

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim().to_uppercase();
    FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&raw, format).ok())
}

/// Start time of a slot, accepting either a single time or a `start - end` range.
pub fn slot_start(slot: &str) -> Option<NaiveTime> {
    let start = slot.split('-').next().unwrap_or(slot);
    parse_time(start)
}

pub fn same_slot(a: &str, b: &str) -> bool {
    match (slot_start(a), slot_start(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

fn default_hours() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
        NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN),
    )
}

/// Working hours from the doctor's timing, or 09:00 to 18:00 when absent or unreadable.
pub fn working_hours(timing: Option<&Timing>) -> (NaiveTime, NaiveTime) {
    timing
        .and_then(|t| Some((parse_time(&t.from)?, parse_time(&t.to)?)))
        .filter(|(from, to)| from < to)
        .unwrap_or_else(default_hours)
}

/// Slot start times from `from` (inclusive) to `to` (exclusive).
pub fn generate(from: NaiveTime, to: NaiveTime) -> Vec<NaiveTime> {
    let step = Duration::minutes(SLOT_MINUTES);
    let mut slots = Vec::new();
    let mut current = from;
    while current < to {
        slots.push(current);
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        current = next;
    }
    slots
}

pub fn format(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
