use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use shared_database::ids::new_id;

use crate::models::OtpRecord;

/// Six decimal digits, zero padded.
pub fn generate_code() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:06}", value)
}

pub fn new_record(email: &str, now: DateTime<Utc>, ttl_minutes: i64) -> OtpRecord {
    OtpRecord {
        id: new_id(),
        email: email.to_string(),
        code: generate_code(),
        expires_at: now + Duration::minutes(ttl_minutes),
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn records_expire_after_ttl() {
        let now = Utc::now();
        let record = new_record("a@b.co", now, 10);
        assert!(!record.is_expired(now + Duration::minutes(10)));
        assert!(record.is_expired(now + Duration::minutes(10) + Duration::seconds(1)));
    }
}
