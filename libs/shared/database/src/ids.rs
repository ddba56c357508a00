use mongodb::bson::oid::ObjectId;

use crate::DatabaseError;

/// New document id as a 24-character hex string.
pub fn new_id() -> String {
    ObjectId::new().to_hex()
}

/// Checks that `raw` is a well-formed id; `kind` names the entity in the error message.
pub fn parse_id(kind: &str, raw: &str) -> Result<String, DatabaseError> {
    ObjectId::parse_str(raw.trim())
        .map(|oid| oid.to_hex())
        .map_err(|_| DatabaseError::InvalidId(kind.to_string()))
}

pub fn is_valid_id(raw: &str) -> bool {
    ObjectId::parse_str(raw.trim()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        let id = new_id();
        assert_eq!(id.len(), 24);
        assert!(is_valid_id(&id));
        assert_eq!(parse_id("doctor", &id).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_ids() {
        let err = parse_id("doctor", "not-an-id").unwrap_err();
        assert_eq!(err.to_string(), "invalid doctor ID format");
    }
}
