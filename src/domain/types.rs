//! Value constraints enforced before a record reaches the store.
//!
//! The instrument payload is opaque to the repository: it is kept as raw JSON
//! bytes and only checked for well-formedness, never interpreted.

use serde::de::IgnoredAny;
use thiserror::Error;

/// Errors produced when a value violates a domain constraint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Payload bytes are not well-formed JSON.
    #[error("malformed instrument details: {0}")]
    MalformedPayload(String),
}

/// Checks that non-empty payload bytes hold a single well-formed JSON value.
///
/// Empty bytes mean "no payload" and are accepted.
pub fn ensure_json_payload(bytes: &[u8]) -> Result<(), TypeConstraintError> {
    if bytes.is_empty() {
        return Ok(());
    }
    serde_json::from_slice::<IgnoredAny>(bytes)
        .map(|_| ())
        .map_err(|e| TypeConstraintError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_objects_and_scalars() {
        assert!(ensure_json_payload(br#"{"details":"id"}"#).is_ok());
        assert!(ensure_json_payload(b"123").is_ok());
        assert!(ensure_json_payload(b" null ").is_ok());
    }

    #[test]
    fn accepts_empty_payload() {
        assert!(ensure_json_payload(b"").is_ok());
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(matches!(
            ensure_json_payload(b"test"),
            Err(TypeConstraintError::MalformedPayload(_))
        ));
        assert!(ensure_json_payload(br#"{"test":"#).is_err());
    }

    #[test]
    fn rejects_trailing_values() {
        assert!(ensure_json_payload(b"{} {}").is_err());
    }
}
