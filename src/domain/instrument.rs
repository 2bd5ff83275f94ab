use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{TypeConstraintError, ensure_json_payload};

/// A payment instrument owned by a client.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientInstrument {
    pub client_id: i64,
    /// Raw JSON bytes. Empty when the instrument carries no details.
    pub instrument_details: Vec<u8>,
    pub instrument_id: Option<String>,
    pub method_id: String,
    pub name: String,
    pub is_default: bool,
}

impl ClientInstrument {
    pub fn new(client_id: i64, method_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_id,
            method_id: method_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn instrument_id(mut self, instrument_id: impl Into<String>) -> Self {
        self.instrument_id = Some(instrument_id.into());
        self
    }

    pub fn default_instrument(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Stores raw payload bytes as-is. They are validated on write.
    pub fn details_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.instrument_details = bytes.into();
        self
    }

    /// Serializes a JSON value into the payload.
    pub fn details_json(mut self, details: &Value) -> Self {
        self.instrument_details = details.to_string().into_bytes();
        self
    }

    /// Parses the payload, returning `None` when no details are stored.
    pub fn parsed_details(&self) -> Result<Option<Value>, TypeConstraintError> {
        if self.instrument_details.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&self.instrument_details)
            .map(Some)
            .map_err(|e| TypeConstraintError::MalformedPayload(e.to_string()))
    }

    /// Fails when the payload is present but not well-formed JSON.
    pub fn validate(&self) -> Result<(), TypeConstraintError> {
        ensure_json_payload(&self.instrument_details)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_sets_all_fields() {
        let instrument = ClientInstrument::new(1111, "method", "name")
            .instrument_id("id")
            .details_json(&json!({"details": "id"}))
            .default_instrument(true);

        assert_eq!(instrument.client_id, 1111);
        assert_eq!(instrument.instrument_id.as_deref(), Some("id"));
        assert_eq!(instrument.method_id, "method");
        assert_eq!(instrument.name, "name");
        assert!(instrument.is_default);
        assert_eq!(instrument.instrument_details, br#"{"details":"id"}"#.to_vec());
    }

    #[test]
    fn parsed_details_handles_absent_payload() {
        let instrument = ClientInstrument::new(1, "m", "n");
        assert_eq!(instrument.parsed_details(), Ok(None));
        assert!(instrument.validate().is_ok());
    }

    #[test]
    fn parsed_details_returns_value() {
        let instrument = ClientInstrument::new(1, "m", "n").details_bytes(r#"{"test": 123}"#);
        assert_eq!(instrument.parsed_details(), Ok(Some(json!({"test": 123}))));
    }

    #[test]
    fn validate_rejects_malformed_payload() {
        let instrument = ClientInstrument::new(1, "m", "n").details_bytes("test");
        assert!(matches!(
            instrument.validate(),
            Err(TypeConstraintError::MalformedPayload(_))
        ));
        assert!(instrument.parsed_details().is_err());
    }
}
