use diesel::prelude::*;

use crate::domain::{
    instrument::ClientInstrument as DomainClientInstrument,
    types::{TypeConstraintError, ensure_json_payload},
};

#[derive(Debug, Clone, QueryableByName)]
#[diesel(table_name = crate::schema::client_instruments)]
/// Row shape returned by the instrument select, in column order.
pub struct ClientInstrument {
    pub client_id: i64,
    pub instrument_details: Option<Vec<u8>>, // JSON bytes, NULL when absent
    pub instrument_id: Option<String>,
    pub method_id: String,
    pub name: String,
    pub is_default: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_instruments)]
/// Insertable form of [`ClientInstrument`].
pub struct NewClientInstrument<'a> {
    pub client_id: i64,
    pub instrument_details: Option<&'a [u8]>,
    pub instrument_id: Option<&'a str>,
    pub method_id: &'a str,
    pub name: &'a str,
    pub is_default: bool,
}

impl TryFrom<ClientInstrument> for DomainClientInstrument {
    type Error = TypeConstraintError;

    fn try_from(row: ClientInstrument) -> Result<Self, Self::Error> {
        let instrument_details = row.instrument_details.unwrap_or_default();
        ensure_json_payload(&instrument_details)?;

        Ok(Self {
            client_id: row.client_id,
            instrument_details,
            instrument_id: row.instrument_id,
            method_id: row.method_id,
            name: row.name,
            is_default: row.is_default,
        })
    }
}

impl<'a> From<&'a DomainClientInstrument> for NewClientInstrument<'a> {
    fn from(instrument: &'a DomainClientInstrument) -> Self {
        Self {
            client_id: instrument.client_id,
            instrument_details: details_column(&instrument.instrument_details),
            instrument_id: instrument.instrument_id.as_deref(),
            method_id: instrument.method_id.as_str(),
            name: instrument.name.as_str(),
            is_default: instrument.is_default,
        }
    }
}

/// Maps an empty payload to SQL `NULL`.
pub fn details_column(bytes: &[u8]) -> Option<&[u8]> {
    (!bytes.is_empty()).then_some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ClientInstrument {
        ClientInstrument {
            client_id: 1111,
            instrument_details: Some(br#"{"test":123}"#.to_vec()),
            instrument_id: Some("id".to_string()),
            method_id: "method".to_string(),
            name: "name".to_string(),
            is_default: true,
        }
    }

    #[test]
    fn row_into_domain() {
        let domain = DomainClientInstrument::try_from(sample_row()).unwrap();
        assert_eq!(domain.client_id, 1111);
        assert_eq!(domain.instrument_details, br#"{"test":123}"#.to_vec());
        assert_eq!(domain.instrument_id.as_deref(), Some("id"));
        assert_eq!(domain.method_id, "method");
        assert_eq!(domain.name, "name");
        assert!(domain.is_default);
    }

    #[test]
    fn null_details_become_empty_payload() {
        let row = ClientInstrument {
            instrument_details: None,
            instrument_id: None,
            ..sample_row()
        };
        let domain = DomainClientInstrument::try_from(row).unwrap();
        assert!(domain.instrument_details.is_empty());
        assert_eq!(domain.instrument_id, None);
    }

    #[test]
    fn stored_garbage_fails_to_map() {
        let row = ClientInstrument {
            instrument_details: Some(b"test".to_vec()),
            ..sample_row()
        };
        assert!(DomainClientInstrument::try_from(row).is_err());
    }

    #[test]
    fn from_domain_creates_new_instrument() {
        let domain = DomainClientInstrument::new(7, "card", "Visa").details_bytes("{}");
        let new: NewClientInstrument = (&domain).into();
        assert_eq!(new.client_id, 7);
        assert_eq!(new.instrument_details, Some(&b"{}"[..]));
        assert_eq!(new.instrument_id, None);
        assert_eq!(new.method_id, "card");
        assert_eq!(new.name, "Visa");
        assert!(!new.is_default);
    }

    #[test]
    fn empty_details_insert_as_null() {
        let domain = DomainClientInstrument::new(7, "card", "Visa");
        let new: NewClientInstrument = (&domain).into();
        assert_eq!(new.instrument_details, None);
    }
}
