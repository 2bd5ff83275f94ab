use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::instrument::ClientInstrument,
    repository::errors::RepositoryResult,
};

pub mod criteria;
pub mod errors;
pub mod instrument;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Sparse filter over client instruments. Unset fields are `None`.
///
/// `Some(0)` and `Some("")` are real filter values, not "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentSearchCriteria {
    pub client_id: Option<i64>,
    pub instrument_id: Option<String>,
    pub method_id: Option<String>,
    pub name: Option<String>,
}

impl InstrumentSearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn instrument_id(mut self, instrument_id: impl Into<String>) -> Self {
        self.instrument_id = Some(instrument_id.into());
        self
    }

    pub fn method_id(mut self, method_id: impl Into<String>) -> Self {
        self.method_id = Some(method_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.client_id.is_none()
            && self.instrument_id.is_none()
            && self.method_id.is_none()
            && self.name.is_none()
    }
}

pub trait InstrumentReader {
    /// Returns every instrument matching `criteria`; empty when nothing matches.
    fn read_instruments(
        &self,
        criteria: &InstrumentSearchCriteria,
    ) -> RepositoryResult<Vec<ClientInstrument>>;
}

pub trait InstrumentWriter {
    fn create_instrument(&self, instrument: &ClientInstrument) -> RepositoryResult<usize>;
    /// Rewrites all fields of every row matching `criteria` with `instrument`.
    fn update_instruments(
        &self,
        instrument: &ClientInstrument,
        criteria: &InstrumentSearchCriteria,
    ) -> RepositoryResult<usize>;
    fn delete_instruments(&self, criteria: &InstrumentSearchCriteria) -> RepositoryResult<usize>;
}

/// Diesel implementation of the instrument repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_is_empty() {
        assert!(InstrumentSearchCriteria::new().is_empty());
    }

    #[test]
    fn zero_and_empty_values_count_as_set() {
        assert!(!InstrumentSearchCriteria::new().client_id(0).is_empty());
        assert!(!InstrumentSearchCriteria::new().name("").is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let criteria = InstrumentSearchCriteria::new()
            .client_id(1111)
            .instrument_id("id")
            .method_id("method")
            .name("name");
        assert_eq!(criteria.client_id, Some(1111));
        assert_eq!(criteria.instrument_id.as_deref(), Some("id"));
        assert_eq!(criteria.method_id.as_deref(), Some("method"));
        assert_eq!(criteria.name.as_deref(), Some("name"));
    }
}
