//! Rendering of [`InstrumentSearchCriteria`] into a parameterized filter.
//!
//! The rendered fragment only ever contains fixed column names and `?`
//! placeholders. Criteria values travel separately as bound parameters, in
//! the same order as their placeholders.

use diesel::query_builder::BoxedSqlQuery;
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::Sqlite;

use crate::repository::InstrumentSearchCriteria;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// A value bound to one filter placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionValue {
    BigInt(i64),
    Text(String),
}

/// Conjunction of equality predicates, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaFilter {
    predicates: Vec<(&'static str, CriterionValue)>,
}

impl CriteriaFilter {
    /// Builds the filter in fixed column order: client_id, instrument_id,
    /// method_id, name.
    pub fn build(criteria: &InstrumentSearchCriteria) -> RepositoryResult<Self> {
        let mut predicates = Vec::with_capacity(4);

        if let Some(client_id) = criteria.client_id {
            predicates.push(("client_id", CriterionValue::BigInt(client_id)));
        }
        if let Some(instrument_id) = &criteria.instrument_id {
            predicates.push(("instrument_id", CriterionValue::Text(instrument_id.clone())));
        }
        if let Some(method_id) = &criteria.method_id {
            predicates.push(("method_id", CriterionValue::Text(method_id.clone())));
        }
        if let Some(name) = &criteria.name {
            predicates.push(("name", CriterionValue::Text(name.clone())));
        }

        if predicates.is_empty() {
            return Err(RepositoryError::InsufficientCriteria);
        }
        Ok(Self { predicates })
    }

    /// The filter expression without the `WHERE` keyword.
    pub fn to_sql(&self) -> String {
        self.predicates
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    pub fn values(&self) -> impl Iterator<Item = &CriterionValue> {
        self.predicates.iter().map(|(_, value)| value)
    }

    /// Appends the filter values to `query` after any binds already on it.
    pub fn bind_values<'f, Q>(
        self,
        query: BoxedSqlQuery<'f, Sqlite, Q>,
    ) -> BoxedSqlQuery<'f, Sqlite, Q> {
        self.predicates
            .into_iter()
            .fold(query, |query, (_, value)| match value {
                CriterionValue::BigInt(v) => query.bind::<BigInt, _>(v),
                CriterionValue::Text(v) => query.bind::<Text, _>(v),
            })
    }
}

impl TryFrom<&InstrumentSearchCriteria> for CriteriaFilter {
    type Error = RepositoryError;

    fn try_from(criteria: &InstrumentSearchCriteria) -> Result<Self, Self::Error> {
        Self::build(criteria)
    }
}
