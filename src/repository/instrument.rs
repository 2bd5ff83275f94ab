use diesel::prelude::*;
use diesel::sql_types::{BigInt, Binary, Bool, Nullable, Text};
use diesel::sqlite::Sqlite;

use crate::domain::instrument::ClientInstrument;
use crate::models::instrument::{
    ClientInstrument as DbClientInstrument, NewClientInstrument as DbNewClientInstrument,
    details_column,
};
use crate::repository::criteria::CriteriaFilter;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, InstrumentReader, InstrumentSearchCriteria, InstrumentWriter,
};

const SELECT_INSTRUMENTS: &str = "SELECT client_id, instrument_details, instrument_id, \
     method_id, name, is_default FROM client_instruments";

const UPDATE_INSTRUMENTS: &str = "UPDATE client_instruments SET client_id = ?, \
     instrument_details = ?, instrument_id = ?, method_id = ?, name = ?, is_default = ?";

const DELETE_INSTRUMENTS: &str = "DELETE FROM client_instruments";

impl InstrumentReader for DieselRepository {
    fn read_instruments(
        &self,
        criteria: &InstrumentSearchCriteria,
    ) -> RepositoryResult<Vec<ClientInstrument>> {
        let filter = CriteriaFilter::build(criteria)?;
        log::debug!("Reading client instruments where {}", filter.to_sql());

        let mut conn = self.conn()?;

        let query = diesel::sql_query(format!("{SELECT_INSTRUMENTS} WHERE {}", filter.to_sql()))
            .into_boxed::<Sqlite>();

        let rows = filter
            .bind_values(query)
            .load::<DbClientInstrument>(&mut conn)?;

        rows.into_iter()
            .map(|row| {
                ClientInstrument::try_from(row).map_err(|e| RepositoryError::Mapping(e.to_string()))
            })
            .collect()
    }
}

impl InstrumentWriter for DieselRepository {
    fn create_instrument(&self, instrument: &ClientInstrument) -> RepositoryResult<usize> {
        use crate::schema::client_instruments;

        instrument.validate()?;

        let mut conn = self.conn()?;
        let insertable: DbNewClientInstrument = instrument.into();

        let affected = diesel::insert_into(client_instruments::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_instruments(
        &self,
        instrument: &ClientInstrument,
        criteria: &InstrumentSearchCriteria,
    ) -> RepositoryResult<usize> {
        let filter = CriteriaFilter::build(criteria)?;
        instrument.validate()?;
        log::debug!("Updating client instruments where {}", filter.to_sql());

        let mut conn = self.conn()?;

        // SET binds come first, matching placeholder order.
        let query = diesel::sql_query(format!("{UPDATE_INSTRUMENTS} WHERE {}", filter.to_sql()))
            .into_boxed::<Sqlite>()
            .bind::<BigInt, _>(instrument.client_id)
            .bind::<Nullable<Binary>, _>(details_column(&instrument.instrument_details))
            .bind::<Nullable<Text>, _>(instrument.instrument_id.as_deref())
            .bind::<Text, _>(instrument.method_id.as_str())
            .bind::<Text, _>(instrument.name.as_str())
            .bind::<Bool, _>(instrument.is_default);

        let affected = filter.bind_values(query).execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_instruments(&self, criteria: &InstrumentSearchCriteria) -> RepositoryResult<usize> {
        let filter = CriteriaFilter::build(criteria)?;
        log::debug!("Deleting client instruments where {}", filter.to_sql());

        let mut conn = self.conn()?;

        let query = diesel::sql_query(format!("{DELETE_INSTRUMENTS} WHERE {}", filter.to_sql()))
            .into_boxed::<Sqlite>();

        let affected = filter.bind_values(query).execute(&mut conn)?;

        Ok(affected)
    }
}
