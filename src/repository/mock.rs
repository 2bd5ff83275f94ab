//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::instrument::ClientInstrument;
use crate::repository::errors::RepositoryResult;
use crate::repository::{InstrumentReader, InstrumentSearchCriteria, InstrumentWriter};

mock! {
    pub Repository {}

    impl InstrumentReader for Repository {
        fn read_instruments(
            &self,
            criteria: &InstrumentSearchCriteria,
        ) -> RepositoryResult<Vec<ClientInstrument>>;
    }

    impl InstrumentWriter for Repository {
        fn create_instrument(&self, instrument: &ClientInstrument) -> RepositoryResult<usize>;
        fn update_instruments(
            &self,
            instrument: &ClientInstrument,
            criteria: &InstrumentSearchCriteria,
        ) -> RepositoryResult<usize>;
        fn delete_instruments(&self, criteria: &InstrumentSearchCriteria) -> RepositoryResult<usize>;
    }
}
