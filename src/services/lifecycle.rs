//! Create/read/update walk-through of a single client instrument.

use serde_json::json;

use crate::domain::instrument::ClientInstrument;
use crate::repository::errors::RepositoryResult;
use crate::repository::{InstrumentReader, InstrumentSearchCriteria, InstrumentWriter};

/// Outcome of each step of [`run_lifecycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleReport {
    pub created: usize,
    pub found: Vec<ClientInstrument>,
    pub updated: usize,
    pub replaced: Vec<ClientInstrument>,
}

/// The instrument created by the walk-through.
pub fn sample_instrument() -> ClientInstrument {
    ClientInstrument::new(1111, "method", "name")
        .instrument_id("id")
        .details_json(&json!({"details": "id"}))
}

/// The values every row of the sample client is rewritten to.
pub fn replacement_instrument() -> ClientInstrument {
    ClientInstrument::new(1112, "method", "name").details_json(&json!({"test": 123}))
}

/// Creates `sample`, reads it back by client and method, rewrites every row of
/// the sample's client with `replacement`, then reads the replacement back.
pub fn run_lifecycle<R>(
    repo: &R,
    sample: &ClientInstrument,
    replacement: &ClientInstrument,
) -> RepositoryResult<LifecycleReport>
where
    R: InstrumentReader + InstrumentWriter + ?Sized,
{
    let created = repo.create_instrument(sample)?;
    log::info!("Created {created} instrument(s) for client {}", sample.client_id);

    let found = repo.read_instruments(
        &InstrumentSearchCriteria::new()
            .client_id(sample.client_id)
            .method_id(sample.method_id.as_str()),
    )?;
    log::info!("Found {} instrument(s) for client {}", found.len(), sample.client_id);

    let updated = repo.update_instruments(
        replacement,
        &InstrumentSearchCriteria::new().client_id(sample.client_id),
    )?;
    log::info!("Updated {updated} instrument(s) of client {}", sample.client_id);

    let replaced = repo.read_instruments(
        &InstrumentSearchCriteria::new()
            .client_id(replacement.client_id)
            .method_id(replacement.method_id.as_str()),
    )?;

    Ok(LifecycleReport {
        created,
        found,
        updated,
        replaced,
    })
}
