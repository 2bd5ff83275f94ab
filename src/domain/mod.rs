//! Domain records exposed by the instrument repository.

pub mod instrument;
pub mod types;
