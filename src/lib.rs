//! Data-access layer for client payment instruments.
//!
//! Records are stored in a single `client_instruments` table and matched by
//! sparse search criteria rendered into bound-parameter filters.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
