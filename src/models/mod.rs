//! Database and configuration models.

#[cfg(feature = "cli")]
pub mod config;
pub mod instrument;
