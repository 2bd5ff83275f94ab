//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::db::PoolConfig;

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by the command-line binary.
pub struct AppConfig {
    pub database_url: String,
    #[serde(default)]
    pub pool: PoolConfig,
}
