use std::env;

use client_instruments::db::establish_connection_pool;
use client_instruments::models::config::AppConfig;
use client_instruments::repository::DieselRepository;
use client_instruments::services::lifecycle::{
    replacement_instrument, run_lifecycle, sample_instrument,
};
use config::Config;
use dotenvy::dotenv;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.database_url, &app_config.pool) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    let report = match run_lifecycle(&repo, &sample_instrument(), &replacement_instrument()) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Instrument walk-through failed: {e}");
            std::process::exit(1);
        }
    };

    for instrument in report.found.iter().chain(report.replaced.iter()) {
        log::info!(
            "{}, {}, {}, {}, {}, {}",
            instrument.client_id,
            String::from_utf8_lossy(&instrument.instrument_details),
            instrument.instrument_id.as_deref().unwrap_or_default(),
            instrument.method_id,
            instrument.name,
            instrument.is_default,
        );
    }
    log::info!(
        "Created {}, updated {}, {} replacement(s) read back",
        report.created,
        report.updated,
        report.replaced.len()
    );
}
