//! Exports the filtered grievance list to a CSV file.

use std::env;

use config::Config;
use dotenvy::dotenv;
use validator::Validate;

use grievance_console::models::config::ExportConfig;
use grievance_console::run_export;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let export_config = match settings.try_deserialize::<ExportConfig>() {
        Ok(export_config) => export_config,
        Err(err) => {
            log::error!("Error loading export config: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = export_config.validate() {
        log::error!("Invalid export config: {}", err);
        std::process::exit(1);
    }

    match run_export(export_config).await {
        Ok(files) => {
            for file in files {
                log::info!("Exported {}", file.display());
            }
        }
        Err(err) => {
            log::error!("Export failed: {err}");
            std::process::exit(1);
        }
    }
}
