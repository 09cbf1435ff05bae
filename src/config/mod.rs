//! Tries to create an `AppConfig` from config files.
//! Uses `AppConfigBuilder` to build up configuration from the base file and the environment file.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod error;
mod types;

use std::{path::Path, sync::OnceLock};
use tracing::info;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use types::{AppConfig, AppConfigBuilder, Environment, NetConfig, StoreConfig};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!(
            "{:<12} - Initializing the configuration",
            "get_or_init_config"
        );
        let base_path = std::env::current_dir().expect("Failed to determine the current DIR.");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .unwrap_or_else(|er| panic!("Fatal Error: Parsing APP_ENVIRONMENT: {er}"));

        load_config(&base_path.join("config"), environment)
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"))
    })
}

/// Reads `base.toml` and `{environment}.toml` from `config_dir` and merges them.
/// In production the `PORT` env variable, when set, overrides the configured port.
pub fn load_config(config_dir: &Path, environment: Environment) -> ConfigResult<AppConfig> {
    let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

    let base_file = std::fs::File::open(config_dir.join("base.toml"))?;
    let env_file = std::fs::File::open(config_dir.join(environment_filename))?;

    let mut builder = AppConfig::init()
        .add_source_file(base_file)?
        .add_source_file(env_file)?;

    if matches!(environment, Environment::Production) {
        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.set_override("net_config", "app_port", i64::from(port));
        }
    }

    builder.build()
}
