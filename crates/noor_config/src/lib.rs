use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;

#[cfg(test)]
mod lib_test;

/// Prefix for environment overrides, e.g. `NOOR_LOCATION__LATITUDE=51.5`.
pub const ENV_PREFIX: &str = "NOOR";

/// Loads the application configuration.
///
/// Sources are layered in this order, later ones winning:
/// `<config dir>/default.*`, `<config dir>/<RUN_ENV>.*` and finally
/// `NOOR_*` environment variables (nested keys separated by `__`).
/// The config directory is `./config` unless `NOOR_CONFIG_DIR` is set.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("NOOR_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env, ENV_PREFIX)
}

/// Loads the configuration from an explicit directory, run environment and
/// environment-variable prefix.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    env_prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// `DOTENV_OVERRIDE` names the file to read; it defaults to `.env`. A missing
/// file is not an error. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
