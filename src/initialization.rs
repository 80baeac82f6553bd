use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};

/// Initializes and returns configuration, with logging set up
///
/// Configuration is read from the file given by a `--config=<path>` argument, defaults are
/// used when no such argument is present.
pub fn init() -> Result<Config, InitializationError> {
    let args: Vec<String> = env::args().collect();

    let config = match config_path(&args) {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let _ = setup_logger(config.general.log_path.as_deref(), config.general.log_level, config.general.log_to_console)?;

    info!("starting weather fixture version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Picks the configuration path out of the command line arguments
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Option<&str> {
    args.iter()
        .find_map(|p| p.strip_prefix("--config="))
        .filter(|p| !p.is_empty())
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
}
