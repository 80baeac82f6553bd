use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    /// Console logging goes to stderr
    pub log_to_console: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_path: None,
            log_level: LevelFilter::Info,
            log_to_console: true,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Output {
    pub path: Option<String>,
    pub pretty: bool,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            path: None,
            pretty: true,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Quality {
    pub tolerance: u32,
}

impl Default for Quality {
    fn default() -> Self {
        Quality { tolerance: 1 }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub output: Output,
    pub quality: Quality,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, LoadConfigurationError> {
    let toml = fs::read_to_string(config_path)
        .map_err(|e| LoadConfigurationError::ReadError(format!("{}: {}", config_path, e)))?;

    parse_config(&toml)
}

/// Parses configuration from a TOML document
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)?;

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ReadError: {0}")]
    ReadError(String),
    #[error("ParseError: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.log_path.is_none());
        assert!(config.output.path.is_none());
        assert!(config.output.pretty);
        assert_eq!(config.quality.tolerance, 1);
    }

    #[test]
    fn full_document_is_read() {
        let config = parse_config(r#"
            [general]
            log_path = "fixture.log"
            log_level = "debug"
            log_to_console = false

            [output]
            path = "reports.json"
            pretty = false

            [quality]
            tolerance = 2
        "#).unwrap();

        assert_eq!(config.general.log_path.as_deref(), Some("fixture.log"));
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(!config.general.log_to_console);
        assert_eq!(config.output.path.as_deref(), Some("reports.json"));
        assert!(!config.output.pretty);
        assert_eq!(config.quality.tolerance, 2);
    }

    #[test]
    fn bad_value_is_a_parse_error() {
        let result = parse_config("[quality]\ntolerance = \"loose\"\n");
        assert!(matches!(result, Err(LoadConfigurationError::ParseError(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_config("/nonexistent/weather_fixture.toml");
        assert!(matches!(result, Err(LoadConfigurationError::ReadError(_))));
    }
}
