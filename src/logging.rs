use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use thiserror::Error;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up log4rs with a file appender and/or a console appender
///
/// Console output goes to stderr, stdout is kept free for exported data.
///
/// # Arguments
///
/// * 'log_path' - file to log to, if any
/// * 'log_level' - root log level
/// * 'log_to_console' - whether to also log to the console
pub fn setup_logger(log_path: Option<&str>, log_level: LevelFilter, log_to_console: bool) -> Result<Handle, LoggerError> {
    let config = logger_config(log_path, log_level, log_to_console)?;
    let handle = log4rs::init_config(config)
        .map_err(|e| LoggerError(e.to_string()))?;

    Ok(handle)
}

/// Builds the log4rs configuration without installing it
///
/// # Arguments
///
/// * 'log_path' - file to log to, if any
/// * 'log_level' - root log level
/// * 'log_to_console' - whether to also log to the console
fn logger_config(log_path: Option<&str>, log_level: LevelFilter, log_to_console: bool) -> Result<Config, LoggerError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if let Some(path) = log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)
            .map_err(|e| LoggerError(format!("{}: {}", path, e)))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if log_to_console {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    builder.build(root.build(log_level))
        .map_err(|e| LoggerError(e.to_string()))
}

#[derive(Debug, Error)]
#[error("LoggerError: {0}")]
pub struct LoggerError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_only_config_builds() {
        let config = logger_config(None, LevelFilter::Warn, true).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.root().appenders(), &["console".to_string()]);
    }

    #[test]
    fn file_and_console_config_builds() {
        let path = std::env::temp_dir().join("weather_fixture_logging_test.log");
        let config = logger_config(path.to_str(), LevelFilter::Debug, true).unwrap();
        assert_eq!(config.appenders().len(), 2);
        let _ = std::fs::remove_file(path);
    }
}
