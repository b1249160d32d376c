// src/config.rs
use crate::domain::errors::{AppError, AppResult};
use chrono_tz::Tz;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Report service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Report export configuration
    pub export: ExportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Report export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where report files are written
    pub report_path: String,

    /// Interval in minutes between report generations
    pub interval_minutes: u64,

    /// Governing timezone for the settlement day (IANA name)
    pub timezone: String,

    /// What to do when a report file with the same derived name exists
    pub write_mode: WriteMode,

    /// Write the header line into exported files
    pub include_headers: bool,
}

/// Behavior when the derived report file name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Overwrite,
    Append,
}

impl FromStr for WriteMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(WriteMode::Overwrite),
            "append" => Ok(WriteMode::Append),
            other => Err(AppError::Config(format!(
                "Unsupported write mode: {other} (expected 'overwrite' or 'append')"
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file instead of stderr
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let export_config = ExportConfig {
            report_path: env::var("REPORT_PATH").unwrap_or_else(|_| "reports".to_string()),
            interval_minutes: env::var("REPORT_INTERVAL_MINUTES")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Config("REPORT_INTERVAL_MINUTES must be a positive integer".into())
                })?,
            timezone: env::var("REPORT_TIMEZONE").unwrap_or_else(|_| "Europe/Berlin".to_string()),
            write_mode: env::var("REPORT_WRITE_MODE")
                .unwrap_or_else(|_| "overwrite".to_string())
                .parse()?,
            include_headers: env::var("REPORT_INCLUDE_HEADERS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        };

        let logging_config = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            to_file: env::var("LOG_TO_FILE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: env::var("LOG_FILE_PATH").ok(),
        };

        let config = Config {
            export: export_config,
            logging: logging_config,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let file = File::open(path)
            .map_err(|e| AppError::Config(format!("Failed to open config file: {e}")))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.export.interval_minutes == 0 {
            return Err(AppError::Config(
                "Report interval must be at least one minute".into(),
            ));
        }
        self.timezone().map(|_| ())
    }

    /// The governing timezone rule. An unknown name is a fatal
    /// configuration error, not something to retry.
    pub fn timezone(&self) -> AppResult<Tz> {
        self.export
            .timezone
            .parse()
            .map_err(|_| AppError::Config(format!("Unknown timezone: {}", self.export.timezone)))
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path)
                    .map_err(|e| AppError::Config(format!("Failed to create log file: {e}")))?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        builder.init();

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: ExportConfig {
                report_path: "reports".to_string(),
                interval_minutes: 15,
                timezone: "Europe/Berlin".to_string(),
                write_mode: WriteMode::Overwrite,
                include_headers: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_mode_parses_case_insensitively() {
        assert_eq!(WriteMode::from_str("Append").unwrap(), WriteMode::Append);
        assert_eq!(
            WriteMode::from_str("overwrite").unwrap(),
            WriteMode::Overwrite
        );
        assert!(WriteMode::from_str("truncate").is_err());
    }

    #[test]
    fn default_config_resolves_timezone() {
        let config = Config::default();
        assert_eq!(config.timezone().unwrap(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn unknown_timezone_is_a_config_error() {
        let mut config = Config::default();
        config.export.timezone = "Mars/Olympus_Mons".to_string();
        assert!(matches!(config.timezone(), Err(AppError::Config(_))));
    }

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.export.write_mode = WriteMode::Append;
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();

        assert_eq!(loaded.export.write_mode, WriteMode::Append);
        assert_eq!(loaded.export.timezone, "Europe/Berlin");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = Config::default();
        config.export.interval_minutes = 0;
        assert!(config.validate().is_err());
    }
}
