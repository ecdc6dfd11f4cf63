//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use haulage_core::prelude::{Environment, GenericError, InfoLogger};
use haulage_pragmatic::validation::ValidationLimits;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A solver configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies limits applied to the problem on validation.
    pub limits: Option<LimitsConfig>,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Prefix of logging messages.
    pub prefix: Option<String>,
}

/// Validation limits configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LimitsConfig {
    /// Max truck capacity.
    pub max_capacity: Option<f64>,
    /// Max amount of cells in the allocation table.
    pub max_table_size: Option<usize>,
}

impl Config {
    /// Returns a copy of config with logging enabled.
    pub fn with_logging(self) -> Self {
        let prefix = self.telemetry.as_ref().and_then(|t| t.logging.as_ref()).and_then(|l| l.prefix.clone());

        Self { telemetry: Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, prefix }) }), ..self }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates validation limits from config, missing values are taken from defaults.
pub fn create_limits(config: &Config) -> ValidationLimits {
    let defaults = ValidationLimits::default();

    config.limits.as_ref().map_or(defaults.clone(), |limits| ValidationLimits {
        max_capacity: limits.max_capacity.unwrap_or(defaults.max_capacity),
        max_table_size: limits.max_table_size.unwrap_or(defaults.max_table_size),
    })
}

/// Creates an environment with a logger configured as specified. Log messages go to stderr.
pub fn create_environment(config: &Config) -> Environment {
    match config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, prefix }) => {
            let prefix = prefix.clone().unwrap_or_default();
            let logger: InfoLogger = Arc::new(move |msg: &str| eprintln!("{prefix}{msg}"));

            Environment::new(logger)
        }
        _ => Environment::new_silent(),
    }
}
