//! Error types.

use thiserror::Error;

/// Returned by power models when the passed utilization is outside of the [0, 1] range (or is NaN).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid utilization {0}, should be within [0, 1]")]
pub struct InvalidUtilization(pub f64);

/// Checks that `utilization` lies within [0, 1].
pub fn check_utilization(utilization: f64) -> Result<f64, InvalidUtilization> {
    if (0.0..=1.0).contains(&utilization) {
        Ok(utilization)
    } else {
        Err(InvalidUtilization(utilization))
    }
}

/// Errors produced while reading power configuration or building power models from it.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file cannot be read.
    #[error("can't read file {path}: {source}")]
    Io {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config contents are not valid YAML or do not match the expected structure.
    #[error("can't parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Power model parameters are not acceptable.
    #[error("invalid {model} power model: {reason}")]
    InvalidModel {
        /// Power model type as written in config.
        model: &'static str,
        /// What is wrong with the parameters.
        reason: String,
    },
    /// Host description is incomplete or inconsistent.
    #[error("invalid host config: {0}")]
    InvalidHost(String),
}
