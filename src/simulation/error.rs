//! Error types for configuration and start-up.
//!
//! Collisions and deaths are ordinary state transitions and never surface here.

use ndarray_rand::rand_distr::NormalError;
use thiserror::Error;

/// Errors raised while building a run from its parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`super::params::Params`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A parameter violates a simulation invariant.
    #[error("invalid parameters: {0}")]
    Invalid(String),
    /// Weight initialisation received an unusable standard deviation.
    #[error("invalid weight distribution: {0}")]
    Distribution(#[from] NormalError),
}
