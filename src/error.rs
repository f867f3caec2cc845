//! Error type for the outer layers (terminal, config, logging).
//!
//! The stepper and controller have no failure modes of their own; anything
//! that reaches this type came from I/O or from user-supplied configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Failures from terminal I/O, configuration and logging setup.
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot set up logging: {0}")]
    Logging(String),
}
