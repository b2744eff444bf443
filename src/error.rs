//! Error types for the fallible edges of the crate.
//!
//! The simulation itself never fails; only loading configuration and driving
//! the terminal can.

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value that would break a population or collision invariant
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for the terminal front-end.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
