//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking `tola.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed tola.toml")]
    Toml(#[from] toml::de::Error),

    /// A `[posts]` value that parses but cannot be used.
    #[error("invalid [posts] section: {0}")]
    Posts(String),
}
