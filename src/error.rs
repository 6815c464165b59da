//! Error types for devlist
//!
//! Nothing here is fatal to the process. Persistence failures are logged
//! and swallowed at the store layer; validation failures never leave the
//! form.

use thiserror::Error;

/// Main error type for devlist operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No data directory available on this platform")]
    NoDataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Auth(#[from] crate::auth::AuthError),
}

/// Result type alias for devlist operations
pub type Result<T> = std::result::Result<T, Error>;
