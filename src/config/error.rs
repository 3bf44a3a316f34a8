//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    #[error("Unknown page `{0}` (expected one of: home, blog, work, projects)")]
    UnknownPage(String),

    #[error("Unknown collection `{0}` (expected one of: posts, works, projects)")]
    UnknownCollection(String),

    #[error("`{0}` already exists. Remove it manually or init in a different path.")]
    AlreadyExists(PathBuf),

    #[error("Config serialization error")]
    Serialize(#[from] toml::ser::Error),

    #[error("Global config is already initialized")]
    AlreadyInitialized,
}
