//! Error types for the contact book.
//!
//! The directory itself never fails; these errors belong to the session and
//! tooling layers that sit on top of it.

use thiserror::Error;

/// Errors surfaced by the session and CLI layers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Form input rejected before a contact could be built
    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    /// A contact with this name already exists
    #[error("A contact named '{0}' already exists")]
    DuplicateName(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Interactive prompt failed (terminal closed, not a TTY, ...)
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::Prompt(err.to_string())
    }
}
