//! Configuration
//!
//! Layered configuration for the contact book: built-in defaults, an optional
//! TOML file, then `CONTACTBOOK__*` environment overrides.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::directory::visualization::DEFAULT_SEPARATOR;
use crate::logging::LoggingConfig;
use crate::types::Contact;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactBookConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Contacts loaded into the directory at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to seed at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_seed_contacts")]
    pub contacts: Vec<Contact>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            contacts: default_seed_contacts(),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Glyph drawn between names in the chain visualization
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Label shown in place of an absent email
    #[serde(default = "default_missing_email")]
    pub missing_email: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            missing_email: default_missing_email(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_missing_email() -> String {
    "not provided".to_string()
}

/// The five example contacts shown on a fresh start
pub fn default_seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Juan Pérez", "123-456-7890").with_email("juan@example.com"),
        Contact::new("María García", "098-765-4321").with_email("maria@example.com"),
        Contact::new("Carlos López", "555-123-4567").with_email("carlos@example.com"),
        Contact::new("Ana Martínez", "111-222-3333").with_email("ana@example.com"),
        Contact::new("Juan Carlos Ruiz", "444-555-6666").with_email("juanc@example.com"),
    ]
}
