//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ContactBookConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file (if any) and environment.
    pub fn load() -> Result<ContactBookConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<ContactBookConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
