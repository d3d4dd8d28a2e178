//! Base layer: serialized defaults, so every key exists before overlays.

use crate::config::ContactBookConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with `ContactBookConfig::default()`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&ContactBookConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
