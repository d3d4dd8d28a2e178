//! Environment variable source: CONTACTBOOK prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses CONTACTBOOK prefix and __ as separator, e.g. `CONTACTBOOK__SEED__ENABLED`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("CONTACTBOOK")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
