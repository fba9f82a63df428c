//! Connector configuration schemas.
//!
//! The configuration struct is deserialized from TOML files via the
//! `config` crate, with environment variables prefixed with `SIGNALHUB_`
//! taking precedence. It can also be built programmatically with
//! [`ConnectorConfig::new`].

pub mod connector;

pub use connector::ConnectorConfig;

use crate::result::HubResult;

impl ConnectorConfig {
    /// Load configuration from layered TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// and environment variables prefixed with `SIGNALHUB_`.
    pub fn load(env: &str) -> HubResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SIGNALHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
