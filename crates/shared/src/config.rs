//! Configuration management.

use serde::Deserialize;

use crate::error::FileResult;
use crate::types::Credentials;

/// Which backend to build and how to reach it.
#[derive(Debug, Clone, Deserialize)]
pub struct FileHelperConfig {
    /// Backend type identifier, e.g. `s3`.
    #[serde(default = "default_service")]
    pub service: String,
    /// Backend credentials.
    pub credentials: Credentials,
}

fn default_service() -> String {
    "s3".to_string()
}

impl FileHelperConfig {
    /// Environment variable prefix, e.g. `FILEHELPER__CREDENTIALS__BUCKET`.
    pub const ENV_PREFIX: &'static str = "FILEHELPER";

    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `FILEHELPER__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> FileResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
