use crate::error::{ConfigError, Result as AppResult};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Where the word catalog comes from. Absent file path means the builtin
/// table ships with the binary.
#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    pub file_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub content: ContentConfig,
}

pub fn load_settings() -> AppResult<AppSettings> {
    let settings = Config::builder()
        .add_source(
            Environment::with_prefix("IMPOSTER")
                .separator("__")
                .try_parsing(true),
        )
        .add_source(File::with_name("config").required(false))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    settings
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()).into())
}
