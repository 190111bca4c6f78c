use std::fmt;

use crate::consts;
use crate::errors::RelayError;

/// Immutable relay configuration, built once at startup and shared by every worker.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: consts::GEMINI_MODEL.to_string(),
            api_base_url: consts::GEMINI_API_BASE.to_string(),
            host: consts::SERVER_HOST.to_string(),
            port: consts::SERVER_PORT,
        }
    }

    /// Builds the config from a variable lookup; fails if the credential is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(consts::API_KEY_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                RelayError::ConfigError(format!("{} is not set", consts::API_KEY_ENV))
            })?;

        Ok(Self::new(api_key))
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, RelayError>;
}

pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, RelayError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }
}
