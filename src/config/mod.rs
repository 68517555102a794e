//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file given on
//! the command line, then `RXIV_SEARCH__`-prefixed environment variables.
//!
//! ```toml
//! [api]
//! base_url = "https://api.biorxiv.org/details"
//! timeout_secs = 30
//!
//! [display]
//! color = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::sources::API_URL;
use crate::utils::DEFAULT_TIMEOUT_SECS;

/// Environment variable prefix, e.g. `RXIV_SEARCH__API__BASE_URL`
pub const ENV_PREFIX: &str = "RXIV_SEARCH";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Upstream API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Details endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Console output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colour status lines when stdout is a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid api.base_url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("api.base_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

impl Config {
    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed =
            url::Url::parse(&self.api.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
                url: self.api.base_url.clone(),
                source,
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(self.api.base_url.clone()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Load configuration from defaults, an optional file, and the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        // TOML regardless of the file's extension
        builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.biorxiv.org/details");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert!(config.display.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://localhost:8080/details\"\n\n[display]\ncolor = false"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/details");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(!config.display.color);
    }

    #[test]
    fn test_load_file_without_toml_extension() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 5").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api.timeout(), Duration::from_secs(5));
        assert_eq!(config.api.base_url, "https://api.biorxiv.org/details");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/rxiv-search.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));

        config.api.base_url = "ftp://example.org/details".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(_))
        ));

        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }
}
