/// Runtime configuration
///
/// Read from `config.toml` in the platform config directory:
/// - Linux: ~/.config/orders-admin/config.toml
/// - macOS: ~/Library/Application Support/orders-admin/config.toml
/// - Windows: %APPDATA%\orders-admin\config.toml
///
/// Every key is optional. A missing file means defaults.

use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::state::pagination::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themysoreoils.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Origin of the order store, `/api/orders` is appended
    pub api_base_url: String,
    /// Orders per page in the list view
    pub page_size: usize,
    /// Glyph printed before every amount
    pub currency_symbol: String,
    /// Fetch product pictures for the detail view
    pub load_thumbnails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            currency_symbol: "₹".to_string(),
            load_thumbnails: true,
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "Loaded configuration");
                config
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Parse the file at `path`; `Ok(None)` if it does not exist
    pub fn from_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => contents.parse().map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("orders-admin");
        path.push("config.toml");
        Some(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }

        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::Invalid(format!("api_base_url: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn test_partial_override() {
        let config: Config = r#"
            api_base_url = "http://localhost:4000"
            page_size = 10
        "#
        .parse()
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.currency_symbol, "₹");
        assert!(config.load_thumbnails);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            "page_size = 0".parse::<Config>(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            r#"api_base_url = "ftp://example.com""#.parse::<Config>(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            r#"api_base_url = "not a url""#.parse::<Config>(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            "page_size = \"six\"".parse::<Config>(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::from_path(&path).unwrap().is_none());

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "currency_symbol = \"$\"").unwrap();

        let config = Config::from_path(&path).unwrap().unwrap();
        assert_eq!(config.currency_symbol, "$");
    }
}
