//! Configuration management for tuners-cost
//!
//! Config stored at: ~/.config/tuners-cost/config.json
//! (or the path in `TUNERS_CONFIG`). Endpoint and key values from the
//! environment take precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tuners_types::{ConfigError, OutputFormat, Result};
use tuners_vision::ClientConfig;

pub const ENV_PREDICTION_KEY: &str = "AZURE_PREDICTION_KEY";
pub const ENV_ENDPOINT_URL: &str = "AZURE_ENDPOINT_URL";
pub const ENV_ENDPOINT_FILE: &str = "AZURE_ENDPOINT_FILE";
pub const ENV_CONFIG_PATH: &str = "TUNERS_CONFIG";

const APP_DIR: &str = "tuners-cost";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Secret sent in the Prediction-Key header
    #[serde(default)]
    pub prediction_key: Option<String>,

    /// Prediction endpoint for image URLs
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Prediction endpoint for uploaded image bytes
    #[serde(default)]
    pub endpoint_file: Option<String>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Request timeout in seconds (none = HTTP client default)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prediction_key: None,
            endpoint_url: None,
            endpoint_file: None,
            output_format: default_output_format(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir.join("config.json"))
    }

    /// Load the config file and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load the config file only, or defaults if it does not exist
    pub fn load_file() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "Loaded configuration from file");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override endpoint and key settings from non-empty environment values
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_PREDICTION_KEY) {
            self.prediction_key = Some(key);
        }
        if let Some(url) = get(ENV_ENDPOINT_URL) {
            self.endpoint_url = Some(url);
        }
        if let Some(url) = get(ENV_ENDPOINT_FILE) {
            self.endpoint_file = Some(url);
        }
    }

    /// Classifier client settings; fails if the key is missing. Endpoints
    /// are checked per request, so a URL-only or file-only setup works.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let set = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

        let key = set(&self.prediction_key).ok_or(ConfigError::Missing("prediction_key"))?;
        let mut config =
            ClientConfig::new(key).with_timeout(self.request_timeout_secs.map(Duration::from_secs));
        config.endpoint_url = set(&self.endpoint_url);
        config.endpoint_file = set(&self.endpoint_file);

        Ok(config)
    }

    /// True when the key and at least one endpoint are set
    pub fn is_usable(&self) -> bool {
        self.client_config()
            .map(|c| c.endpoint_url.is_some() || c.endpoint_file.is_some())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tuners Cost Predictor Configuration")?;
        writeln!(f, "===================================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Prediction key: {}",
            if self.prediction_key.is_some() {
                "(set)"
            } else {
                "(not set)"
            }
        )?;
        writeln!(
            f,
            "Endpoint (URL): {}",
            self.endpoint_url.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(
            f,
            "Endpoint (file): {}",
            self.endpoint_file.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Timeout:        {}",
            self.request_timeout_secs
                .map(|s| format!("{} s", s))
                .unwrap_or_else(|| "(none)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;
    use tuners_types::Error;

    fn complete() -> Config {
        Config {
            prediction_key: Some("s3cr3t-key".to_string()),
            endpoint_url: Some("https://cv.example.com/url".to_string()),
            endpoint_file: Some("https://cv.example.com/image".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = complete();
        config.output_format = OutputFormat::Json;
        config.request_timeout_secs = Some(20);

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"endpoint_url": "https://cv.example.com/url"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint_url.as_deref(), Some("https://cv.example.com/url"));
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.prediction_key.is_none());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_PREDICTION_KEY, "env-key"),
            (ENV_ENDPOINT_URL, "   "),
            (ENV_ENDPOINT_FILE, "https://env.example.com/image"),
        ]
        .into_iter()
        .collect();

        let mut config = complete();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.prediction_key.as_deref(), Some("env-key"));
        // Blank values do not override
        assert_eq!(config.endpoint_url.as_deref(), Some("https://cv.example.com/url"));
        assert_eq!(config.endpoint_file.as_deref(), Some("https://env.example.com/image"));
    }

    #[test]
    fn test_client_config_requires_key() {
        let mut config = complete();
        config.prediction_key = None;
        assert!(matches!(
            config.client_config(),
            Err(Error::Config(ConfigError::Missing("prediction_key")))
        ));
        assert!(!config.is_usable());
    }

    #[test]
    fn test_url_only_config() {
        let config = Config {
            prediction_key: Some("k".to_string()),
            endpoint_url: Some("https://cv.example.com/url".to_string()),
            endpoint_file: Some("  ".to_string()),
            ..Config::default()
        };

        let client = config.client_config().unwrap();
        assert_eq!(client.endpoint_url.as_deref(), Some("https://cv.example.com/url"));
        assert_eq!(client.endpoint_file, None);
        assert!(config.is_usable());
    }

    #[test]
    fn test_key_without_endpoints_is_not_usable() {
        let config = Config {
            prediction_key: Some("k".to_string()),
            ..Config::default()
        };
        assert!(config.client_config().is_ok());
        assert!(!config.is_usable());
    }

    #[test]
    fn test_client_config_timeout() {
        let mut config = complete();
        assert_eq!(config.client_config().unwrap().timeout, None);

        config.request_timeout_secs = Some(30);
        let client = config.client_config().unwrap();
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
        assert_eq!(client.prediction_key, "s3cr3t-key");
    }

    #[test]
    fn test_display_hides_key() {
        let shown = complete().to_string();
        assert!(shown.contains("(set)"));
        assert!(!shown.contains("s3cr3t"));
    }
}
