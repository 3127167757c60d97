//! Client configuration.
//!
//! Settings are layered: built-in defaults, then `~/.config/tai/config.toml`
//! when it exists, then the `TAI_API_URL` environment variable.
//!
//! ```toml
//! api_base_url = "http://localhost:8000"
//! language = "en"
//! ```

use crate::error::{Result, TaiError};
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "TAI_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaiConfig {
    /// Base URL of the assistant backend, without a trailing slash.
    pub api_base_url: String,
    /// Initial interface language.
    pub language: Language,
}

impl Default for TaiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            language: Language::default(),
        }
    }
}

/// Returns the path to the configuration file: ~/.config/tai/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| TaiError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("tai").join("config.toml"))
}

impl TaiConfig {
    /// Loads the configuration from the default file and the process
    /// environment.
    pub fn load() -> Result<Self> {
        let path = config_path().ok();
        let env_url = std::env::var(API_URL_ENV).ok();
        Self::load_from(path.as_deref(), env_url)
    }

    /// Loads the configuration from an explicit file and URL override.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error. A blank override is ignored.
    pub fn load_from(path: Option<&Path>, api_url_override: Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).map_err(|e| {
                    TaiError::config(format!(
                        "Failed to read configuration file at {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                toml::from_str::<TaiConfig>(&content).map_err(|e| {
                    TaiError::config(format!(
                        "Failed to parse configuration file at {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            _ => Self::default(),
        };

        if let Some(url) = api_url_override.filter(|url| !url.trim().is_empty()) {
            tracing::debug!("[TaiConfig] Using {} from environment", API_URL_ENV);
            config.api_base_url = url.trim().to_string();
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();

        Ok(config)
    }

    /// Full URL of an endpoint path such as `/api/chat/general`.
    pub fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.api_base_url, path)
    }
}

/// Joins a base URL and an endpoint path with exactly one slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = TaiConfig::load_from(Some(Path::new("/nonexistent/tai.toml")), None).unwrap();
        assert_eq!(config, TaiConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_file_values_are_read() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"https://tai.example.com/\"\nlanguage = \"sw\"").unwrap();

        let config = TaiConfig::load_from(Some(file.path()), None).unwrap();
        assert_eq!(config.api_base_url, "https://tai.example.com");
        assert_eq!(config.language, Language::Sw);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "language = \"sw\"").unwrap();

        let config = TaiConfig::load_from(Some(file.path()), None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_env_override_wins() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"https://file.example.com\"").unwrap();

        let config =
            TaiConfig::load_from(Some(file.path()), Some("http://10.0.0.2:9000".to_string()))
                .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");

        let config = TaiConfig::load_from(Some(file.path()), Some("  ".to_string())).unwrap();
        assert_eq!(config.api_base_url, "https://file.example.com");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = [").unwrap();

        let err = TaiConfig::load_from(Some(file.path()), None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = TaiConfig::default();
        assert_eq!(
            config.endpoint("/api/chat/general"),
            "http://localhost:8000/api/chat/general"
        );
        assert_eq!(endpoint_url("http://h/", "api/x"), "http://h/api/x");
    }
}
