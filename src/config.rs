//! Layered configuration for Vibeforge.
//!
//! Settings come from three layers, later layers winning:
//! file (`vibeforge.toml`) → environment → CLI flags. The file is
//! optional; everything has a sensible default except the provider API
//! key, which is validated where it is first needed.
//!
//! # Configuration File Format
//!
//! ```toml
//! [provider]
//! endpoint = "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
//! api_key = "..."            # or VIBEFORGE_API_KEY / GEMINI_API_KEY
//! request_timeout_secs = 60  # omit for no timeout (the default)
//!
//! [store]
//! path = "/home/me/.local/share/vibeforge/apps.json"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::provider::DEFAULT_ENDPOINT;
use crate::store::JsonFileStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Generation endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key; environment variables override this.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout. Absent means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// App list location; defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    /// Load configuration. An explicitly given file must exist; the
    /// default locations (`./vibeforge.toml`, then the platform config
    /// directory) are optional. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_file_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// First existing default config file, if any.
    fn default_file_path() -> Option<PathBuf> {
        let local = PathBuf::from("vibeforge.toml");
        if local.exists() {
            return Some(local);
        }
        let global = dirs::config_dir()?.join("vibeforge").join("config.toml");
        global.exists().then_some(global)
    }

    fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Environment layering with an injectable lookup so tests don't
    /// mutate process state.
    fn apply_env_from(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(key) = get("VIBEFORGE_API_KEY").or_else(|| get("GEMINI_API_KEY")) {
            self.provider.api_key = Some(key);
        }
        if let Some(endpoint) = get("VIBEFORGE_ENDPOINT") {
            self.provider.endpoint = endpoint;
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.provider.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolved store path: configured or the platform default.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(JsonFileStore::default_path)
    }

    /// The API key, or an actionable error when none is configured.
    pub fn require_api_key(&self) -> Result<&str> {
        self.provider.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No API key configured. Set VIBEFORGE_API_KEY (or GEMINI_API_KEY), \
                 or add provider.api_key to vibeforge.toml"
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_usable_without_a_file() {
        let config = Config::default();
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
        assert!(config.provider.api_key.is_none());
        assert!(config.request_timeout().is_none());
        assert!(config.store_path().ends_with("apps.json"));
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vibeforge.toml");
        fs::write(
            &path,
            r#"
[provider]
endpoint = "https://example.test/generate"
api_key = "file-key"
request_timeout_secs = 30

[store]
path = "/tmp/custom/apps.json"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.provider.endpoint, "https://example.test/generate");
        assert_eq!(config.provider.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.store_path(), PathBuf::from("/tmp/custom/apps.json"));
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vibeforge.toml");
        fs::write(&path, "[provider]\napi_key = \"k\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config {
            provider: ProviderSettings {
                api_key: Some("file-key".into()),
                ..ProviderSettings::default()
            },
            ..Config::default()
        };

        config.apply_env_from(|name| match name {
            "VIBEFORGE_API_KEY" => Some("env-key".to_string()),
            "VIBEFORGE_ENDPOINT" => Some("https://env.test/generate".to_string()),
            _ => None,
        });

        assert_eq!(config.provider.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.provider.endpoint, "https://env.test/generate");
    }

    #[test]
    fn gemini_key_is_a_fallback_for_the_primary_variable() {
        let mut config = Config::default();
        config.apply_env_from(|name| {
            (name == "GEMINI_API_KEY").then(|| "gemini-key".to_string())
        });
        assert_eq!(config.provider.api_key.as_deref(), Some("gemini-key"));
    }

    #[test]
    fn missing_api_key_is_an_actionable_error() {
        let err = Config::default().require_api_key().unwrap_err();
        assert!(err.to_string().contains("VIBEFORGE_API_KEY"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vibeforge.toml");
        fs::write(&path, "[provider\napi_key = ").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
