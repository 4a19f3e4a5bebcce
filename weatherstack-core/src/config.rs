use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Environment variable holding the weatherstack access key.
pub const ACCESS_KEY_VAR: &str = "ACCESS_KEY";
pub const BASE_URL_VAR: &str = "WEATHERSTACK_BASE_URL";
pub const OUTPUT_VAR: &str = "WEATHERSTACK_OUTPUT";

pub const DEFAULT_BASE_URL: &str = "https://api.weatherstack.com/current";
pub const DEFAULT_OUTPUT_PATH: &str = "all_weather_data.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Access key is missing. Set the ACCESS_KEY environment variable \
         (or add it to a local .env file)."
    )]
    MissingCredential,
}

/// Settings for a collection run.
///
/// Example TOML:
/// ```toml
/// access_key = "..."
/// base_url = "https://api.weatherstack.com/current"
/// output_path = "all_weather_data.csv"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub access_key: Option<String>,
    pub base_url: String,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Settings file merged with the process environment.
    pub fn resolve() -> Result<Self> {
        let mut cfg = Self::load()?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Load config from disk, or return defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file_path().as_deref())
    }

    /// No path (platform config dir unknown) is treated like a missing file.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Path to the config file, if the platform has a config directory.
    pub fn config_file_path() -> Option<PathBuf> {
        let Some(dirs) = ProjectDirs::from("dev", "weatherstack", "weather-data") else {
            log::debug!("no platform config directory; using defaults");
            return None;
        };

        Some(dirs.config_dir().join("config.toml"))
    }

    /// Environment variables take precedence over the settings file.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ACCESS_KEY_VAR) {
            self.access_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(path) = lookup(OUTPUT_VAR).filter(|v| !v.trim().is_empty()) {
            self.output_path = PathBuf::from(path);
        }
    }

    /// The access key, if one is set and non-blank.
    pub fn access_key(&self) -> Result<&str, ConfigError> {
        self.access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_weatherstack() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url, "https://api.weatherstack.com/current");
        assert_eq!(cfg.output_path, PathBuf::from("all_weather_data.csv"));
        assert!(cfg.access_key.is_none());
    }

    #[test]
    fn access_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.access_key().unwrap_err();

        assert_eq!(err, ConfigError::MissingCredential);
        assert!(err.to_string().contains("ACCESS_KEY"));
    }

    #[test]
    fn blank_access_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.apply_env_from(env(&[("ACCESS_KEY", "   ")]));

        assert_eq!(cfg.access_key(), Err(ConfigError::MissingCredential));
    }

    #[test]
    fn env_overrides_file_settings() {
        let mut cfg = Config::from_toml(
            r#"
            access_key = "FILE_KEY"
            output_path = "from-file.csv"
            "#,
        )
        .expect("valid toml");

        cfg.apply_env_from(env(&[
            ("ACCESS_KEY", "ENV_KEY"),
            ("WEATHERSTACK_BASE_URL", "http://localhost:9999/current"),
        ]));

        assert_eq!(cfg.access_key(), Ok("ENV_KEY"));
        assert_eq!(cfg.base_url, "http://localhost:9999/current");
        assert_eq!(cfg.output_path, PathBuf::from("from-file.csv"));
    }

    #[test]
    fn file_key_used_when_env_is_silent() {
        let mut cfg = Config::from_toml(r#"access_key = "FILE_KEY""#).expect("valid toml");
        cfg.apply_env_from(env(&[]));

        assert_eq!(cfg.access_key(), Ok("FILE_KEY"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn unknown_config_dir_falls_back_to_defaults() {
        let mut cfg = Config::load_from(None).expect("defaults");
        cfg.apply_env_from(env(&[("ACCESS_KEY", "ENV_KEY")]));

        assert_eq!(cfg.access_key(), Ok("ENV_KEY"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_settings_file_gives_defaults() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(Some(path.as_path())).expect("defaults");

        assert!(cfg.access_key.is_none());
        assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn settings_file_is_read_when_present() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "access_key = \"FILE_KEY\"\n").expect("write settings");

        let cfg = Config::load_from(Some(path.as_path())).expect("settings");

        assert_eq!(cfg.access_key(), Ok("FILE_KEY"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = Config::from_toml("access_key = [").unwrap_err();
        assert!(err.to_string().contains("Invalid configuration TOML"));
    }
}
