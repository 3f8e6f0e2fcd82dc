//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.calcli.toml` in the working directory
//! 4. `~/.config/calcli/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_SERVER_URL, ENV_COLOR, ENV_LOCALE, ENV_SERVER_URL,
    ENV_TIMEOUT,
};
use crate::env::Env;
use crate::models::Locale;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

/// Where and how requests are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL; `/calculate` is appended.
    pub url: String,
    /// Request timeout. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Request timeout to apply, if any. Zero means wait indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub locale: Locale,
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.calcli.toml` under `local_dir`, then
    /// applies environment variable overrides. CLI flags are applied by the
    /// caller afterwards.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = local_dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                tracing::debug!(path = %local_path.display(), "loading local config");
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_server = ServerConfig::default();
        if other.server.url != default_server.url {
            self.server.url = other.server.url;
        }
        // An explicit 0 clears a timeout set by a lower layer.
        if let Some(secs) = other.server.timeout_secs {
            self.server.timeout_secs = (secs > 0).then_some(secs);
        }

        let default_ui = UiConfig::default();
        if other.ui.locale != default_ui.locale {
            self.ui.locale = other.ui.locale;
        }
        // Disabled overrides enabled
        if !other.ui.color {
            self.ui.color = false;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(ENV_SERVER_URL) {
            self.server.url = val;
        }
        if let Some(val) = env.get(ENV_TIMEOUT) {
            match val.parse::<u64>() {
                Ok(0) => self.server.timeout_secs = None,
                Ok(secs) => self.server.timeout_secs = Some(secs),
                Err(_) => tracing::warn!("ignoring invalid {ENV_TIMEOUT} value: {val}"),
            }
        }
        if let Some(val) = env.get(ENV_LOCALE) {
            match val.parse::<Locale>() {
                Ok(locale) => self.ui.locale = locale,
                Err(_) => tracing::warn!("ignoring invalid {ENV_LOCALE} value: {val}"),
            }
        }
        match env.switch(ENV_COLOR) {
            Some(Ok(color)) => self.ui.color = color,
            Some(Err(val)) => tracing::warn!("ignoring invalid {ENV_COLOR} value: {val}"),
            None => {}
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.url, "http://127.0.0.1:5000");
        assert_eq!(config.server.timeout_secs, None);
        assert_eq!(config.ui.locale, Locale::En);
        assert!(config.ui.color);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
url = "https://calc.example.com"
timeout_secs = 10

[ui]
locale = "ru"
color = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.url, "https://calc.example.com");
        assert_eq!(config.server.timeout_secs, Some(10));
        assert_eq!(config.ui.locale, Locale::Ru);
        assert!(!config.ui.color);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[ui]\nlocale = \"ru\"\n").unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.ui.locale, Locale::Ru);
        assert!(config.ui.color);
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.server.url = "http://other:8080".to_string();
        other.server.timeout_secs = Some(5);
        other.ui.locale = Locale::Ru;
        other.ui.color = false;

        base.merge(other.clone());
        assert_eq!(base, other);
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.server.url = "http://base:1".to_string();
        base.server.timeout_secs = Some(3);
        base.ui.locale = Locale::Ru;
        let expected = base.clone();

        base.merge(Config::default());
        assert_eq!(base, expected);
    }

    #[test]
    fn env_vars_override_file_values() {
        let mut config = Config::default();
        config.server.url = "http://from-file".to_string();

        let env = Env::mock([
            (ENV_SERVER_URL, "http://from-env"),
            (ENV_TIMEOUT, "7"),
            (ENV_LOCALE, "ru_RU.UTF-8"),
            (ENV_COLOR, "off"),
        ]);
        config.apply_env_vars(&env);

        assert_eq!(config.server.url, "http://from-env");
        assert_eq!(config.server.timeout_secs, Some(7));
        assert_eq!(config.ui.locale, Locale::Ru);
        assert!(!config.ui.color);
    }

    #[test]
    fn zero_timeout_env_disables_timeout() {
        let mut config = Config::default();
        config.server.timeout_secs = Some(30);
        config.apply_env_vars(&Env::mock([(ENV_TIMEOUT, "0")]));
        assert_eq!(config.server.timeout_secs, None);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let mut config = Config::default();
        let env = Env::mock([
            (ENV_TIMEOUT, "soon"),
            (ENV_LOCALE, "klingon"),
            (ENV_COLOR, "maybe"),
        ]);
        config.apply_env_vars(&env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[server]\nurl = \"http://local:5000\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.server.url, "http://local:5000");
    }

    #[test]
    fn load_treats_zero_file_timeout_as_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[server]\ntimeout_secs = 0\n").unwrap();

        let config = Config::load(Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.server.timeout_secs, None);
        assert_eq!(config.server.timeout(), None);
    }

    #[test]
    fn merge_zero_timeout_clears_lower_layer() {
        let mut base = Config::default();
        base.server.timeout_secs = Some(10);
        let mut other = Config::default();
        other.server.timeout_secs = Some(0);

        base.merge(other);
        assert_eq!(base.server.timeout_secs, None);
    }

    #[test]
    fn timeout_ignores_zero() {
        let mut server = ServerConfig::default();
        assert_eq!(server.timeout(), None);
        server.timeout_secs = Some(0);
        assert_eq!(server.timeout(), None);
        server.timeout_secs = Some(4);
        assert_eq!(server.timeout(), Some(Duration::from_secs(4)));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[server\nurl = ").unwrap();

        let err = Config::load(Some(dir.path()), &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
        assert!(err.to_string().contains(CONFIG_FILENAME));
    }

    #[test]
    fn load_file_missing_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn to_toml_round_trips_through_parser() {
        let mut config = Config::default();
        config.server.timeout_secs = Some(12);
        config.ui.locale = Locale::Ru;
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[server]"));
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
