//! Client configuration for kex (stored in ~/.config/kex/config.toml)
//!
//! Resolution order: built-in defaults, the config file, environment
//! variables, then command line overrides applied by the caller.

use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KexError, Result};

const CONFIG_DIR: &str = "kex";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "KEX_CONFIG_DIR";

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MIN_TIMEOUT_SECONDS: u64 = 1;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Environment variables consulted for the backend URL, highest priority first
const BACKEND_ENV_VARS: [&str; 2] = ["KEX_BACKEND_URL", "BACKEND_URL"];
const TIMEOUT_ENV_VAR: &str = "KEX_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend_url: String,
    pub timeout_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<NonZeroU32>,
    pub summary_budget: usize,
    pub collapsed_items: usize,
    pub expanded_items: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            default_limit: None,
            summary_budget: 200,
            collapsed_items: 2,
            expanded_items: 3,
        }
    }
}

/// Where a resolved setting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    Default,
    File,
    Env,
    Flag,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Default => "default",
            ConfigSource::File => "file",
            ConfigSource::Env => "env",
            ConfigSource::Flag => "flag",
        }
    }
}

/// Effective configuration plus provenance for `kex config`
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: ClientConfig,
    pub path: Option<PathBuf>,
    pub file_loaded: bool,
    pub backend_source: ConfigSource,
    pub timeout_source: ConfigSource,
}

impl ClientConfig {
    /// Path of the config file, honoring `KEX_CONFIG_DIR`.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| KexError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Read a config file. `Ok(None)` when it does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| KexError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| KexError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.timeout_seconds = clamp_timeout(config.timeout_seconds);
        Ok(Some(config))
    }

    /// Defaults, then the config file, then the process environment.
    pub fn resolve() -> Result<ResolvedConfig> {
        let path = Self::config_path().ok();
        let from_file = match &path {
            Some(path) => Self::from_file(path)?,
            None => None,
        };
        let file_loaded = from_file.is_some();
        let base_source = if file_loaded {
            ConfigSource::File
        } else {
            ConfigSource::Default
        };

        let mut resolved = ResolvedConfig {
            config: from_file.unwrap_or_default(),
            path,
            file_loaded,
            backend_source: base_source,
            timeout_source: base_source,
        };
        resolved.apply_env(|key| std::env::var(key).ok());
        debug!(
            backend_url = %resolved.config.backend_url,
            timeout_seconds = resolved.config.timeout_seconds,
            file_loaded,
            "config_resolved"
        );
        Ok(resolved)
    }
}

impl ResolvedConfig {
    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = BACKEND_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty());
        if let Some(url) = backend {
            self.config.backend_url = url.trim().to_string();
            self.backend_source = ConfigSource::Env;
        }

        if let Some(seconds) = lookup(TIMEOUT_ENV_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            self.config.timeout_seconds = clamp_timeout(seconds);
            self.timeout_source = ConfigSource::Env;
        }
    }

    /// Apply command line overrides.
    pub fn apply_flags(&mut self, backend: Option<&str>, timeout_seconds: Option<u64>) {
        if let Some(url) = backend.map(str::trim).filter(|u| !u.is_empty()) {
            self.config.backend_url = url.to_string();
            self.backend_source = ConfigSource::Flag;
        }
        if let Some(seconds) = timeout_seconds {
            self.config.timeout_seconds = clamp_timeout(seconds);
            self.timeout_source = ConfigSource::Flag;
        }
    }

    /// Returns the file source description for display purposes
    pub fn source_display(&self) -> String {
        match (&self.path, self.file_loaded) {
            (Some(path), true) => path.display().to_string(),
            (Some(path), false) => format!("{} (not found, using defaults)", path.display()),
            (None, _) => "built-in defaults".to_string(),
        }
    }
}

fn clamp_timeout(seconds: u64) -> u64 {
    seconds.clamp(MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)
}
