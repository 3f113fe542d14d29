//! Startup configuration loaded from `config.json` + environment overrides.
//!
//! Loading never fails: a missing or malformed file falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults::{
    CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, ENV_CONFIG_PATH, ENV_HOST, ENV_PORT,
};

/// Listen address settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT.into(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration: config file (next to the executable, or
    /// `BARCODE_SERVICE_CONFIG`), then environment overrides.
    pub fn load() -> Self {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path),
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Read a JSON config file, falling back to defaults on any error.
    pub fn from_file(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::info!(
                    "{} not readable ({e}), using {DEFAULT_HOST}:{DEFAULT_PORT}",
                    path.display()
                );
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Error reading {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse JSON, replacing empty fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.with_defaults())
    }

    /// Apply non-empty values from `lookup` for the host/port override keys.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.is_empty()) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            self.port = port;
        }
    }

    /// `host:port` string suitable for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn with_defaults(mut self) -> Self {
        if self.host.is_empty() {
            self.host = DEFAULT_HOST.into();
        }
        if self.port.is_empty() {
            self.port = DEFAULT_PORT.into();
        }
        self
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)),
        Err(e) => {
            tracing::warn!("Unable to determine executable path: {e}");
            None
        }
    }
}
