//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::Desk;

/// QADesk configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default auditor name stamped on new records
    pub auditor: Option<String>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/qadesk/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Desk config (.qadesk/config.yaml)
        if let Ok(desk) = Desk::discover() {
            let desk_config_path = desk.qadesk_dir().join("config.yaml");
            if desk_config_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&desk_config_path) {
                    if let Ok(desk_config) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(desk_config);
                    }
                }
            }
        }

        // 4. Environment variables
        if let Ok(auditor) = std::env::var("QADESK_AUDITOR") {
            config.auditor = Some(auditor);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "qadesk")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.auditor.is_some() {
            self.auditor = other.auditor;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Get the auditor name, falling back to git config or username
    pub fn auditor(&self) -> String {
        if let Some(ref auditor) = self.auditor {
            return auditor.clone();
        }

        // Try git config
        if let Ok(output) = std::process::Command::new("git")
            .args(["config", "user.name"])
            .output()
        {
            if output.status.success() {
                let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !name.is_empty() {
                    return name;
                }
            }
        }

        // Fall back to username
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
