//! Configuration handling for the contact form

use crate::state::Rules;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "folio_contact=info";

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactConfig {
    /// Minimum trimmed length of the name field
    pub name_min_chars: Option<usize>,
    /// Minimum trimmed length of the message field
    pub message_min_chars: Option<usize>,
    /// How long the success banner stays up, in milliseconds
    pub banner_duration_ms: Option<u64>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: ContactConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Every setting spelled out with its default value
    pub fn starter() -> Self {
        let rules = Rules::default();
        Self {
            name_min_chars: Some(rules.name_min_chars),
            message_min_chars: Some(rules.message_min_chars),
            banner_duration_ms: Some(rules.banner_duration.as_millis() as u64),
            log_filter: Some(DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Write the starter config if no config file exists yet.
    ///
    /// Returns the path written, if any.
    pub fn init() -> Result<Option<PathBuf>> {
        match Self::config_path() {
            Some(path) => Self::init_at(&path),
            None => Ok(None),
        }
    }

    pub fn init_at(path: &Path) -> Result<Option<PathBuf>> {
        if path.exists() {
            return Ok(None);
        }
        Self::starter().save_to(path)?;
        Ok(Some(path.to_path_buf()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the validation thresholds, falling back to the defaults
    pub fn rules(&self) -> Rules {
        let defaults = Rules::default();
        Rules {
            name_min_chars: self.name_min_chars.unwrap_or(defaults.name_min_chars),
            message_min_chars: self
                .message_min_chars
                .unwrap_or(defaults.message_min_chars),
            banner_duration: self
                .banner_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.banner_duration),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
