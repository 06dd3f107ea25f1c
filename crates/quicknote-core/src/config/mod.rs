//! Application configuration.
//!
//! A small JSON file tells front ends where the preference files live and how
//! note timestamps are rendered. Every field is optional.

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::clock::{SystemClock, DEFAULT_TIMESTAMP_FORMAT};
use crate::error::{Error, Result};
use crate::util::normalize_text_option;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "QUICKNOTE_DATA_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding `notes_prefs.json` and `theme_prefs.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// strftime pattern for note timestamps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        normalized.validate()?;
        std::fs::write(path, serde_json::to_string_pretty(&normalized)?)?;
        Ok(())
    }

    pub fn timestamp_format(&self) -> &str {
        self.timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
    }

    /// Clock rendering timestamps with the configured pattern.
    pub fn clock(&self) -> SystemClock {
        SystemClock::new(self.timestamp_format())
    }

    /// Pick the data directory: explicit flag, then environment, then this
    /// config, then `fallback`.
    pub fn resolve_data_dir(
        &self,
        explicit: Option<PathBuf>,
        env_value: Option<String>,
        fallback: PathBuf,
    ) -> PathBuf {
        explicit
            .or_else(|| normalize_text_option(env_value).map(PathBuf::from))
            .or_else(|| self.data_dir.clone())
            .unwrap_or(fallback)
    }

    fn normalize(&mut self) {
        self.timestamp_format = normalize_text_option(self.timestamp_format.take());
        if self
            .data_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            self.data_dir = None;
        }
    }

    fn validate(&self) -> Result<()> {
        let Some(format) = self.timestamp_format.as_deref() else {
            return Ok(());
        };
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidInput(format!(
                "invalid timestamp_format `{format}`"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        let config = AppConfig::load_from_path(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join(CONFIG_FILE_NAME);
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/notes")),
            timestamp_format: Some("%Y-%m-%d %H:%M".to_string()),
        };

        config.save_to_path(&path).unwrap();
        assert_eq!(AppConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn blank_format_is_dropped() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"timestamp_format":"   "}"#).unwrap();
        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.timestamp_format, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"unknown_field":1}"#).unwrap();
        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn invalid_format_is_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"timestamp_format":"%Q"}"#).unwrap();
        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn data_dir_resolution_order() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..AppConfig::default()
        };
        let fallback = PathBuf::from("/fallback");

        assert_eq!(
            config.resolve_data_dir(
                Some(PathBuf::from("/from/flag")),
                Some("/from/env".to_string()),
                fallback.clone()
            ),
            PathBuf::from("/from/flag")
        );
        assert_eq!(
            config.resolve_data_dir(None, Some("/from/env".to_string()), fallback.clone()),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            config.resolve_data_dir(None, Some("  ".to_string()), fallback.clone()),
            PathBuf::from("/from/config")
        );
        assert_eq!(
            AppConfig::default().resolve_data_dir(None, None, fallback.clone()),
            fallback
        );
    }
}
