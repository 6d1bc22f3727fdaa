//! Configuration management for macrogen.
//!
//! Reads the image configuration JSON file, then applies environment
//! variable overrides. Environment variables take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment override for the disable-docs flag.
pub const DISABLE_RPM_DOCS_ENV: &str = "MACROGEN_DISABLE_RPM_DOCS";

/// Environment override for the locale list.
pub const OVERRIDE_RPM_LOCALES_ENV: &str = "MACROGEN_OVERRIDE_RPM_LOCALES";

/// Image configuration file fields relevant to macro generation.
///
/// Field names match the image configuration format, which uses PascalCase
/// keys. Unknown keys are ignored so a full image configuration file can be
/// passed as-is.
#[derive(Debug, Clone, Default, Deserialize)]
struct ImageConfig {
    #[serde(rename = "DisableRpmDocs", default)]
    disable_rpm_docs: bool,
    #[serde(rename = "OverrideRpmLocales", default)]
    override_rpm_locales: String,
}

/// Effective macrogen configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppress documentation installation (%_excludedocs).
    pub disable_rpm_docs: bool,
    /// Locale list for %_install_langs; empty means leave the default set.
    pub override_rpm_locales: String,
}

impl Config {
    /// Load configuration from an optional image config file and environment.
    ///
    /// Missing file argument means all defaults; a file that exists but does
    /// not parse is an error, not a silent default.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file_config = match config_file {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                serde_json::from_str::<ImageConfig>(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            None => ImageConfig::default(),
        };

        let mut config = Self {
            disable_rpm_docs: file_config.disable_rpm_docs,
            override_rpm_locales: file_config.override_rpm_locales,
        };

        // Environment variables override the file
        if let Ok(value) = std::env::var(DISABLE_RPM_DOCS_ENV) {
            config.disable_rpm_docs = matches!(value.as_str(), "1" | "true" | "yes");
        }
        if let Ok(value) = std::env::var(OVERRIDE_RPM_LOCALES_ENV) {
            config.override_rpm_locales = value;
        }

        Ok(config)
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  DISABLE_RPM_DOCS: {}", self.disable_rpm_docs);
        if self.override_rpm_locales.is_empty() {
            println!("  OVERRIDE_RPM_LOCALES: (default locale set)");
        } else {
            println!("  OVERRIDE_RPM_LOCALES: {}", self.override_rpm_locales);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load(None).unwrap();
        assert!(!config.disable_rpm_docs);
        assert!(config.override_rpm_locales.is_empty());
    }

    #[test]
    fn test_load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"DisableRpmDocs": true, "OverrideRpmLocales": "en:de"}}"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.disable_rpm_docs);
        assert_eq!(config.override_rpm_locales, "en:de");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"HostName": "builder", "DisableRpmDocs": true}}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.disable_rpm_docs);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/config.json"))).is_err());
    }
}
