use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> String {
    "Php".to_string()
}

fn default_navps_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).unwrap_or_default()
}

fn default_share_precision() -> usize {
    5
}

/// Presentation settings. Fund prices are fixed in the catalog and not configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Date the catalog NAVPS values were published.
    #[serde(default = "default_navps_as_of")]
    pub navps_as_of: NaiveDate,
    /// Decimal places used when displaying purchased shares.
    #[serde(default = "default_share_precision")]
    pub share_precision: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            navps_as_of: default_navps_as_of(),
            share_precision: default_share_precision(),
        }
    }
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in settings when it does not exist.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ph", "saveandlearn", "fundcalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Long form of the NAVPS date, e.g. "June 05, 2024".
    pub fn navps_as_of_label(&self) -> String {
        self.navps_as_of.format("%B %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
currency: "USD"
navps_as_of: "2025-01-31"
share_precision: 3
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency, "USD");
        assert_eq!(
            config.navps_as_of,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert_eq!(config.share_precision, 3);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("currency: \"EUR\"").unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.navps_as_of, default_navps_as_of());
        assert_eq!(config.share_precision, 5);

        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_navps_label() {
        assert_eq!(AppConfig::default().navps_as_of_label(), "June 05, 2024");
    }

    #[test]
    fn test_load_from_path_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");
        let err = AppConfig::load_from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "navps_as_of: not-a-date").unwrap();
        let err = AppConfig::load_from_path(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
