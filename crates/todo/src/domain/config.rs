//! Configuration domain facade.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::due::DueResolver;
use crate::entities::TodoConfig;
use crate::errors::{TodoError, TodoResult};

/// Configuration domain facade
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Create a config domain reading from `config_path`
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate configuration; a missing file means defaults
    pub async fn load(&self) -> TodoResult<TodoConfig> {
        let config = match fs::read_to_string(&self.config_path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| TodoError::ConfigError {
                    reason: format!("{}: {e}", self.config_path.display()),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "No config file, using defaults");
                TodoConfig::default()
            }
            Err(e) => {
                return Err(TodoError::FileReadError {
                    path: self.config_path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject settings that would only fail later, mid-session
    pub fn validate(config: &TodoConfig) -> TodoResult<()> {
        if config.store_file.as_os_str().is_empty() {
            return Err(TodoError::InvalidConfigValue {
                key: "storeFile".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        for (key, name) in [
            ("jsonExportName", &config.json_export_name),
            ("csvExportName", &config.csv_export_name),
        ] {
            if name.trim().is_empty() {
                return Err(TodoError::InvalidConfigValue {
                    key: key.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        DueResolver::from_config(config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp.path().join("todo.json"));

        assert_eq!(domain.load().await.unwrap(), TodoConfig::default());
    }

    #[tokio::test]
    async fn test_load_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todo.json");
        std::fs::write(&path, r#"{"storeFile": "elsewhere.json", "dateFormat": "%d.%m.%Y"}"#)
            .unwrap();

        let config = ConfigDomain::new(&path).load().await.unwrap();
        assert_eq!(config.store_file, PathBuf::from("elsewhere.json"));
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.json_export_name, "tasks.json");
    }

    #[tokio::test]
    async fn test_malformed_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todo.json");
        std::fs::write(&path, "{ storeFile").unwrap();

        let err = ConfigDomain::new(&path).load().await.unwrap_err();
        assert!(matches!(err, TodoError::ConfigError { .. }));
    }

    #[tokio::test]
    async fn test_invalid_values_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todo.json");
        std::fs::write(&path, r#"{"datePattern": "[unclosed"}"#).unwrap();

        let err = ConfigDomain::new(&path).load().await.unwrap_err();
        assert!(matches!(err, TodoError::InvalidConfigValue { ref key, .. } if key == "datePattern"));

        let config = TodoConfig {
            csv_export_name: " ".to_string(),
            ..TodoConfig::default()
        };
        assert!(ConfigDomain::validate(&config).is_err());
    }
}
