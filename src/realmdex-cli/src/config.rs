//! Configuration management for the realmdex CLI

use anyhow::{Context, Result};
use realmdex::Region;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub output: Option<PathBuf>,
    pub token_region: Option<Region>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("realmdex");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from file, or default if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Client secret with all but the last four characters masked
    pub fn masked_secret(&self) -> Option<String> {
        self.client_secret.as_deref().map(|secret| {
            let visible: String = secret
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("{}{}", "*".repeat(secret.chars().count().saturating_sub(4)), visible)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            client_id: Some("abc".to_string()),
            client_secret: Some("shh".to_string()),
            output: Some(PathBuf::from("addon/GRM_Realms.lua")),
            token_region: Some(Region::Eu),
        };
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("token_region = \"eu\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "token_region = \"mars\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_masked_secret() {
        let config = Config {
            client_secret: Some("abcdefgh".to_string()),
            ..Config::default()
        };
        assert_eq!(config.masked_secret().as_deref(), Some("****efgh"));

        let short = Config {
            client_secret: Some("ab".to_string()),
            ..Config::default()
        };
        assert_eq!(short.masked_secret().as_deref(), Some("ab"));
    }
}
