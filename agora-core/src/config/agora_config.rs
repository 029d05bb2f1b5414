//! Global agora configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ConflictThresholds;
use crate::error::{AgoraError, AgoraResult};

/// Configuration at ~/.config/agora/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AgoraConfig {
    pub conflicts: ConflictThresholds,
}

impl AgoraConfig {
    pub fn config_path() -> AgoraResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgoraError::Config("Could not determine config directory".into()))?
            .join("agora");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> AgoraResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AgoraResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            AgoraError::Config(msg) => {
                AgoraError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> AgoraResult<Self> {
        let config: AgoraConfig =
            toml::from_str(content).map_err(|e| AgoraError::Config(e.to_string()))?;
        config.conflicts.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> AgoraResult<String> {
        toml::to_string_pretty(self).map_err(|e| AgoraError::Config(e.to_string()))
    }
}
