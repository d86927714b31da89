//! Configuration structures and loading.

use crate::error::{ConfigError, ConfigResult};
use crate::paths::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = AppPaths::new().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&paths.config_file)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file with comments.
    pub fn create_default_file(path: &PathBuf) -> ConfigResult<()> {
        let default_config = Self::default_config_string();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_config)?;
        Ok(())
    }

    /// Generate a default config file with helpful comments.
    pub fn default_config_string() -> String {
        r#"# Sonda Configuration
# Industrial machine manual analyzer

[general]
# Data directory for the machine archive database
# data_dir = "~/.local/share/sonda"

[gemini]
# Google AI API key. Leave empty to read it from the GEMINI_API_KEY
# environment variable instead.
api_key = ""

# Model used for extraction
model = "gemini-1.5-flash"

# Request timeout in seconds
timeout_seconds = 120

[processing]
# Manual text is split into blocks of this many characters; each block is
# analyzed with one model call.
chunk_size = 12000
"#
        .to_string()
    }
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
}

/// Google Gemini API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 120,
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key: the config value wins, then the GEMINI_API_KEY
    /// environment variable. Returns None when neither is set, which the
    /// client reports as a configuration error.
    pub fn resolve_api_key(&self) -> Option<String> {
        if !self.api_key.trim().is_empty() {
            return Some(self.api_key.trim().to_string());
        }
        std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Analysis pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Characters per chunk sent to the model.
    pub chunk_size: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { chunk_size: 12_000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_string_parses() {
        let config: Config = toml::from_str(&Config::default_config_string()).unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.processing.chunk_size, 12_000);
        assert!(config.gemini.api_key.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[gemini]\napi_key = \"abc\"\n").unwrap();
        assert_eq!(config.gemini.api_key, "abc");
        assert_eq!(config.gemini.timeout_seconds, 120);
        assert_eq!(config.processing.chunk_size, 12_000);
    }

    #[test]
    fn test_config_value_wins_over_environment() {
        let gemini = GeminiConfig {
            api_key: " key-from-file ".to_string(),
            ..Default::default()
        };
        assert_eq!(gemini.resolve_api_key().as_deref(), Some("key-from-file"));
    }
}
