use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ai::request::{DEFAULT_HOST, DEFAULT_PORT};
use crate::ai::{ConnectionTarget, RequestParameters};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub connection: ConnectionConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: String,
    /// Client-side request timeout; 0 leaves the HTTP stack's default.
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub use_colors: bool,
    pub show_spinner: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            timeout_secs: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_spinner: true,
        }
    }
}

impl Settings {
    /// Loads `~/.ollama-prompt/config.toml`, or defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let settings: Settings = toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;

        Ok(())
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        Ok(home_dir.join(".ollama-prompt").join("config.toml"))
    }

    pub fn connection_target(&self) -> ConnectionTarget {
        ConnectionTarget::new(&self.connection.host, &self.connection.port)
    }

    /// Form parameters preselected from the file; the prompt starts empty.
    pub fn request_parameters(&self) -> RequestParameters {
        RequestParameters::new(&self.generation.model, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.connection_target(),
            ConnectionTarget::new("localhost", "11434")
        );
        assert!(settings.generation.model.is_empty());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[connection]\nhost = \"10.0.0.5\"\n\n[generation]\nmodel = \"mistral\"\n")
            .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.connection.host, "10.0.0.5");
        assert_eq!(settings.connection.port, "11434");
        assert_eq!(settings.connection.timeout_secs, 0);
        assert_eq!(settings.request_parameters().model, "mistral");
        assert!(settings.output.use_colors);
    }

    #[test]
    fn invalid_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[connection\nhost = ").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.connection.port = "8080".to_string();
        settings.output.show_spinner = false;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }
}
