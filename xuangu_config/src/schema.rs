use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;
use xuangu_core::ScreeningCriteria;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// Base criteria handed to extraction; fields left out of the file
    /// keep their documented defaults.
    #[serde(default)]
    pub defaults: ScreeningCriteria,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Emit JSON reports without asking for `--json` each time.
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Path of the config file, `~/xuangu/config.json`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("xuangu");

        Ok(config_dir.join("config.json"))
    }

    /// Load the config file.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'xuangu init' to create config.",
                config_path.display()
            );
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&contents)?;

        Ok(config)
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            debug!("Using default config: {e}");
            Self::default()
        })
    }

    /// Write the default config file, creating its directory.
    ///
    /// Returns the path written. Refuses to overwrite an existing file.
    pub fn write_default() -> anyhow::Result<PathBuf> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            anyhow::bail!("Config file already exists at: {}", config_path.display());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, contents)?;

        Ok(config_path)
    }
}
