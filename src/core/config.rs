use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `nvdu config set/get`
pub const CONFIG_KEYS: [&str; 5] = [
    "download-dir",
    "nvidia-smi",
    "language",
    "notebook",
    "os-version",
];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where downloaded installers are written
    #[serde(default)]
    pub download_dir: Option<String>,
    /// Explicit nvidia-smi location, otherwise PATH and the Windows default
    #[serde(default)]
    pub nvidia_smi_path: Option<String>,
    /// Catalog language code (e.g. "en-us")
    #[serde(default)]
    pub catalog_language: Option<String>,
    /// Forces notebook/desktop instead of probing for a battery
    #[serde(default)]
    pub notebook_override: Option<bool>,
    /// Replaces the detected OS version (e.g. "10" on Windows 11)
    #[serde(default)]
    pub os_version_override: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            // Older or hand-edited files fall back to defaults
            log::warn!("Ignoring unreadable config {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("nvdu").join("config.json"))
    }

    /// Download directory: configured, then the user's Downloads, then cwd
    pub fn resolve_download_dir(&self) -> PathBuf {
        self.download_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn language(&self) -> &str {
        self.catalog_language.as_deref().unwrap_or("en-us")
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "download-dir" => self.download_dir = Some(value.to_string()),
            "nvidia-smi" => self.nvidia_smi_path = Some(value.to_string()),
            "language" => self.catalog_language = Some(value.to_lowercase()),
            "notebook" => self.notebook_override = Some(parse_bool(value)?),
            "os-version" => self.os_version_override = Some(value.to_string()),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "download-dir" => self.download_dir.clone(),
            "nvidia-smi" => self.nvidia_smi_path.clone(),
            "language" => self.catalog_language.clone(),
            "notebook" => self.notebook_override.map(|b| b.to_string()),
            "os-version" => self.os_version_override.clone(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    pub fn unset_value(&mut self, key: &str) -> Result<()> {
        match key {
            "download-dir" => self.download_dir = None,
            "nvidia-smi" => self.nvidia_smi_path = None,
            "language" => self.catalog_language = None,
            "notebook" => self.notebook_override = None,
            "os-version" => self.os_version_override = None,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(anyhow!("Expected true/false, got '{}'", value)),
    }
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow!(
        "Unknown config key '{}'. Valid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    )
}
