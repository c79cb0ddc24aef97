pub use crate::settings_types::*;
use crate::storage_dir;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

impl Settings {
    pub fn default_path() -> PathBuf {
        storage_dir().join("settings.toml")
    }

    /// Loads the global settings file, creating it with defaults on first run.
    pub fn load() -> Self {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            info!("Creating default settings at {:?}", path);
            let default_settings = Settings::default();
            default_settings.save();
            default_settings
        }
    }

    /// Loads settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(s) => {
                info!("Loaded settings from {:?}", path);
                s
            }
            Err(e) => {
                error!("Failed to load {:?}: {:#}", path, e);
                Settings::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self) {
        let path = Self::default_path();
        match self.save_to(&path) {
            Ok(()) => info!("Saved settings to {:?}", path),
            Err(e) => error!("Failed to save settings: {:#}", e),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
