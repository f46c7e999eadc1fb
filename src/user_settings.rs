use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub backend_origin: String,
    pub serve_bind: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    global_constants::DEFAULT_TOP_K
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            backend_origin: global_constants::DEFAULT_BACKEND_ORIGIN.to_string(),
            serve_bind: global_constants::DEFAULT_SERVE_BIND.to_string(),
            top_k: global_constants::DEFAULT_TOP_K,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Backend origin: {}", settings.backend_origin);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// Backend origin with any environment override applied, no trailing slash.
    pub fn resolved_backend_origin(&self) -> String {
        let origin = std::env::var(global_constants::ENV_BACKEND_ORIGIN)
            .unwrap_or_else(|_| self.backend_origin.clone());
        origin.trim_end_matches('/').to_string()
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
