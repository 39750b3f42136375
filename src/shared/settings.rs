use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub api_keys: ApiKeys,
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeys {
    /// Key for exchangerate-api.com; empty means currency conversion is
    /// disabled until the user configures one.
    pub currency_api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_keys: ApiKeys {
                currency_api_key: String::new(),
            },
            preferences: UserPreferences {
                default_category: "Length".to_string(),
                default_from_unit: "meters".to_string(),
                default_to_unit: "feet".to_string(),
            },
        }
    }
}

impl AppSettings {
    pub fn settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "Convertly", "convertly")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    /// Load settings from disk, writing defaults on first run.
    pub async fn load() -> AppResult<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path).await?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub async fn save(&self) -> AppResult<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_ui_state() {
        let settings = AppSettings::default();
        assert_eq!(settings.preferences.default_category, "Length");
        assert_eq!(settings.preferences.default_from_unit, "meters");
        assert_eq!(settings.preferences.default_to_unit, "feet");
        assert!(settings.api_keys.currency_api_key.is_empty());
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.preferences.default_from_unit,
            settings.preferences.default_from_unit
        );
    }
}
