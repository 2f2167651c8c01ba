use std::path::PathBuf;

use super::app_state::AppearanceMode;

/// Cosmetic view preferences. Nothing here feeds the transform: the source
/// path and block size are session-only by design.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserPreferences {
    pub appearance_mode: AppearanceMode,
    pub show_original_image: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            appearance_mode: AppearanceMode::default(),
            show_original_image: true,
        }
    }
}

impl UserPreferences {
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("PixelArtGUI").join("preferences.json")
        } else {
            PathBuf::from("preferences.json")
        }
    }

    pub fn load() -> Self {
        let path = Self::config_path();
        if let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(prefs) = serde_json::from_str(&content)
        {
            return prefs;
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        log::debug!("preferences saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_serialization() {
        let prefs = UserPreferences {
            appearance_mode: AppearanceMode::Dark,
            show_original_image: false,
        };

        let json = serde_json::to_string(&prefs).unwrap();
        let deserialized: UserPreferences = serde_json::from_str(&json).unwrap();

        assert_eq!(prefs, deserialized);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let parsed: Result<UserPreferences, _> = serde_json::from_str("{\"bogus\": 1}");
        assert!(parsed.is_err());
    }
}
