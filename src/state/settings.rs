use crate::config::AppConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Persistent user settings that are saved between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last target (captioned) image folder
    pub last_target_dir: Option<PathBuf>,

    /// Last control image folder
    pub last_control_dir: Option<PathBuf>,

    pub caption_ext: String,

    /// Quick tag text exactly as typed
    pub quick_tags: String,

    pub autosave: bool,

    /// Word-count threshold for importing tags from captions
    pub import_word_limit: usize,

    /// Window size at last exit
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            last_target_dir: None,
            last_control_dir: None,
            caption_ext: config.default_caption_ext.to_string(),
            quick_tags: String::new(),
            autosave: true,
            import_word_limit: config.default_import_word_limit,
            window_width: config.window_width,
            window_height: config.window_height,
        }
    }
}

impl Settings {
    /// Get the path to the settings file.
    ///
    /// Prefers the platform config directory and falls back to the directory
    /// holding the executable.
    pub fn get_config_path() -> Option<PathBuf> {
        if let Some(dirs) = ProjectDirs::from("", "", "kontext-captioner") {
            return Some(dirs.config_dir().join("settings.json"));
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()))
            .map(|dir| dir.join("settings.json"))
    }

    /// Load settings from disk, or return defaults if file doesn't exist or is corrupted
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn load_from(config_path: &PathBuf) -> Self {
        info!("Loading settings from: {:?}", config_path);

        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!("Successfully loaded settings");
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings file: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) => {
                // It's normal for the file not to exist on first run
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read settings file: {}. Using defaults.", e);
                } else {
                    info!("No settings file found. Using defaults.");
                }
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        match Self::get_config_path() {
            Some(config_path) => self.save_to(&config_path),
            None => warn!("Could not determine config directory. Settings not saved."),
        }
    }

    pub fn save_to(&self, config_path: &PathBuf) {
        if let Some(parent) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(config_path, json) {
                    warn!("Failed to write settings file: {}", e);
                } else {
                    info!("Settings saved to: {:?}", config_path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.caption_ext, ".txt");
        assert!(settings.autosave);
        assert_eq!(settings.import_word_limit, 10);
        assert!(settings.quick_tags.is_empty());
        assert!(settings.last_target_dir.is_none());
        assert_eq!((settings.window_width, settings.window_height), (1400.0, 900.0));
    }

    #[test]
    fn test_settings_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            last_target_dir: Some(PathBuf::from("data/target")),
            last_control_dir: Some(PathBuf::from("data/control")),
            caption_ext: ".caption".to_string(),
            quick_tags: "red hair, smile".to_string(),
            autosave: false,
            import_word_limit: 3,
            window_width: 1024.0,
            window_height: 768.0,
        };

        settings.save_to(&path);
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"quick_tags":"a, b"}"#).unwrap();
        assert_eq!(loaded.quick_tags, "a, b");
        assert_eq!(loaded.caption_ext, ".txt");
        assert!(loaded.autosave);
        assert_eq!(loaded.window_width, 1400.0);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
