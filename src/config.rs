//! Configuration file support for tint.
//!
//! The picker's initial color, region layout, preset list and log level can
//! be loaded from and saved to a JSON file.

use serde::{Deserialize, Serialize};

use crate::color_model::{hex_to_rgb, validate_percent};
use crate::error::ColorError;
use crate::picker::PickerLayout;
use crate::presets::DEFAULT_PRESETS;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Picker configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Region geometry
    #[serde(default)]
    pub layout: PickerLayout,

    /// Theme colors as `#RRGGBB`
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,
}

fn default_presets() -> Vec<String> {
    DEFAULT_PRESETS.iter().map(|c| c.to_string()).collect()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Color the picker starts with
    #[serde(default = "default_initial_color")]
    pub initial_color: String,

    /// Opacity the picker starts with, in percent
    #[serde(default = "default_initial_opacity")]
    pub initial_opacity: f64,
}

fn default_initial_color() -> String {
    "#FFFFFF".to_string()
}

fn default_initial_opacity() -> f64 {
    100.0
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            initial_color: default_initial_color(),
            initial_opacity: default_initial_opacity(),
        }
    }
}

impl PickerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            layout: PickerLayout::default(),
            presets: default_presets(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check colors and opacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        hex_to_rgb(&self.preferences.initial_color)?;
        validate_percent("initial_opacity", self.preferences.initial_opacity)?;
        for preset in &self.presets {
            hex_to_rgb(preset)?;
        }
        Ok(())
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "tint-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("tint").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("tint")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from `path`.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_path(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Try to load configuration from the default path.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        Self::load_from_path(&path)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save_to_path(&path)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A color or opacity in the file is invalid
    #[error("Invalid configuration value: {0}")]
    InvalidValue(#[from] ColorError),

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = PickerConfig::default();
        let json = config.to_json().unwrap();
        let back = PickerConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = PickerConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.preferences, UserPreferences::default());
        assert_eq!(config.layout, PickerLayout::default());
        assert_eq!(config.presets.len(), DEFAULT_PRESETS.len());
    }

    #[test]
    fn test_version_too_new() {
        let err = PickerConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_color = r##"{ "version": 1, "preferences": { "initial_color": "#FFF" } }"##;
        assert!(matches!(
            PickerConfig::from_json(bad_color),
            Err(ConfigError::InvalidValue(ColorError::InvalidFormat { .. }))
        ));

        let bad_opacity = r#"{ "version": 1, "preferences": { "initial_opacity": 120 } }"#;
        assert!(matches!(
            PickerConfig::from_json(bad_opacity),
            Err(ConfigError::InvalidValue(ColorError::OutOfRange { .. }))
        ));

        let bad_preset = r##"{ "version": 1, "presets": ["#000000", "red"] }"##;
        assert!(PickerConfig::from_json(bad_preset).is_err());
    }

    #[test]
    fn test_log_level_serde() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{ "log_level": "trace" }"#).unwrap();
        assert_eq!(prefs.log_level, LogLevel::Trace);
        assert_eq!(prefs.log_level.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::all().len(), 5);
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = std::env::temp_dir().join(format!("tint-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(PickerConfig::default_filename());

        let mut config = PickerConfig::default();
        config.preferences.initial_color = "#123456".to_string();
        config.preferences.initial_opacity = 40.0;
        config.save_to_path(&path).unwrap();

        let loaded = PickerConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(PickerConfig::load_from_path(&path).is_none());
    }
}
