//! TOML-based configuration.
//!
//! Stores the drip message template and display preferences:
//! - `messages.quiz_message`: template shown in place of blocked quiz
//!   content; supports a `[date]` placeholder. Empty means "use the
//!   built-in default".
//! - `display.date_format`: strftime format for release dates.
//! - `display.locale`: locale applied when formatting dynamic drip dates.
//!
//! Configuration is stored at `~/.config/coursedrip/config.toml`.

use chrono::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::host::{RequestContext, SettingsProvider};
use crate::message::QUIZ_MESSAGE_SETTING;
use crate::post::UserId;

/// Message templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Quiz drip message template; empty falls back to the built-in default.
    #[serde(default)]
    pub quiz_message: String,
}

/// Date display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            locale: default_locale(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/coursedrip/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DripConfig {
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl DripConfig {
    /// Default on-disk location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursedrip")
            .join("config.toml")
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path()).unwrap_or_default()
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_err = |e: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_err(e.to_string()))?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| save_err(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| save_err(e.to_string()))
    }

    /// Get a config value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "messages.quiz_message" => Some(self.messages.quiz_message.clone()),
            "display.date_format" => Some(self.display.date_format.clone()),
            "display.locale" => Some(self.display.locale.clone()),
            _ => None,
        }
    }

    /// Set a config value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "messages.quiz_message" => self.messages.quiz_message = value.to_string(),
            "display.date_format" => self.display.date_format = value.to_string(),
            "display.locale" => {
                Locale::try_from(value).map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("unknown locale {value:?}"),
                })?;
                self.display.locale = value.to_string();
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// The configured display locale, falling back to `en_US` when the
    /// stored tag is unknown.
    pub fn display_locale(&self) -> Locale {
        Locale::try_from(self.display.locale.as_str()).unwrap_or(Locale::en_US)
    }

    /// Build a request context for the given user from the display settings.
    pub fn request_context(&self, user_id: UserId) -> RequestContext {
        RequestContext {
            user_id,
            is_admin: false,
            date_format: self.display.date_format.clone(),
            locale: self.display_locale(),
        }
    }
}

impl SettingsProvider for DripConfig {
    fn get_setting(&self, key: &str) -> Option<String> {
        if key == QUIZ_MESSAGE_SETTING && !self.messages.quiz_message.is_empty() {
            return Some(self.messages.quiz_message.clone());
        }
        None
    }
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}
