//! Application settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application settings
///
/// Stored as JSON; every field has a default, so a partial or missing file
/// is fine.
///
/// # Example
/// ```rust,no_run
/// use talkhub::storage::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let settings = Settings::load("app_data/settings.json").expect("Failed to load");
///
/// println!("Session file key: {}", settings.session_key);
/// println!("Code delivery delay: {:?}", settings.send_code_delay());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for the session file and the log
    pub data_dir: PathBuf,
    /// Storage key naming the session file
    pub session_key: String,
    /// Simulated delay of sending a verification code, in milliseconds
    pub send_code_delay_ms: u64,
    /// Simulated delay of verifying a code, in milliseconds
    pub verify_code_delay_ms: u64,
    /// Sender id used for messages typed in this client
    pub current_user_id: String,
    /// Placeholder id written into new sessions
    pub demo_user_id: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if file doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        // Handle empty file (return defaults)
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.session_key.trim().is_empty() {
            return Err(Error::Config("session_key must not be empty".to_string()));
        }
        if self
            .session_key
            .chars()
            .any(|c| std::path::is_separator(c) || c == '.')
        {
            return Err(Error::Config(format!(
                "session_key '{}' must be a plain file name",
                self.session_key
            )));
        }
        if self.current_user_id.is_empty() || self.demo_user_id.is_empty() {
            return Err(Error::Config("user ids must not be empty".to_string()));
        }
        Ok(())
    }

    /// Default settings file inside `data_dir`
    pub fn default_path<P: AsRef<Path>>(data_dir: P) -> PathBuf {
        data_dir.as_ref().join("settings.json")
    }

    /// Simulated code delivery delay
    pub fn send_code_delay(&self) -> Duration {
        Duration::from_millis(self.send_code_delay_ms)
    }

    /// Simulated code verification delay
    pub fn verify_code_delay(&self) -> Duration {
        Duration::from_millis(self.verify_code_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./app_data"),
            session_key: "talkhub_user".to_string(),
            send_code_delay_ms: 1000,
            verify_code_delay_ms: 1000,
            current_user_id: "current-user".to_string(),
            demo_user_id: "demo-user".to_string(),
        }
    }
}
