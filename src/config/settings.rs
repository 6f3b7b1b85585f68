//! Display and polling settings loaded from `finance.toml`.
//!
//! The file is optional: when it does not exist every section falls back to
//! its defaults (es-MX labels, MXN amounts, five-minute notification polling).

use crate::{
    core::format::{Currency, Locale},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Default settings file looked up by [`load_default_settings`].
pub const DEFAULT_SETTINGS_PATH: &str = "finance.toml";

/// The entire settings file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How amounts, dates and bucket labels are rendered
    pub display: DisplaySettings,
    /// Background notification polling
    pub notifications: NotificationSettings,
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Language for labels and month names
    pub locale: Locale,
    /// Currency amounts are shown in
    pub currency: Currency,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: Locale::EsMx,
            currency: Currency::Mxn,
        }
    }
}

/// `[notifications]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Seconds between notification polls; `0` is treated as 1
    pub poll_interval_secs: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 5 * 60,
        }
    }
}

impl NotificationSettings {
    /// Polling period, at least one second.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        if self.poll_interval_secs == 0 {
            return Duration::from_secs(1);
        }
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Loads settings from a TOML file, returning defaults when the file is absent.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::debug!("No settings file at {:?}, using defaults", path_ref);
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings file {path_ref:?}: {e}"),
    })
}

/// Loads settings from the default location (./finance.toml)
pub fn load_default_settings() -> Result<Settings> {
    load_settings(DEFAULT_SETTINGS_PATH)
}
