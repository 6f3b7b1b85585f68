//! Persisted client-side preferences.
//!
//! Holds the few flags the client keeps between runs: the last signed-in user
//! profile and the dark-mode toggle. Stored as pretty-printed JSON.

use crate::{entities::User, errors::Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default preferences file, next to `finance.toml`.
pub const DEFAULT_PREFERENCES_PATH: &str = "preferences.json";

/// Preferences persisted between sessions.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Profile of the last authenticated user; [`Preferences::sign_out`] clears it
    pub user: Option<User>,
    /// Whether the dark theme is enabled
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
}

impl Preferences {
    /// Forgets the signed-in user, keeping display flags.
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Loads preferences, returning defaults when the file is absent.
pub fn load_preferences<P: AsRef<Path>>(path: P) -> Result<Preferences> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Ok(Preferences::default());
    }
    let contents = std::fs::read_to_string(path_ref)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes preferences, replacing any previous file.
pub fn save_preferences<P: AsRef<Path>>(path: P, preferences: &Preferences) -> Result<()> {
    let contents = serde_json::to_string_pretty(preferences)?;
    std::fs::write(path.as_ref(), contents)?;
    tracing::debug!("Saved preferences to {:?}", path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("finance-prefs-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn test_missing_preferences_are_default() {
        let prefs = load_preferences(temp_path("missing")).unwrap();
        assert!(!prefs.dark_mode);
        assert!(prefs.user.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let prefs = Preferences {
            user: Some(User {
                id: 7,
                username: "ana".to_string(),
                email: Some("ana@example.com".to_string()),
                first_name: None,
                last_name: None,
            }),
            dark_mode: true,
        };
        save_preferences(&path, &prefs).unwrap();
        let loaded = load_preferences(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_sign_out_clears_user_and_persists() {
        let path = temp_path("sign-out");
        let mut prefs = Preferences {
            user: Some(User {
                id: 3,
                username: "luis".to_string(),
                email: None,
                first_name: None,
                last_name: None,
            }),
            dark_mode: true,
        };
        save_preferences(&path, &prefs).unwrap();

        prefs.sign_out();
        save_preferences(&path, &prefs).unwrap();
        let loaded = load_preferences(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(loaded.user.is_none());
        assert!(loaded.dark_mode);
    }

    #[test]
    fn test_dark_mode_uses_browser_key() {
        let prefs: Preferences = serde_json::from_str(r#"{"darkMode": true}"#).unwrap();
        assert!(prefs.dark_mode);
    }
}
