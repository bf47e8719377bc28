//! Preference storage.
//!
//! A single boolean survives between runs: whether the force-touch
//! tutorial notice has been shown. Read once at menu entry, written
//! once after the notice is displayed. IO problems degrade to the
//! defaults — the notice simply shows again.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub force_touch_notice_shown: bool,
}

/// Where the preference document lives: the platform config directory,
/// with a current-directory fallback.
pub fn prefs_path() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("asterfall").join("prefs.json");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("asterfall")
            .join("prefs.json");
    }
    PathBuf::from("asterfall-prefs.json")
}

/// Load preferences; a missing or unreadable document yields defaults.
pub fn load(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(prefs) => prefs,
            Err(err) => {
                log::warn!("unreadable preferences at {}: {err}", path.display());
                Preferences::default()
            }
        },
        Err(_) => Preferences::default(),
    }
}

/// Persist preferences, creating the parent directory if needed.
pub fn store(path: &Path, prefs: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
