//! User preferences document.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TarotError, TarotResult};
use crate::persist::{read_json, write_json_atomic};

/// Preferences read by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play sounds.
    pub sound_enabled: bool,
    /// Animate card reveals.
    pub animation_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            animation_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, using defaults when the document is absent
    /// or unreadable.
    pub fn load(path: &Path) -> Self {
        match read_json(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("ignoring unreadable settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to `path`.
    pub fn save(&self, path: &Path) -> TarotResult<()> {
        write_json_atomic(path, self).inspect_err(|e| {
            log::error!("failed to save settings to {}: {e}", path.display());
        })
    }

    /// Set a flag by name (`sound` or `animation`) from a textual value.
    pub fn set(&mut self, key: &str, value: &str) -> TarotResult<()> {
        let slot = match key.trim().to_lowercase().as_str() {
            "sound" | "sound_enabled" => &mut self.sound_enabled,
            "animation" | "animations" | "animation_enabled" => &mut self.animation_enabled,
            _ => return Err(TarotError::UnknownSetting(key.to_string())),
        };
        *slot = parse_flag(key, value)?;
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> TarotResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(TarotError::InvalidSettingValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let onoff = |b: bool| if b { "on" } else { "off" };
        writeln!(f, "sound: {}", onoff(self.sound_enabled))?;
        write!(f, "animation: {}", onoff(self.animation_enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_enabled() {
        let s = Settings::default();
        assert!(s.sound_enabled);
        assert!(s.animation_enabled);
    }

    #[test]
    fn absent_document_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            Settings::load(&dir.path().join("settings.json")),
            Settings::default()
        );
    }

    #[test]
    fn corrupt_document_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "sound=off").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn missing_field_defaults_individually() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"sound_enabled": false}"#).unwrap();
        let s = Settings::load(&path);
        assert!(!s.sound_enabled);
        assert!(s.animation_enabled);
    }

    #[test]
    fn save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let mut s = Settings::default();
        s.set("animation", "off").unwrap();
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path), s);
    }

    #[test]
    fn set_rejects_unknown_key_and_value() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("volume", "on"),
            Err(TarotError::UnknownSetting(_))
        ));
        assert!(matches!(
            s.set("sound", "loud"),
            Err(TarotError::InvalidSettingValue { .. })
        ));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn display() {
        let mut s = Settings::default();
        s.set("Sound", "false").unwrap();
        assert_eq!(s.to_string(), "sound: off\nanimation: on");
    }
}
