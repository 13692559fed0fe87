use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// The persisted settings record.
///
/// Every field carries a serde default so schema additions merge
/// non-destructively with older persisted shapes: keys absent from the
/// stored JSON simply take their default on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_haptics")]
    pub haptics: bool,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_auto_sort")]
    pub auto_sort: bool,
    #[serde(default)]
    pub voice_enabled: bool,
    #[serde(default)]
    pub compact_mode: bool,
}

fn default_haptics() -> bool {
    true
}
fn default_auto_sort() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics: default_haptics(),
            theme: Theme::Dark,
            auto_sort: default_auto_sort(),
            voice_enabled: false,
            compact_mode: false,
        }
    }
}

impl Settings {
    /// Return the standard store directory depending on the platform.
    pub fn store_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("done")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".done")
        }
    }

    /// Set a single key from a `key=value` pair.
    pub fn set_key(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "haptics" => self.haptics = parse_bool(key, value)?,
            "auto_sort" => self.auto_sort = parse_bool(key, value)?,
            "voice_enabled" => self.voice_enabled = parse_bool(key, value)?,
            "compact_mode" => self.compact_mode = parse_bool(key, value)?,
            "theme" => {
                self.theme = Theme::from_code(value).ok_or_else(|| {
                    AppError::Config(format!("theme must be 'dark' or 'light', got '{value}'"))
                })?
            }
            other => {
                return Err(AppError::Config(format!("Unknown settings key '{other}'")));
            }
        }
        Ok(())
    }

    /// Shallow-merge an imported settings object over this one: imported
    /// keys win, keys absent from the overlay keep their current values.
    /// Ill-typed values for known keys fail before anything is applied;
    /// keys this schema does not know are dropped.
    pub fn apply_overlay(&self, overlay: &serde_json::Value) -> AppResult<Settings> {
        let overlay_map = overlay
            .as_object()
            .ok_or_else(|| AppError::Import("settings must be a JSON object".into()))?;

        let mut current = serde_json::to_value(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        let current_map = current
            .as_object_mut()
            .expect("settings always serialize to an object");

        for (k, v) in overlay_map {
            current_map.insert(k.clone(), v.clone());
        }

        serde_json::from_value(current)
            .map_err(|e| AppError::Import(format!("invalid settings value: {e}")))
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} expects true/false, got '{other}'"
        ))),
    }
}
