//! Shared config utilities for loading/saving JSON config files,
//! plus the tour engine's own `TourConfig`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                debug!("[{}] loaded config from {}", label, path.display());
                config
            }
            Err(e) => {
                warn!(
                    "[{}] failed to parse config {}: {} — using defaults",
                    label,
                    path.display(),
                    e
                );
                T::default()
            }
        },
        Err(_) => {
            debug!(
                "[{}] no config file at {} — using defaults",
                label,
                path.display()
            );
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(path: &Path, config: &T, label: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;
    debug!("[{}] saved config to {}", label, path.display());
    Ok(())
}

// ── Tour Config ────────────────────────────────────────

/// Settings for the tour engine: voice selection preferences and the
/// fixed delay between a section switch and the follow-up anchor scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourConfig {
    /// Display name of a voice to prefer when picking a narration default.
    #[serde(default)]
    pub preferred_voice: Option<String>,
    /// Exact language tag to prefer (e.g. "en-US").
    #[serde(default = "default_locale")]
    pub preferred_locale: String,
    /// Language prefix fallback when no exact locale match exists.
    #[serde(default = "default_language_prefix")]
    pub language_prefix: String,
    /// Delay before scrolling to a step's anchor, giving the section
    /// switch time to render.
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
    /// Initial narration rate.
    #[serde(default = "default_rate")]
    pub default_rate: f32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            preferred_voice: None,
            preferred_locale: default_locale(),
            language_prefix: default_language_prefix(),
            scroll_delay_ms: default_scroll_delay_ms(),
            default_rate: default_rate(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}
fn default_language_prefix() -> String {
    "en".to_string()
}
fn default_scroll_delay_ms() -> u64 {
    150
}
fn default_rate() -> f32 {
    1.0
}

/// Default location of the tour config file under the platform data dir.
pub fn default_config_path() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dashboard-tour")
        .join("tour_config.json")
}

/// Load the tour config from a JSON file. Falls back to defaults if the
/// file is missing or invalid.
pub fn load_config(path: &Path) -> TourConfig {
    load_json_config(path, "Tour")
}

/// Save the tour config to a JSON file.
pub fn save_config(path: &Path, config: &TourConfig) -> Result<(), String> {
    save_json_config(path, config, "Tour")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = TourConfig::default();
        assert_eq!(config.preferred_voice, None);
        assert_eq!(config.preferred_locale, "en-US");
        assert_eq!(config.language_prefix, "en");
        assert_eq!(config.scroll_delay_ms, 150);
        assert_eq!(config.default_rate, 1.0);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour_config.json");

        let config = TourConfig {
            preferred_voice: Some("Samantha".to_string()),
            preferred_locale: "en-GB".to_string(),
            language_prefix: "en".to_string(),
            scroll_delay_ms: 250,
            default_rate: 1.5,
        };
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path);
        assert_eq!(loaded.preferred_voice.as_deref(), Some("Samantha"));
        assert_eq!(loaded.preferred_locale, "en-GB");
        assert_eq!(loaded.scroll_delay_ms, 250);
        assert_eq!(loaded.default_rate, 1.5);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join("nope.json"));
        assert_eq!(loaded.preferred_locale, "en-US");
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour_config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.scroll_delay_ms, 150);
    }

    #[test]
    fn partial_json_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour_config.json");
        std::fs::write(&path, r#"{"preferred_locale":"fr-FR"}"#).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.preferred_locale, "fr-FR");
        assert_eq!(loaded.language_prefix, "en");
        assert_eq!(loaded.scroll_delay_ms, 150);
    }
}
