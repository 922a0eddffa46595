use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::export::DEFAULT_EXPORT_FILE_NAME;
use crate::model::Language;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_directory: Option<String>,
    pub export_file_name: String,
    pub ask_export_path: bool,
    pub initial_zoom: f32,
    pub show_instructions: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            font_directory: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            ask_export_path: true,
            initial_zoom: 1.0,
            show_instructions: true,
        }
    }
}

/// First existing settings file, or `settings.toml` in the working directory.
pub fn config_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config").join("dna-sketch.toml");
        if path.exists() {
            return path;
        }
    }
    for candidate in ["settings.toml", "settings.json"] {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return path;
        }
    }
    PathBuf::from("settings.toml")
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "toml")
}

/// Parses TOML or JSON, trying the format implied by `path` first.
pub fn parse_settings(path: &Path, s: &str) -> Result<AppSettings, SettingsError> {
    if is_toml(path) {
        match toml::from_str::<AppSettings>(s) {
            Ok(settings) => Ok(settings),
            Err(err) => serde_json::from_str::<AppSettings>(s).map_err(|_| err.into()),
        }
    } else {
        match serde_json::from_str::<AppSettings>(s) {
            Ok(settings) => Ok(settings),
            Err(err) => toml::from_str::<AppSettings>(s).map_err(|_| err.into()),
        }
    }
}

pub fn load_settings(path: &Path) -> Result<AppSettings, SettingsError> {
    let s = std::fs::read_to_string(path)?;
    parse_settings(path, &s)
}

/// Missing or broken files fall back to defaults.
pub fn load_or_default(path: &Path) -> AppSettings {
    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return AppSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => {
            log::info!("loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            log::warn!("ignoring {}: {err}", path.display());
            AppSettings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<(), SettingsError> {
    let contents = if is_toml(path) {
        toml::to_string_pretty(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    std::fs::write(path, contents)?;
    Ok(())
}
