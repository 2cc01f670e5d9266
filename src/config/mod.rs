// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's site configuration, including loading
//! and saving settings to a `settings.toml` file.
//!
//! The configuration mirrors the declarative site configuration of the
//! original static site: canonical site URL, asset base path, web-font
//! fallback, and the narrow-layout breakpoint.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "FolioLens";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Canonical URL of the portfolio site. Used to resolve absolute targets.
    pub site_url: Option<String>,
    /// Base path prefix for relative asset targets.
    #[serde(default)]
    pub base_path: Option<String>,
    /// Whether to fall back to the system font instead of the bundled face.
    #[serde(default)]
    pub font_fallback: Option<bool>,
    /// Window width at or below which the narrow layout applies.
    #[serde(default)]
    pub breakpoint: Option<f32>,
    /// Window width on startup, in logical pixels.
    #[serde(default)]
    pub window_width: Option<u32>,
    /// Window height on startup, in logical pixels.
    #[serde(default)]
    pub window_height: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: None,
            base_path: None,
            font_fallback: Some(true),
            breakpoint: Some(DEFAULT_BREAKPOINT),
            window_width: Some(WINDOW_DEFAULT_WIDTH),
            window_height: Some(WINDOW_DEFAULT_HEIGHT),
        }
    }
}

impl Config {
    /// Returns the layout breakpoint, clamped to the supported range so a
    /// persisted config cannot request a nonsensical layout.
    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
            .unwrap_or(DEFAULT_BREAKPOINT)
            .clamp(MIN_BREAKPOINT, MAX_BREAKPOINT)
    }

    /// Returns the startup window width, clamped to the supported range.
    pub fn window_width(&self) -> f32 {
        self.window_width
            .unwrap_or(WINDOW_DEFAULT_WIDTH)
            .clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH) as f32
    }

    /// Returns the startup window height, clamped to the supported range.
    pub fn window_height(&self) -> f32 {
        self.window_height
            .unwrap_or(WINDOW_DEFAULT_HEIGHT)
            .clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW_HEIGHT) as f32
    }
}

/// Loads the configuration from `config_dir` if given, falling back to the
/// platform config directory, then to defaults.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let path = match config_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(CONFIG_FILE);
            path
        }),
    };
    if let Some(path) = path {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_site_url() {
        let config = Config {
            site_url: Some("https://example.dev".to_string()),
            base_path: Some("/images".to_string()),
            font_fallback: Some(false),
            breakpoint: Some(720.0),
            window_width: Some(1600),
            window_height: Some(900),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.site_url, config.site_url);
        assert_eq!(loaded.base_path, config.base_path);
        assert_eq!(loaded.font_fallback, config.font_fallback);
        assert_eq!(loaded.breakpoint, config.breakpoint);
        assert_eq!(loaded.window_width, config.window_width);
        assert_eq!(loaded.window_height, config.window_height);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.site_url.is_none());
    }

    #[test]
    fn load_with_config_dir_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            site_url: Some("https://example.dev".to_string()),
            ..Default::default()
        };
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save config");

        let loaded = load(Some(temp_dir.path())).expect("failed to load config");
        assert_eq!(loaded.site_url, config.site_url);
    }

    #[test]
    fn breakpoint_is_clamped_to_supported_range() {
        let config = Config {
            breakpoint: Some(10.0),
            ..Default::default()
        };
        assert_eq!(config.breakpoint(), MIN_BREAKPOINT);

        let config = Config {
            breakpoint: Some(10_000.0),
            ..Default::default()
        };
        assert_eq!(config.breakpoint(), MAX_BREAKPOINT);

        let config = Config {
            breakpoint: None,
            ..Default::default()
        };
        assert_eq!(config.breakpoint(), DEFAULT_BREAKPOINT);
    }

    #[test]
    fn window_geometry_is_clamped_to_supported_range() {
        let config = Config {
            window_width: Some(10),
            window_height: Some(50_000),
            ..Default::default()
        };
        assert_eq!(config.window_width(), MIN_WINDOW_WIDTH as f32);
        assert_eq!(config.window_height(), MAX_WINDOW_HEIGHT as f32);

        let config = Config {
            window_width: None,
            window_height: None,
            ..Default::default()
        };
        assert_eq!(config.window_width(), WINDOW_DEFAULT_WIDTH as f32);
        assert_eq!(config.window_height(), WINDOW_DEFAULT_HEIGHT as f32);
    }

    #[test]
    fn default_config_enables_font_fallback() {
        let config = Config::default();
        assert_eq!(config.font_fallback, Some(true));
        assert_eq!(config.breakpoint, Some(DEFAULT_BREAKPOINT));
    }
}
