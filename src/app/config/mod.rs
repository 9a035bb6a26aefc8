// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Search endpoint, API key, page size, safesearch and timeout
//! - `[gallery]` - Grid tile geometry
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Endpoint URL; query parameters are appended to it.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key. `--api-key` overrides it; when both are absent,
    /// `PIXABAY_API_KEY` is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(default = "default_safesearch", skip_serializing_if = "Option::is_none")]
    pub safesearch: Option<bool>,

    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            per_page: default_per_page(),
            safesearch: default_safesearch(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Endpoint URL, falling back to the default when unset or blank.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// Page size clamped to what the endpoint accepts.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
    }

    #[must_use]
    pub fn safesearch(&self) -> bool {
        self.safesearch.unwrap_or(DEFAULT_SAFESEARCH)
    }

    /// Request timeout clamped to a sane range.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
    }

    /// Resolves the API key.
    ///
    /// Priority: `cli_override`, then the config file, then `PIXABAY_API_KEY`.
    /// Blank values are skipped. Returns an empty string when nothing is set.
    #[must_use]
    pub fn resolve_api_key(&self, cli_override: Option<&str>) -> String {
        let from_env = std::env::var(ENV_API_KEY).ok();
        let key = [cli_override, self.api_key.as_deref(), from_env.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .unwrap_or_default()
            .to_string();
        key
    }
}

/// Result grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Tile width in logical pixels.
    #[serde(default = "default_tile_width", skip_serializing_if = "Option::is_none")]
    pub tile_width: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_width(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn tile_width(&self) -> f32 {
        self.tile_width
            .filter(|width| width.is_finite())
            .unwrap_or(DEFAULT_TILE_WIDTH)
            .clamp(MIN_TILE_WIDTH, MAX_TILE_WIDTH)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration organized into logical sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_per_page() -> Option<u32> {
    Some(DEFAULT_PER_PAGE)
}

fn default_safesearch() -> Option<bool> {
    Some(DEFAULT_SAFESEARCH)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_tile_width() -> Option<f32> {
    Some(DEFAULT_TILE_WIDTH)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config and the i18n key of the warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Serializes tests that touch PIXABAY_API_KEY.
    static API_KEY_ENV: Mutex<()> = Mutex::new(());

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("http://localhost:8080/api/".to_string()),
                api_key: Some("secret".to_string()),
                per_page: Some(40),
                safesearch: Some(false),
                timeout_secs: Some(30),
            },
            gallery: GalleryConfig {
                tile_width: Some(300.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_returns_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[api]\nper_page = \"many\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.api, ApiConfig::default());
        assert_eq!(loaded.gallery.tile_width, Some(DEFAULT_TILE_WIDTH));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn per_page_is_clamped_to_endpoint_limits() {
        let mut api = ApiConfig::default();
        assert_eq!(api.per_page(), DEFAULT_PER_PAGE);

        api.per_page = Some(1);
        assert_eq!(api.per_page(), MIN_PER_PAGE);

        api.per_page = Some(1_000);
        assert_eq!(api.per_page(), MAX_PER_PAGE);
    }

    #[test]
    fn timeout_and_tile_width_are_clamped() {
        let api = ApiConfig {
            timeout_secs: Some(0),
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout_secs(), MIN_TIMEOUT_SECS);

        let gallery = GalleryConfig {
            tile_width: Some(f32::NAN),
        };
        assert_eq!(gallery.tile_width(), DEFAULT_TILE_WIDTH);

        let gallery = GalleryConfig {
            tile_width: Some(10_000.0),
        };
        assert_eq!(gallery.tile_width(), MAX_TILE_WIDTH);
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let api = ApiConfig {
            base_url: Some("   ".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_resolution_prefers_cli_then_file_then_env() {
        let _lock = API_KEY_ENV.lock().unwrap();
        let api = ApiConfig {
            api_key: Some("from-file".to_string()),
            ..ApiConfig::default()
        };
        let blank_file = ApiConfig {
            api_key: Some("  ".to_string()),
            ..ApiConfig::default()
        };

        std::env::remove_var(ENV_API_KEY);
        assert_eq!(api.resolve_api_key(None), "from-file");
        assert_eq!(ApiConfig::default().resolve_api_key(None), "");

        std::env::set_var(ENV_API_KEY, "from-env");
        assert_eq!(api.resolve_api_key(None), "from-file");
        assert_eq!(api.resolve_api_key(Some("from-cli")), "from-cli");
        assert_eq!(api.resolve_api_key(Some("  ")), "from-file");
        assert_eq!(ApiConfig::default().resolve_api_key(None), "from-env");
        assert_eq!(blank_file.resolve_api_key(None), "from-env");

        std::env::remove_var(ENV_API_KEY);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(config.api.per_page, Some(12));
        assert_eq!(config.api.safesearch, Some(true));
        assert_eq!(config.api.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
        assert!(config.api.api_key.is_none());
    }
}
