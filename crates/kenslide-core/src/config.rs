use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            scroll: ScrollConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name (e.g., "gruvbox-dark", "light")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Show the current image's file name in the status bar
    #[serde(default = "default_true")]
    pub show_filenames: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
            show_filenames: default_true(),
        }
    }
}

/// Easing curve for animated paging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate paging instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for the paging animation
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "q", "<C-j>" (Ctrl+j), "<CR>" (Enter), "<Esc>", "<Space>", "<Left>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Page right
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    /// Page left
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    /// Jump to the first page
    #[serde(default = "default_key_first_page")]
    pub first_page: String,
    /// Jump to the last page
    #[serde(default = "default_key_last_page")]
    pub last_page: String,
    /// Re-center on the middle page
    #[serde(default = "default_key_center")]
    pub center: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_page: default_key_next_page(),
            prev_page: default_key_prev_page(),
            first_page: default_key_first_page(),
            last_page: default_key_last_page(),
            center: default_key_center(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_page() -> String { "l".to_string() }
fn default_key_prev_page() -> String { "h".to_string() }
fn default_key_first_page() -> String { "0".to_string() }
fn default_key_last_page() -> String { "$".to_string() }
fn default_key_center() -> String { "c".to_string() }

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_animation_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/kenslide/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("kenslide")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme, "gruvbox-dark");
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.scroll.animation_duration_ms, 150);
        assert_eq!(config.scroll.easing, EasingType::Cubic);
        assert_eq!(config.scroll.animation_fps, 60);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            smooth_enabled = false
            easing = "easeout"
            "#,
        )
        .unwrap();

        assert!(!config.scroll.smooth_enabled);
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
        // Untouched sections fall back to defaults
        assert_eq!(config.scroll.animation_duration_ms, 150);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.keymap.next_page, "l");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scroll.easing, config.scroll.easing);
        assert_eq!(parsed.keymap.center, config.keymap.center);
    }
}
