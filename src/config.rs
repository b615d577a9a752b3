use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default = "default_current_theme")]
    pub current_theme: String,
    #[serde(default)]
    pub themes: HashMap<String, Theme>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default = "default_config_version")]
    pub config_version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_submit")]
    pub submit: String,
    #[serde(default = "default_tab_left")]
    pub tab_left: String,
    #[serde(default = "default_tab_right")]
    pub tab_right: String,
    #[serde(default = "default_tab_1")]
    pub tab_1: String,
    #[serde(default = "default_tab_2")]
    pub tab_2: String,
    #[serde(default = "default_tab_3")]
    pub tab_3: String,
    #[serde(default = "default_tab_4")]
    pub tab_4: String,
    #[serde(default = "default_tab_5")]
    pub tab_5: String,
    #[serde(default = "default_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Theme colors accept named colors ("cyan") or hex ("#a78bfa").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_fg")]
    pub fg: String,
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
    #[serde(default = "default_tab_bg")]
    pub tab_bg: String,
    #[serde(default = "default_positive")]
    pub positive: String,
    #[serde(default = "default_warning")]
    pub warning: String,
    #[serde(default = "default_concern")]
    pub concern: String,
}

/// User preferences surfaced on the profile view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_flag_on")]
    pub notifications: bool,
    #[serde(default = "default_flag_on")]
    pub daily_reminder: bool,
    #[serde(default = "default_privacy")]
    pub privacy: String,
}

/// The privacy mode cycle shown on the profile view.
pub const PRIVACY_MODES: [&str; 3] = ["private", "anonymous", "research"];

pub fn privacy_description(mode: &str) -> &'static str {
    match mode {
        "anonymous" => "Anonymous - Help improve the platform",
        "research" => "Research - Contribute to mental health research",
        _ => "Private - Data stays local",
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            key_bindings: KeyBindings::default(),
            current_theme: default_current_theme(),
            themes: HashMap::new(),
            preferences: Preferences::default(),
            config_version: Some(CURRENT_CONFIG_VERSION),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: default_quit(),
            help: default_help(),
            submit: default_submit(),
            tab_left: default_tab_left(),
            tab_right: default_tab_right(),
            tab_1: default_tab_1(),
            tab_2: default_tab_2(),
            tab_3: default_tab_3(),
            tab_4: default_tab_4(),
            tab_5: default_tab_5(),
            scroll_up: default_scroll_up(),
            scroll_down: default_scroll_down(),
            category: default_category(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: default_fg(),
            bg: default_bg(),
            highlight_bg: default_highlight_bg(),
            highlight_fg: default_highlight_fg(),
            tab_bg: default_tab_bg(),
            positive: default_positive(),
            warning: default_warning(),
            concern: default_concern(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: default_flag_on(),
            daily_reminder: default_flag_on(),
            privacy: default_privacy(),
        }
    }
}

impl Theme {
    /// Preset themes that are always available
    pub fn get_preset_themes() -> HashMap<String, Theme> {
        let mut themes = HashMap::new();

        themes.insert("default".to_string(), Theme::default());

        themes.insert(
            "light".to_string(),
            Theme {
                fg: "black".to_string(),
                bg: "white".to_string(),
                highlight_bg: "blue".to_string(),
                highlight_fg: "white".to_string(),
                tab_bg: "gray".to_string(),
                positive: "green".to_string(),
                warning: "yellow".to_string(),
                concern: "red".to_string(),
            },
        );

        themes.insert(
            "calm".to_string(),
            Theme {
                fg: "white".to_string(),
                bg: "black".to_string(),
                highlight_bg: "magenta".to_string(),
                highlight_fg: "white".to_string(),
                tab_bg: "darkgray".to_string(),
                positive: "lightgreen".to_string(),
                warning: "lightyellow".to_string(),
                concern: "lightred".to_string(),
            },
        );

        themes.insert(
            "monochrome".to_string(),
            Theme {
                fg: "white".to_string(),
                bg: "black".to_string(),
                highlight_bg: "white".to_string(),
                highlight_fg: "black".to_string(),
                tab_bg: "gray".to_string(),
                positive: "white".to_string(),
                warning: "gray".to_string(),
                concern: "white".to_string(),
            },
        );

        themes
    }
}

// Default value functions

fn default_data_path() -> String {
    // Fallback path - the actual profile is applied at load time
    if let Some(data_dir) = utils::get_data_dir(utils::Profile::Prod) {
        data_dir.join("entries.db").to_string_lossy().to_string()
    } else {
        "~/.local/share/mindspace/entries.db".to_string()
    }
}

fn default_quit() -> String {
    "q".to_string()
}

fn default_help() -> String {
    "F1".to_string()
}

fn default_submit() -> String {
    "Ctrl+s".to_string()
}

fn default_tab_left() -> String {
    "Left".to_string()
}

fn default_tab_right() -> String {
    "Right".to_string()
}

fn default_tab_1() -> String {
    "1".to_string()
}

fn default_tab_2() -> String {
    "2".to_string()
}

fn default_tab_3() -> String {
    "3".to_string()
}

fn default_tab_4() -> String {
    "4".to_string()
}

fn default_tab_5() -> String {
    "5".to_string()
}

fn default_scroll_up() -> String {
    "k".to_string()
}

fn default_scroll_down() -> String {
    "j".to_string()
}

fn default_category() -> String {
    "c".to_string()
}

fn default_current_theme() -> String {
    "default".to_string()
}

fn default_fg() -> String {
    "white".to_string()
}

fn default_bg() -> String {
    "black".to_string()
}

fn default_highlight_bg() -> String {
    "magenta".to_string()
}

fn default_highlight_fg() -> String {
    "white".to_string()
}

fn default_tab_bg() -> String {
    "gray".to_string()
}

fn default_positive() -> String {
    "green".to_string()
}

fn default_warning() -> String {
    "yellow".to_string()
}

fn default_concern() -> String {
    "red".to_string()
}

fn default_flag_on() -> bool {
    true
}

fn default_privacy() -> String {
    "private".to_string()
}

fn default_config_version() -> Option<u32> {
    Some(CURRENT_CONFIG_VERSION)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

impl Config {
    /// Load configuration from file, or create a default one if missing.
    /// The profile determines the config and data paths.
    pub fn load_with_profile(profile: utils::Profile) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            let mut config: Config = toml::from_str(&contents)?;

            // Keep the data path in step with the profile even if the
            // config file was edited by hand
            config.data_path = Self::default_data_path_for_profile(profile);

            Ok(config)
        } else {
            let mut config = Config::default();
            config.data_path = Self::default_data_path_for_profile(profile);
            config.save_with_profile(profile)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save_with_profile(&mut self, profile: utils::Profile) -> Result<(), ConfigError> {
        self.config_version = Some(CURRENT_CONFIG_VERSION);

        let config_path = Self::get_config_path(profile)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile).ok_or_else(|| {
            ConfigError::ConfigDirError("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("config.toml"))
    }

    fn default_data_path_for_profile(profile: utils::Profile) -> String {
        if let Some(data_dir) = utils::get_data_dir(profile) {
            data_dir.join("entries.db").to_string_lossy().to_string()
        } else {
            match profile {
                utils::Profile::Dev => "~/.local/share/mindspace-dev/entries.db".to_string(),
                utils::Profile::Prod => "~/.local/share/mindspace/entries.db".to_string(),
            }
        }
    }

    /// Get the expanded data file path (with ~ expansion)
    pub fn get_data_path(&self) -> PathBuf {
        utils::expand_path(&self.data_path)
    }

    /// The currently active theme: user-defined first, then presets,
    /// then the default. An empty highlight_fg is derived from the
    /// highlight background for contrast.
    pub fn get_active_theme(&self) -> Theme {
        use crate::tui::widgets::color::{get_contrast_text_color_name, parse_color};

        let mut theme = if let Some(theme) = self.themes.get(&self.current_theme) {
            theme.clone()
        } else if let Some(theme) = Theme::get_preset_themes().get(&self.current_theme) {
            theme.clone()
        } else {
            Theme::default()
        };

        if theme.highlight_fg.is_empty() {
            let highlight_bg = parse_color(&theme.highlight_bg);
            theme.highlight_fg = get_contrast_text_color_name(highlight_bg).to_string();
        }

        theme
    }

    /// Cycle the privacy preference to the next mode.
    pub fn cycle_privacy(&mut self) {
        let idx = PRIVACY_MODES
            .iter()
            .position(|m| *m == self.preferences.privacy)
            .unwrap_or(0);
        self.preferences.privacy = PRIVACY_MODES[(idx + 1) % PRIVACY_MODES.len()].to_string();
    }
}
