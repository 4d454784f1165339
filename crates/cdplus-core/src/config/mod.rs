//! Configuration management for cdplus.
//!
//! User preferences ([`settings::Config`]), key bindings ([`keymap::Keymap`])
//! and colors ([`theme::Theme`]) are stored as TOML files in a single
//! configuration directory and loaded at startup.

use std::path::{Path, PathBuf};

pub mod keymap;
pub mod settings;
pub mod theme;

pub const CONFIG_FILE: &str = "config.toml";
pub const KEYMAP_FILE: &str = "keymap.toml";
pub const THEME_FILE: &str = "theme.toml";

/// The per-user configuration directory, e.g. `~/.config/cdplus`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cdplus"))
}

/// Everything loaded from a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub config: settings::Config,
    pub keymap: keymap::Keymap,
    pub theme: theme::Theme,
}

impl Settings {
    /// Loads all three files from `dir`; missing or broken files use defaults.
    pub fn load_from(dir: &Path) -> Self {
        tracing::debug!(dir = %dir.display(), "loading configuration");
        Self {
            config: settings::Config::load_or_default(&dir.join(CONFIG_FILE)),
            keymap: keymap::Keymap::load_or_default(&dir.join(KEYMAP_FILE)),
            theme: theme::Theme::load_or_default(&dir.join(THEME_FILE)),
        }
    }
}
