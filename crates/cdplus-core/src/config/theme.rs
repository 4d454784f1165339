//! Theme configuration for cdplus.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, falling back to the default theme on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(theme) => theme,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring theme file");
                Self::default()
            }
        }
    }
}

/// Listing panel colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTheme {
    pub header_fg: String,
    pub dir_fg: String,
    pub file_fg: String,
    pub parent_fg: String,
    pub selected_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            header_fg: "cyan".to_string(),
            dir_fg: "blue".to_string(),
            file_fg: "reset".to_string(),
            parent_fg: "dark_gray".to_string(),
            selected_fg: "yellow".to_string(),
        }
    }
}

/// Bottom line colors: help, filter prompt and errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub help_fg: String,
    pub filter_fg: String,
    pub error_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            help_fg: "dark_gray".to_string(),
            filter_fg: "yellow".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
            Color::Rgb(channel(1..3), channel(3..5), channel(5..7))
        }
        _ => Color::Reset,
    }
}
