//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so cdplus works without a `config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::format::DEFAULT_HOME_TOKEN;

/// Top-level application configuration.
///
/// Call [`Config::load`] to read from a TOML path, or
/// [`Config::load_or_default`] to fall back silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Like [`Config::load`], but a missing or broken file yields the defaults.
    ///
    /// Anything other than a missing file is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }
}

/// Export behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Placeholder written in place of the home directory.
    #[serde(default = "default_home_token")]
    pub home_token: String,
    #[serde(default = "default_true")]
    pub copy_to_clipboard: bool,
    #[serde(default = "default_true")]
    pub print_to_stdout: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            home_token: default_home_token(),
            copy_to_clipboard: true,
            print_to_stdout: true,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_icons: bool,
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            show_help: true,
        }
    }
}

/// Log output settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_home_token() -> String {
    DEFAULT_HOME_TOKEN.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
