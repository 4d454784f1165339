//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"gg"`, `"Enter"`) to [`Action`]
//! values. The defaults combine the arrow keys with vim-style letters.
//!
//! TOML files use string action identifiers (e.g. `"cursor_down"`); these
//! are resolved to [`Action`] via [`ActionRegistry::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::action::{Action, ActionRegistry};
use crate::error::{CoreError, CoreResult};
use crate::format::FormatCode;

/// Raw TOML representation, deserialized first and then resolved.
#[derive(Debug, Clone, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map used by the help line.
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Navigation
        for key in ["k", "Up"] {
            bindings.insert(key.to_string(), Action::CursorUp);
        }
        for key in ["j", "Down"] {
            bindings.insert(key.to_string(), Action::CursorDown);
        }
        for key in ["gg", "Home"] {
            bindings.insert(key.to_string(), Action::CursorTop);
        }
        for key in ["G", "End"] {
            bindings.insert(key.to_string(), Action::CursorBottom);
        }
        for key in ["Enter", "Space", "l", "Right"] {
            bindings.insert(key.to_string(), Action::EnterDir);
        }
        for key in ["Backspace", "h", "Left"] {
            bindings.insert(key.to_string(), Action::GoParent);
        }

        bindings.insert("/".to_string(), Action::Filter);

        // Export, one key per format code
        for code in FormatCode::ALL {
            bindings.insert(code.as_char().to_string(), Action::Export(code));
        }

        bindings.insert("q".to_string(), Action::Quit);

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// The file replaces the defaults entirely. Unknown action strings are
    /// silently ignored.
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
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    /// Loads `path`, falling back to the default bindings on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(keymap) => keymap,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring keymap file");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let bindings: HashMap<String, Action> = raw
            .bindings
            .into_iter()
            .filter_map(|(key, action_id)| {
                let action = registry.find_by_id(&action_id);
                if action.is_none() {
                    tracing::debug!(%key, %action_id, "unknown action in keymap");
                }
                action.map(|action| (key, action))
            })
            .collect();
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action, sorted.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    /// Returns `true` if any binding starts with `g` followed by more keys.
    pub fn has_g_prefix(&self) -> bool {
        self.bindings.keys().any(|k| k.len() > 1 && k.starts_with('g'))
    }
}
