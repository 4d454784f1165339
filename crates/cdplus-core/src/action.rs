//! Unified action system for cdplus.
//!
//! Every key-bindable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides metadata (id, name, description, category)
//! used to resolve `keymap.toml` entries and to build the help line.

use crate::format::FormatCode;

/// Every key-bindable action.
///
/// Variants carry no runtime context; the navigator resolves the highlighted
/// entry when the action is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    EnterDir,
    GoParent,
    // Filter
    Filter,
    // Export
    Export(FormatCode),
    // System
    Quit,
}

/// Broad category for grouping actions in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Filter,
    Export,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Filter => "Filter",
            Self::Export => "Copy",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Cursor Up"`).
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let descriptors = vec![
            ActionDescriptor {
                action: Action::CursorUp,
                id: "cursor_up",
                name: "Cursor Up",
                description: "Move cursor up one entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorDown,
                id: "cursor_down",
                name: "Cursor Down",
                description: "Move cursor down one entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorTop,
                id: "go_first",
                name: "Go to First",
                description: "Jump to the first entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorBottom,
                id: "go_last",
                name: "Go to Last",
                description: "Jump to the last entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::EnterDir,
                id: "enter_dir",
                name: "Enter Directory",
                description: "Enter selected directory",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::GoParent,
                id: "go_parent",
                name: "Go Parent",
                description: "Navigate to parent directory",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::Filter,
                id: "filter",
                name: "Filter",
                description: "Filter entries by name",
                category: ActionCategory::Filter,
            },
            ActionDescriptor {
                action: Action::Export(FormatCode::BaseName),
                id: "copy_name",
                name: "Copy Name",
                description: "Copy the file name and exit",
                category: ActionCategory::Export,
            },
            ActionDescriptor {
                action: Action::Export(FormatCode::Relative),
                id: "copy_relative",
                name: "Copy Relative Path",
                description: "Copy the path relative to the start directory and exit",
                category: ActionCategory::Export,
            },
            ActionDescriptor {
                action: Action::Export(FormatCode::Absolute),
                id: "copy_absolute",
                name: "Copy Absolute Path",
                description: "Copy the absolute path and exit",
                category: ActionCategory::Export,
            },
            ActionDescriptor {
                action: Action::Export(FormatCode::Directory),
                id: "copy_directory",
                name: "Copy Directory",
                description: "Copy the containing directory and exit",
                category: ActionCategory::Export,
            },
            ActionDescriptor {
                action: Action::Export(FormatCode::HomeRelative),
                id: "copy_home",
                name: "Copy Home-Relative Directory",
                description: "Copy the directory under the home placeholder and exit",
                category: ActionCategory::Export,
            },
            ActionDescriptor {
                action: Action::Quit,
                id: "quit",
                name: "Quit",
                description: "Exit without copying",
                category: ActionCategory::System,
            },
        ];
        Self { descriptors }
    }

    /// Returns all descriptors.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Returns the descriptors in `category`, in registry order.
    pub fn in_category(&self, category: ActionCategory) -> impl Iterator<Item = &ActionDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.category == category)
    }

    /// Finds an action by its string id (for keymap.toml parsing).
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for a given action.
    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
