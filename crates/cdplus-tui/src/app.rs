use std::path::{Path, PathBuf};

use cdplus_core::action::{Action, ActionCategory, ActionRegistry};
use cdplus_core::config::keymap::Keymap;
use cdplus_core::config::settings::Config;
use cdplus_core::config::theme::Theme;
use cdplus_core::config::Settings;
use cdplus_core::error::ReadFailure;
use cdplus_core::event::{Command, Event};
use cdplus_core::fs::ops::DirectoryReader;
use cdplus_core::nav::navigator::NavigatorState;

pub const WINDOW_TITLE: &str = "cdplus - Interactive Directory Navigator";

/// Frontend state: the navigator plus everything loaded at startup.
#[derive(Debug, Clone)]
pub struct App {
    navigator: NavigatorState,
    /// Directory the session started in; relative exports are based on it.
    initial_dir: PathBuf,
    config: Config,
    keymap: Keymap,
    theme: Theme,
    registry: ActionRegistry,
}

impl App {
    /// Reads `start_dir` and builds the initial application state.
    pub fn new(
        start_dir: &Path,
        reader: &dyn DirectoryReader,
        settings: Settings,
    ) -> Result<Self, ReadFailure> {
        let navigator = NavigatorState::open(start_dir.to_path_buf(), reader)?;
        Ok(Self::from_navigator(navigator, settings))
    }

    pub fn from_navigator(navigator: NavigatorState, settings: Settings) -> Self {
        let initial_dir = navigator.current_path().to_path_buf();
        Self {
            navigator,
            initial_dir,
            config: settings.config,
            keymap: settings.keymap,
            theme: settings.theme,
            registry: ActionRegistry::new(),
        }
    }

    pub fn navigator(&self) -> &NavigatorState {
        &self.navigator
    }

    pub fn initial_dir(&self) -> &Path {
        &self.initial_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_icons(&self) -> bool {
        self.config.ui.show_icons
    }

    pub fn should_quit(&self) -> bool {
        self.navigator.is_finished()
    }

    /// Feeds one event to the navigator.
    pub fn with_event(self, event: Event) -> (Self, Option<Command>) {
        let (navigator, command) = self.navigator.update(event);
        (Self { navigator, ..self }, command)
    }

    /// Header line: the current directory.
    pub fn header(&self) -> String {
        cdplus_core::nfc_string(&self.navigator.current_path().to_string_lossy())
    }

    /// Help line listing the export keys, e.g. `f (file) • r (relative) • ...`.
    ///
    /// Returns `None` when disabled in the config or when no export key is bound.
    pub fn help_line(&self) -> Option<String> {
        if !self.config.ui.show_help {
            return None;
        }
        let parts: Vec<String> = self
            .registry
            .in_category(ActionCategory::Export)
            .filter_map(|desc| {
                let Action::Export(code) = desc.action else {
                    return None;
                };
                let key = self.keymap.keys_for_action(desc.action)?.first()?;
                Some(format!("{key} ({})", code.label()))
            })
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(format!(
            "{}: {}",
            ActionCategory::Export.label(),
            parts.join(" \u{2022} ")
        ))
    }
}
