//! The navigation state machine.
//!
//! [`NavigatorState`] is an immutable value: [`NavigatorState::update`]
//! consumes the current state and an [`Event`] and returns the next state
//! plus at most one [`Command`]. The frontend owns the only copy and
//! replaces it on every event.

use std::path::{Path, PathBuf};

use crate::action::Action;
use crate::error::ReadFailure;
use crate::event::{Command, Event};
use crate::format::FormatCode;
use crate::fs::entry::{Entry, IconClass};
use crate::fs::ops::DirectoryReader;
use crate::nav::filter::visible_indices;
use crate::nav::listing::Listing;

/// Browsing shows the whole listing; filtering shows the rows whose names
/// contain `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Filtering {
        text: String,
        /// Listing indices of the matching rows, in listing order.
        visible: Vec<usize>,
    },
}

/// The selection captured when an export key is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExport {
    pub format: FormatCode,
    /// Absolute path of the highlighted entry at key-press time.
    pub selected: PathBuf,
}

/// One row handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub entry: &'a Entry,
    pub icon: IconClass,
    pub highlighted: bool,
}

/// Complete navigator state.
///
/// Invariants:
/// - `cursor` indexes the visible rows whenever there are any.
/// - `current_path` and `listing` only change on a successful read.
/// - `pending_export` is set only together with `finished`.
#[derive(Debug, Clone)]
pub struct NavigatorState {
    current_path: PathBuf,
    listing: Listing,
    cursor: usize,
    mode: Mode,
    last_error: Option<ReadFailure>,
    pending_export: Option<PendingExport>,
    finished: bool,
}

impl NavigatorState {
    /// Creates a browsing state for `path` from its raw directory entries.
    pub fn new(path: PathBuf, entries: Vec<Entry>) -> Self {
        Self {
            current_path: path,
            listing: Listing::build(entries),
            cursor: 0,
            mode: Mode::Browsing,
            last_error: None,
            pending_export: None,
            finished: false,
        }
    }

    /// Reads `path` synchronously with `reader` and builds the initial state.
    ///
    /// # Errors
    ///
    /// Returns the [`ReadFailure`] if the start directory cannot be listed.
    pub fn open(path: PathBuf, reader: &dyn DirectoryReader) -> Result<Self, ReadFailure> {
        let entries = reader.read(&path)?;
        Ok(Self::new(path, entries))
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Index of the highlighted row within the visible rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The filter text, or `None` while browsing.
    pub fn filter_text(&self) -> Option<&str> {
        match &self.mode {
            Mode::Browsing => None,
            Mode::Filtering { text, .. } => Some(text),
        }
    }

    pub fn last_error(&self) -> Option<&ReadFailure> {
        self.last_error.as_ref()
    }

    pub fn pending_export(&self) -> Option<&PendingExport> {
        self.pending_export.as_ref()
    }

    /// `true` once a quit or export key has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of rows currently shown.
    pub fn visible_len(&self) -> usize {
        match &self.mode {
            Mode::Browsing => self.listing.len(),
            Mode::Filtering { visible, .. } => visible.len(),
        }
    }

    /// Maps a visible row index to its listing index.
    fn listing_index(&self, row: usize) -> Option<usize> {
        match &self.mode {
            Mode::Browsing => (row < self.listing.len()).then_some(row),
            Mode::Filtering { visible, .. } => visible.get(row).copied(),
        }
    }

    /// The highlighted entry, or `None` when no row is visible.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.listing_index(self.cursor)
            .and_then(|i| self.listing.get(i))
    }

    /// Path of the highlighted entry.
    ///
    /// The parent marker, or an empty selection, stands for the current
    /// directory itself.
    pub fn selected_path(&self) -> PathBuf {
        match self.selected_entry() {
            Some(entry @ Entry::Real { .. }) => self.current_path.join(entry.file_name()),
            Some(Entry::ParentMarker) | None => self.current_path.clone(),
        }
    }

    /// The rows to render, in display order.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        (0..self.visible_len())
            .filter_map(|row| {
                let entry = self.listing.get(self.listing_index(row)?)?;
                Some(VisibleRow {
                    entry,
                    icon: entry.icon_class(),
                    highlighted: row == self.cursor,
                })
            })
            .collect()
    }

    /// Processes one event and returns the next state and an optional command.
    ///
    /// Events arriving after the navigator has finished are ignored.
    pub fn update(self, event: Event) -> (Self, Option<Command>) {
        if self.finished {
            return (self, None);
        }

        match event {
            Event::Action(action) => self.apply_action(action),
            Event::FilterChar(c) => (self.edit_filter(|text| text.push(c)), None),
            Event::FilterBackspace => (
                self.edit_filter(|text| {
                    text.pop();
                }),
                None,
            ),
            Event::FilterCancel => (self.cancel_filter(), None),
            Event::DirectoryLoaded { path, entries } => (self.with_directory(path, entries), None),
            Event::DirectoryFailed(failure) => (self.with_failure(failure), None),
        }
    }

    fn apply_action(self, action: Action) -> (Self, Option<Command>) {
        let browsing = matches!(self.mode, Mode::Browsing);
        match action {
            Action::CursorUp => (self.move_up(), None),
            Action::CursorDown => (self.move_down(), None),
            Action::CursorTop => (self.with_cursor(0), None),
            Action::CursorBottom => {
                let last = self.visible_len().saturating_sub(1);
                (self.with_cursor(last), None)
            }
            Action::EnterDir => {
                let command = self.descend_target().map(Command::ReadDirectory);
                if let Some(Command::ReadDirectory(path)) = &command {
                    tracing::debug!(path = %path.display(), "requesting directory read");
                }
                (self, command)
            }
            Action::GoParent if browsing => {
                let parent = self.parent_path();
                tracing::debug!(path = %parent.display(), "requesting parent read");
                (self, Some(Command::ReadDirectory(parent)))
            }
            Action::Filter if browsing => {
                let visible = visible_indices(&self.listing, "");
                let state = Self {
                    mode: Mode::Filtering {
                        text: String::new(),
                        visible,
                    },
                    ..self
                };
                (state, None)
            }
            Action::Export(format) if browsing => {
                let selected = self.selected_path();
                tracing::debug!(%format, path = %selected.display(), "export requested");
                let state = Self {
                    pending_export: Some(PendingExport { format, selected }),
                    finished: true,
                    ..self
                };
                (state, None)
            }
            Action::Quit => (
                Self {
                    finished: true,
                    ..self
                },
                None,
            ),
            Action::GoParent | Action::Filter | Action::Export(_) => (self, None),
        }
    }

    fn move_up(self) -> Self {
        if self.cursor == 0 {
            return self;
        }
        let index = self.cursor - 1;
        self.with_cursor(index)
    }

    fn move_down(self) -> Self {
        let index = self.cursor + 1;
        if index >= self.visible_len() {
            return self;
        }
        self.with_cursor(index)
    }

    /// Moves the cursor to `index`, clamped to the visible rows.
    fn with_cursor(self, index: usize) -> Self {
        let len = self.visible_len();
        let cursor = if len == 0 { 0 } else { index.min(len - 1) };
        Self { cursor, ..self }
    }

    /// Target of a descend on the highlighted row, if it is a directory.
    fn descend_target(&self) -> Option<PathBuf> {
        match self.selected_entry()? {
            Entry::ParentMarker => Some(self.parent_path()),
            entry @ Entry::Real { is_dir: true, .. } => {
                Some(self.current_path.join(entry.file_name()))
            }
            Entry::Real { is_dir: false, .. } => None,
        }
    }

    /// Parent of the current directory; a root is its own parent.
    fn parent_path(&self) -> PathBuf {
        self.current_path
            .parent()
            .unwrap_or(&self.current_path)
            .to_path_buf()
    }

    fn edit_filter(self, edit: impl FnOnce(&mut String)) -> Self {
        let Mode::Filtering { mut text, .. } = self.mode.clone() else {
            return self;
        };
        let previous = self.listing_index(self.cursor);

        edit(&mut text);
        let visible = visible_indices(&self.listing, &text);
        let cursor = previous
            .and_then(|prev| visible.iter().position(|&i| i == prev))
            .unwrap_or(0);

        Self {
            mode: Mode::Filtering { text, visible },
            cursor,
            ..self
        }
    }

    fn cancel_filter(self) -> Self {
        if matches!(self.mode, Mode::Browsing) {
            return self;
        }
        let cursor = self.listing_index(self.cursor).unwrap_or(0);
        Self {
            mode: Mode::Browsing,
            cursor,
            ..self
        }
    }

    fn with_directory(self, path: PathBuf, entries: Vec<Entry>) -> Self {
        tracing::debug!(path = %path.display(), count = entries.len(), "directory loaded");
        Self {
            current_path: path,
            listing: Listing::build(entries),
            cursor: 0,
            mode: Mode::Browsing,
            last_error: None,
            ..self
        }
    }

    fn with_failure(self, failure: ReadFailure) -> Self {
        tracing::warn!(error = %failure, "directory read failed");
        Self {
            last_error: Some(failure),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::fs::ops::LocalReader;

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::real("b.txt", false),
            Entry::real("src", true),
            Entry::real("a.txt", false),
            Entry::real("docs", true),
        ]
    }

    fn sample() -> NavigatorState {
        NavigatorState::new(PathBuf::from("/work/project"), sample_entries())
    }

    fn act(state: NavigatorState, action: Action) -> (NavigatorState, Option<Command>) {
        state.update(Event::Action(action))
    }

    fn step(state: NavigatorState, event: Event) -> NavigatorState {
        state.update(event).0
    }

    fn visible_names(state: &NavigatorState) -> Vec<String> {
        state
            .visible_rows()
            .iter()
            .map(|r| r.entry.name().to_string())
            .collect()
    }

    fn type_filter(mut state: NavigatorState, text: &str) -> NavigatorState {
        state = step(state, Event::Action(Action::Filter));
        for c in text.chars() {
            state = step(state, Event::FilterChar(c));
        }
        state
    }

    #[test]
    fn new_state_is_browsing_at_cursor_zero() {
        let state = sample();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.mode(), &Mode::Browsing);
        assert!(state.last_error().is_none());
        assert!(!state.is_finished());
        assert!(state.selected_entry().unwrap().is_parent_marker());
        assert_eq!(visible_names(&state), vec!["..", "docs", "src", "a.txt", "b.txt"]);
    }

    #[test]
    fn cursor_up_at_top_is_noop() {
        let (state, cmd) = act(sample(), Action::CursorUp);
        assert_eq!(state.cursor(), 0);
        assert!(cmd.is_none());
    }

    #[test]
    fn cursor_down_stops_at_last() {
        let mut state = sample();
        for _ in 0..10 {
            state = act(state, Action::CursorDown).0;
        }
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.selected_entry().unwrap().name(), "b.txt");
    }

    #[test]
    fn cursor_top_and_bottom() {
        let state = act(sample(), Action::CursorBottom).0;
        assert_eq!(state.cursor(), 4);
        let state = act(state, Action::CursorTop).0;
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds_for_any_sequence() {
        let mut state = sample();
        let len = state.visible_len();
        // Deterministic mixed sequence of ups and downs.
        for i in 0..200u32 {
            let action = if (i * 7 + 3) % 5 < 3 {
                Action::CursorDown
            } else {
                Action::CursorUp
            };
            state = act(state, action).0;
            assert!(state.cursor() < len);
        }
    }

    #[test]
    fn enter_on_file_is_noop() {
        let state = act(sample(), Action::CursorBottom).0;
        let (state, cmd) = act(state, Action::EnterDir);
        assert!(cmd.is_none());
        assert_eq!(state.current_path(), Path::new("/work/project"));
    }

    #[test]
    fn enter_on_directory_requests_read() {
        let state = act(sample(), Action::CursorDown).0;
        let (_, cmd) = act(state, Action::EnterDir);
        assert_eq!(
            cmd,
            Some(Command::ReadDirectory(PathBuf::from("/work/project/docs")))
        );
    }

    #[test]
    fn enter_on_parent_marker_requests_parent() {
        let (_, cmd) = act(sample(), Action::EnterDir);
        assert_eq!(cmd, Some(Command::ReadDirectory(PathBuf::from("/work"))));
    }

    #[test]
    fn go_parent_ignores_cursor() {
        let state = act(sample(), Action::CursorBottom).0;
        let (_, cmd) = act(state, Action::GoParent);
        assert_eq!(cmd, Some(Command::ReadDirectory(PathBuf::from("/work"))));
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_root_is_root() {
        let state = NavigatorState::new(PathBuf::from("/"), vec![]);
        let (_, cmd) = act(state, Action::EnterDir);
        assert_eq!(cmd, Some(Command::ReadDirectory(PathBuf::from("/"))));
    }

    #[test]
    fn request_does_not_change_state_until_result() {
        let state = act(sample(), Action::CursorDown).0;
        let (state, _) = act(state, Action::EnterDir);
        assert_eq!(state.current_path(), Path::new("/work/project"));
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn directory_loaded_replaces_listing() {
        let state = act(sample(), Action::CursorBottom).0;
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: PathBuf::from("/work/project/src"),
                entries: vec![Entry::real("main.rs", false)],
            },
        );
        assert_eq!(state.current_path(), Path::new("/work/project/src"));
        assert_eq!(state.cursor(), 0);
        assert_eq!(visible_names(&state), vec!["..", "main.rs"]);
    }

    #[test]
    fn failed_read_keeps_path_and_listing() {
        let before = act(sample(), Action::CursorDown).0;
        let failure = ReadFailure::PermissionDenied(PathBuf::from("/work/project/docs"));
        let after = step(before.clone(), Event::DirectoryFailed(failure.clone()));

        assert_eq!(after.current_path(), before.current_path());
        assert_eq!(after.listing(), before.listing());
        assert_eq!(after.cursor(), before.cursor());
        assert_eq!(after.last_error(), Some(&failure));
        assert!(!after.last_error().unwrap().to_string().is_empty());
    }

    #[test]
    fn successful_read_clears_error() {
        let state = step(
            sample(),
            Event::DirectoryFailed(ReadFailure::NotFound(PathBuf::from("/x"))),
        );
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: PathBuf::from("/work"),
                entries: vec![],
            },
        );
        assert!(state.last_error().is_none());
    }

    #[test]
    fn descend_then_parent_round_trip() {
        let start = sample();
        let original_listing = start.listing().clone();

        let state = act(start, Action::CursorDown).0;
        let (state, cmd) = act(state, Action::EnterDir);
        let Some(Command::ReadDirectory(target)) = cmd else {
            panic!("expected a read command");
        };
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: target,
                entries: vec![Entry::real("guide.md", false)],
            },
        );

        let (state, cmd) = act(state, Action::EnterDir);
        let Some(Command::ReadDirectory(back)) = cmd else {
            panic!("expected a read command");
        };
        assert_eq!(back, PathBuf::from("/work/project"));
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: back,
                entries: sample_entries(),
            },
        );

        assert_eq!(state.current_path(), Path::new("/work/project"));
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.listing(), &original_listing);
    }

    #[test]
    fn last_arriving_result_wins() {
        let state = step(
            sample(),
            Event::DirectoryLoaded {
                path: PathBuf::from("/b"),
                entries: vec![Entry::real("from_b", false)],
            },
        );
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: PathBuf::from("/a"),
                entries: vec![Entry::real("from_a", false)],
            },
        );
        assert_eq!(state.current_path(), Path::new("/a"));
        assert_eq!(visible_names(&state), vec!["..", "from_a"]);
    }

    #[test]
    fn quit_finishes_without_export() {
        let (state, cmd) = act(sample(), Action::Quit);
        assert!(state.is_finished());
        assert!(state.pending_export().is_none());
        assert!(cmd.is_none());
    }

    #[test]
    fn export_captures_highlighted_entry() {
        let state = act(sample(), Action::CursorBottom).0;
        let (state, _) = act(state, Action::Export(FormatCode::Absolute));
        assert!(state.is_finished());
        assert_eq!(
            state.pending_export(),
            Some(&PendingExport {
                format: FormatCode::Absolute,
                selected: PathBuf::from("/work/project/b.txt"),
            })
        );
    }

    #[test]
    fn export_on_parent_marker_selects_current_dir() {
        let (state, _) = act(sample(), Action::Export(FormatCode::BaseName));
        assert_eq!(
            state.pending_export().unwrap().selected,
            PathBuf::from("/work/project")
        );
    }

    #[test]
    fn events_after_finish_are_ignored() {
        let (state, _) = act(sample(), Action::Export(FormatCode::Relative));
        let (state, cmd) = act(state, Action::EnterDir);
        assert!(cmd.is_none());
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: PathBuf::from("/elsewhere"),
                entries: vec![],
            },
        );
        assert_eq!(state.current_path(), Path::new("/work/project"));
        assert_eq!(state.pending_export().unwrap().format, FormatCode::Relative);
    }

    #[test]
    fn filter_starts_empty_and_shows_everything() {
        let state = act(sample(), Action::CursorDown).0;
        let state = act(state, Action::Filter).0;
        assert_eq!(state.filter_text(), Some(""));
        assert_eq!(state.visible_len(), 5);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn filter_narrows_by_substring() {
        let state = type_filter(sample(), ".txt");
        assert_eq!(visible_names(&state), vec!["a.txt", "b.txt"]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn filter_preserves_highlight_when_still_matching() {
        let state = act(sample(), Action::CursorBottom).0; // b.txt
        let state = type_filter(state, "txt");
        assert_eq!(state.selected_entry().unwrap().name(), "b.txt");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn filter_resets_cursor_when_highlight_drops_out() {
        let state = act(sample(), Action::CursorDown).0; // docs
        let state = type_filter(state, "src");
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.selected_entry().unwrap().name(), "src");
    }

    #[test]
    fn filter_backspace_widens() {
        let state = type_filter(sample(), "a.t");
        assert_eq!(visible_names(&state), vec!["a.txt"]);
        let state = step(state, Event::FilterBackspace);
        let state = step(state, Event::FilterBackspace);
        assert_eq!(state.filter_text(), Some("a"));
        assert_eq!(visible_names(&state), vec!["a.txt", "b.txt"]);
        // Still highlighting a.txt.
        assert_eq!(state.selected_entry().unwrap().name(), "a.txt");
    }

    #[test]
    fn filter_backspace_on_empty_text_is_harmless() {
        let state = type_filter(sample(), "");
        let state = step(state, Event::FilterBackspace);
        assert_eq!(state.filter_text(), Some(""));
    }

    #[test]
    fn filter_with_no_matches_has_no_selection() {
        let state = type_filter(sample(), "zzz");
        assert_eq!(state.visible_len(), 0);
        assert!(state.selected_entry().is_none());
        assert!(state.visible_rows().is_empty());

        let (state, cmd) = act(state, Action::EnterDir);
        assert!(cmd.is_none());
        let state = act(state, Action::CursorDown).0;
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cancel_restores_full_listing() {
        let before = sample();
        let listing = before.listing().clone();
        let state = type_filter(before, "zzz");
        let state = step(state, Event::FilterCancel);
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.listing(), &listing);
        assert_eq!(state.visible_len(), listing.len());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cancel_maps_cursor_back_to_listing() {
        let state = type_filter(sample(), ".txt");
        let state = act(state, Action::CursorDown).0; // b.txt
        let state = step(state, Event::FilterCancel);
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.selected_entry().unwrap().name(), "b.txt");
    }

    #[test]
    fn enter_while_filtering_descends_and_resets_mode() {
        let state = type_filter(sample(), "src");
        let (state, cmd) = act(state, Action::EnterDir);
        assert_eq!(
            cmd,
            Some(Command::ReadDirectory(PathBuf::from("/work/project/src")))
        );
        let state = step(
            state,
            Event::DirectoryLoaded {
                path: PathBuf::from("/work/project/src"),
                entries: vec![Entry::real("lib.rs", false)],
            },
        );
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(visible_names(&state), vec!["..", "lib.rs"]);
    }

    #[test]
    fn failed_read_while_filtering_keeps_filter() {
        let state = type_filter(sample(), "s");
        let state = step(
            state,
            Event::DirectoryFailed(ReadFailure::NotFound(PathBuf::from("/work/project/src"))),
        );
        assert_eq!(state.filter_text(), Some("s"));
        assert!(state.last_error().is_some());
    }

    #[test]
    fn export_keys_ignored_while_filtering() {
        let state = type_filter(sample(), "a");
        let (state, _) = act(state, Action::Export(FormatCode::Absolute));
        assert!(!state.is_finished());
        let (state, cmd) = act(state, Action::GoParent);
        assert!(cmd.is_none());
        assert_eq!(state.filter_text(), Some("a"));
    }

    #[test]
    fn quit_works_while_filtering() {
        let state = type_filter(sample(), "a");
        let (state, _) = act(state, Action::Quit);
        assert!(state.is_finished());
        assert!(state.pending_export().is_none());
    }

    #[test]
    fn filter_chars_ignored_while_browsing() {
        let state = step(sample(), Event::FilterChar('x'));
        assert_eq!(state.mode(), &Mode::Browsing);
        assert_eq!(state.visible_len(), 5);
    }

    #[test]
    fn visible_rows_mark_highlight_and_icons() {
        let state = act(sample(), Action::CursorDown).0;
        let rows = state.visible_rows();
        assert_eq!(rows[0].icon, IconClass::ParentMarker);
        assert_eq!(rows[1].icon, IconClass::Directory);
        assert_eq!(rows[4].icon, IconClass::File);
        assert!(rows[1].highlighted);
        assert_eq!(rows.iter().filter(|r| r.highlighted).count(), 1);
    }

    #[test]
    fn open_reads_start_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("inner")).unwrap();
        fs::write(tmp.path().join("file.txt"), "").unwrap();

        let state = NavigatorState::open(tmp.path().to_path_buf(), &LocalReader).unwrap();
        assert_eq!(visible_names(&state), vec!["..", "inner", "file.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_directory_can_be_entered_and_exported() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9");
        if fs::create_dir(tmp.path().join(raw)).is_err() {
            return;
        }
        let expected = tmp.path().join(raw);

        let state = NavigatorState::open(tmp.path().to_path_buf(), &LocalReader).unwrap();
        let state = act(state, Action::CursorDown).0;
        assert_eq!(state.selected_path(), expected);

        let (state, cmd) = act(state, Action::EnterDir);
        assert_eq!(cmd, Some(Command::ReadDirectory(expected.clone())));
        assert!(LocalReader.read(&expected).is_ok());

        let (state, _) = act(state, Action::Export(FormatCode::Absolute));
        assert_eq!(state.pending_export().unwrap().selected, expected);
    }

    #[test]
    fn open_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        let err = NavigatorState::open(missing.clone(), &LocalReader).unwrap_err();
        assert_eq!(err, ReadFailure::NotFound(missing));
    }
}
