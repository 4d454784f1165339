use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cdplus_core::action::Action;
use cdplus_core::config::keymap::Keymap;
use cdplus_core::event::Event;
use cdplus_core::nav::navigator::Mode;

/// Tracks state for multi-key sequences like "gg".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pending_g: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self { pending_g: false }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_g
    }
}

/// Maps a key event to a navigator event based on the current mode.
/// Returns the event (if any) and a new InputState (immutable pattern).
///
/// While browsing, keys are resolved through the `Keymap`; Ctrl+C always
/// quits. While filtering, printable characters edit the filter and only
/// Esc, Enter, Backspace, the vertical arrows and Ctrl+C are special.
pub fn handle_key(
    key: KeyEvent,
    mode: &Mode,
    state: &InputState,
    keymap: &Keymap,
) -> (Option<Event>, InputState) {
    if is_ctrl_c(&key) {
        return (Some(Event::Action(Action::Quit)), InputState::new());
    }
    match mode {
        Mode::Browsing => handle_browsing_key(key, state, keymap),
        Mode::Filtering { .. } => (handle_filter_key(key), InputState::new()),
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// The keymap name of a key: `"Enter"`, `"Space"`, `"Left"`, `"q"`, ...
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        _ => return None,
    };
    Some(name)
}

fn handle_browsing_key(
    key: KeyEvent,
    state: &InputState,
    keymap: &Keymap,
) -> (Option<Event>, InputState) {
    let new_state = InputState::new();

    // Second key of a "g" sequence
    if state.pending_g {
        if key.code == KeyCode::Char('g') {
            let event = keymap.action_for_key("gg").map(Event::Action);
            return (event, new_state);
        }
        // Anything else abandons the sequence and is handled on its own.
    }

    if key.code == KeyCode::Char('g')
        && keymap.action_for_key("g").is_none()
        && keymap.has_g_prefix()
    {
        return (None, InputState { pending_g: true });
    }

    let event = key_name(&key)
        .and_then(|name| keymap.action_for_key(&name))
        .map(Event::Action);
    (event, new_state)
}

fn handle_filter_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Esc => Some(Event::FilterCancel),
        KeyCode::Enter => Some(Event::Action(Action::EnterDir)),
        KeyCode::Backspace => Some(Event::FilterBackspace),
        KeyCode::Up => Some(Event::Action(Action::CursorUp)),
        KeyCode::Down => Some(Event::Action(Action::CursorDown)),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Event::FilterChar(c))
        }
        _ => None,
    }
}
