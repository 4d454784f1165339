use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::ui::panel::render_listing;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function: listing on top, two status rows below.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(f.area());

    let navigator = app.navigator();
    let rows = navigator.visible_rows();
    render_listing(
        f,
        chunks[0],
        &rows,
        &app.header(),
        app.theme(),
        app.show_icons(),
    );

    let help = app.help_line();
    let props = StatusBarProps {
        visible_count: navigator.visible_len(),
        cursor: navigator.cursor(),
        filter_text: navigator.filter_text(),
        error: navigator.last_error().map(ToString::to_string),
        help: help.as_deref(),
    };
    render_statusbar(f, chunks[1], &props, app.theme());
}
