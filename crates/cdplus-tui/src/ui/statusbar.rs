//! Bottom status area.
//!
//! Two rows under the listing: the first shows the filter prompt or the last
//! read error, the second the position counter and the help line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use cdplus_core::config::theme::{parse_color, Theme};

/// Data needed to render the status area.
pub struct StatusBarProps<'a> {
    pub visible_count: usize,
    pub cursor: usize,
    pub filter_text: Option<&'a str>,
    pub error: Option<String>,
    pub help: Option<&'a str>,
}

/// Renders the filter/error row and the position/help row.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let lines = vec![message_line(props, theme), help_line(props, theme)];
    f.render_widget(Paragraph::new(lines), area);
}

fn message_line(props: &StatusBarProps<'_>, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(text) = props.filter_text {
        spans.push(Span::styled(
            format!("Filter: {text}_"),
            Style::default()
                .fg(parse_color(&theme.statusbar.filter_fg))
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(error) = &props.error {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(parse_color(&theme.statusbar.error_fg)),
        ));
    }
    Line::from(spans)
}

fn help_line(props: &StatusBarProps<'_>, theme: &Theme) -> Line<'static> {
    let help_style = Style::default().fg(parse_color(&theme.statusbar.help_fg));
    let mut spans = vec![Span::styled(position_text(props), help_style)];
    if let Some(help) = props.help {
        spans.push(Span::styled(format!("  {help}"), help_style));
    }
    Line::from(spans)
}

fn position_text(props: &StatusBarProps<'_>) -> String {
    if props.visible_count > 0 {
        format!("{}/{}", props.cursor + 1, props.visible_count)
    } else {
        "0/0".to_owned()
    }
}
