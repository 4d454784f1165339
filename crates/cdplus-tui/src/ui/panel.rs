//! Listing panel rendering with theme support.
//!
//! Renders the visible rows as a scrollable `List` widget. Directories and
//! the parent marker get their own colors; the highlighted row is reversed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use cdplus_core::config::theme::{parse_color, Theme};
use cdplus_core::fs::entry::IconClass;
use cdplus_core::nav::navigator::VisibleRow;
use cdplus_core::nfc_string;

use crate::icons::{icon_for, plain_prefix};

/// Renders the listing inside a bordered block titled with the current path.
pub fn render_listing(
    f: &mut Frame,
    area: Rect,
    rows: &[VisibleRow<'_>],
    title: &str,
    theme: &Theme,
    show_icons: bool,
) {
    let selected_color = parse_color(&theme.panel.selected_fg);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(Line::from(row_span(row, theme, show_icons))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_owned())
                .title_style(Style::default().fg(parse_color(&theme.panel.header_fg)))
                .border_style(Style::default().fg(selected_color)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(selected_color),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(rows.iter().position(|r| r.highlighted));

    f.render_stateful_widget(list, area, &mut state);
}

fn row_span(row: &VisibleRow<'_>, theme: &Theme, show_icons: bool) -> Span<'static> {
    let prefix = if show_icons {
        icon_for(row.icon)
    } else {
        plain_prefix(row.icon)
    };
    let display = format!("{prefix}{}", nfc_string(row.entry.name()));
    Span::styled(display, entry_style(row.icon, theme))
}

fn entry_style(icon: IconClass, theme: &Theme) -> Style {
    match icon {
        IconClass::Directory => Style::default()
            .fg(parse_color(&theme.panel.dir_fg))
            .add_modifier(Modifier::BOLD),
        IconClass::ParentMarker => Style::default().fg(parse_color(&theme.panel.parent_fg)),
        IconClass::File => Style::default().fg(parse_color(&theme.panel.file_fg)),
    }
}
