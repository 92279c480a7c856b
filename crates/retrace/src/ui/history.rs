//! History list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use retrace_tictactoe::Snapshot;

/// Renders the jump list. The displayed snapshot is bold.
pub fn render_history(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let order = if *snapshot.sort_descending() { "newest first" } else { "oldest first" };
    let border = match app.focus() {
        Focus::History => Color::Cyan,
        Focus::Board => Color::DarkGray,
    };

    let items: Vec<ListItem> = snapshot
        .history_entries()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", entry.ordinal() + 1, entry.label())).style(style)
        })
        .collect();

    let selected = snapshot
        .history_entries()
        .iter()
        .position(|entry| *entry.ordinal() == app.selected_ordinal());
    let mut state = ListState::default().with_selected(match app.focus() {
        Focus::History => selected,
        Focus::Board => None,
    });

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!("History ({})", order)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state);
}
