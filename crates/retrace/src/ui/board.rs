//! Board grid rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use retrace_tictactoe::{Cell, Player, Snapshot};

/// Renders the board, highlighting the winning line and the cursor.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let side = *snapshot.side();
    let board_area = center_rect(inner, (side * 6) as u16, (side * 2) as u16);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); side])
        .split(board_area);

    for (line, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(6); side])
            .split(*row_area);
        for (offset, cell_area) in cols.iter().enumerate() {
            render_cell(f, *cell_area, app, snapshot, line * side + offset);
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot, pos: usize) {
    let cell = snapshot.cells().get(pos).copied().unwrap_or(Cell::Empty);
    let (text, mut style) = match cell {
        Cell::Empty => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot
        .winning_positions()
        .as_ref()
        .is_some_and(|line| line.contains(&pos))
    {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(format!("[{}]", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
