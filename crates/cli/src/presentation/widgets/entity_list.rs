//! Player and board rosters with their hide/show toggle.
//!
//! The two screens are identical apart from their rows, so one renderer
//! serves both.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::state::{BoardListState, PlayerListState};

struct Row<'a> {
    name: &'a str,
    hidden: bool,
}

pub fn render_players(frame: &mut Frame, area: Rect, state: &PlayerListState) {
    let rows: Vec<Row> = state
        .players
        .iter()
        .map(|player| Row {
            name: &player.name,
            hidden: player.hidden,
        })
        .collect();
    render(frame, area, " Players ", &rows, state.selected);
}

pub fn render_boards(frame: &mut Frame, area: Rect, state: &BoardListState) {
    let rows: Vec<Row> = state
        .boards
        .iter()
        .map(|board| Row {
            name: &board.name,
            hidden: board.hidden,
        })
        .collect();
    render(frame, area, " Games ", &rows, state.selected);
}

fn render(frame: &mut Frame, area: Rect, title: &str, rows: &[Row], selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing here yet.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title.to_string()),
        );
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let is_selected = idx == selected;
                let prefix = if is_selected { "► " } else { "  " };
                let name_style = if row.hidden {
                    Style::default().fg(Color::DarkGray)
                } else if is_selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let mut spans = vec![
                    Span::styled(prefix, Style::default().fg(Color::Yellow)),
                    Span::styled(row.name.to_string(), name_style),
                ];
                if row.hidden {
                    spans.push(Span::styled(
                        "  (hidden)",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title.to_string()),
        );
        frame.render_widget(list, chunks[0]);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("ENTER", Style::default().fg(Color::Green)),
        Span::raw(" Hide/Show  "),
        Span::styled("ESC", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[1]);
}
