//! Finished game: board title and the scores per player.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::session_date;
use crate::state::GameDetailState;

pub fn render(frame: &mut Frame, area: Rect, state: &GameDetailState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Session for {}", session_date(&state.session)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Game of {}", state.board.name),
            Style::default().fg(Color::Cyan),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = state
        .rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(row.player.name.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!(": {}", row.value),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Players "),
    );
    frame.render_widget(list, chunks[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("ESC", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
