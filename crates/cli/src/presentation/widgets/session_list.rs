//! All sessions, newest first.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::session_date;
use crate::state::SessionListState;

pub fn render(frame: &mut Frame, area: Rect, state: &SessionListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    if state.sessions.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No sessions yet.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Sessions "),
        );
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = state
            .sessions
            .iter()
            .enumerate()
            .map(|(idx, session)| {
                let is_selected = idx == state.selected;
                let prefix = if is_selected { "► " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("Session for {}", session_date(session)),
                        if is_selected {
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Sessions "),
        );
        frame.render_widget(list, chunks[0]);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("ENTER", Style::default().fg(Color::Green)),
        Span::raw(" Open  "),
        Span::styled("ESC", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[1]);
}
