//! Session detail: date header plus the games played, in order.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::session_date;
use crate::state::SessionDetailState;

pub fn render(frame: &mut Frame, area: Rect, state: &SessionDetailState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        format!("Session for {}", session_date(&state.session)),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, chunks[0]);

    if state.games.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No games recorded yet. Press N to start one.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Games "),
        );
        frame.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = state
            .games
            .iter()
            .enumerate()
            .map(|(idx, game)| {
                let is_selected = idx == state.selected;
                let prefix = if is_selected { "► " } else { "  " };
                let board_name = state
                    .boards
                    .get(&game.board)
                    .map(|board| board.name.as_str())
                    .unwrap_or("?");
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("{}. {board_name}", idx + 1),
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
                .title(" Games "),
        );
        frame.render_widget(list, chunks[1]);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("N", Style::default().fg(Color::Green)),
        Span::raw(" New Game  "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("ENTER", Style::default().fg(Color::Green)),
        Span::raw(" Open Game  "),
        Span::styled("ESC", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
