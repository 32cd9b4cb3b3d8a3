//! Full-frame export dump for copy-out.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::DownloadState;

pub fn render(frame: &mut Frame, area: Rect, state: &DownloadState) {
    match &state.data {
        None => {
            let waiting = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Preparing your download...",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Download "),
            );
            frame.render_widget(waiting, area);
        }
        Some(data) => {
            let dump = Paragraph::new(data.as_str())
                .scroll((state.scroll, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title(" Download (↑/↓ scroll, copy out with your terminal) "),
                );
            frame.render_widget(dump, area);
        }
    }
}
