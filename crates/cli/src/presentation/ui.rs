//! Screen-routed rendering.
//!
//! One entry point composes the frame: the shared title bar, the widget for
//! whatever screen navigation points at, and the status log. The download
//! dump is the exception and replaces the whole frame.
use anyhow::Result;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::message::{MessageLevel, MessageLog};
use crate::presentation::{terminal::Tui, widgets};
use crate::state::Screen;

/// Everything a frame needs, borrowed from the application.
pub struct RenderContext<'a> {
    pub screen: &'a Screen,
    pub messages: &'a MessageLog,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        if let Screen::Download(state) = ctx.screen {
            widgets::download::render(frame, frame.area(), state);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Screen body
                Constraint::Length(4), // Status log
            ])
            .split(frame.area());

        render_title(frame, chunks[0]);

        match ctx.screen {
            Screen::Menu(state) => widgets::menu::render(frame, chunks[1], state),
            Screen::SessionDetail(state) => {
                widgets::session_detail::render(frame, chunks[1], state)
            }
            Screen::NewGame(state) => widgets::new_game::render(frame, chunks[1], state),
            Screen::GameDetail(state) => widgets::game_detail::render(frame, chunks[1], state),
            Screen::SessionList(state) => widgets::session_list::render(frame, chunks[1], state),
            Screen::PlayerList(state) => widgets::entity_list::render_players(frame, chunks[1], state),
            Screen::BoardList(state) => widgets::entity_list::render_boards(frame, chunks[1], state),
            Screen::Download(_) => unreachable!("download is rendered full-frame above"),
        }

        render_status_log(frame, chunks[2], ctx.messages);
    })?;

    Ok(())
}

fn render_title(frame: &mut ratatui::Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Personal Boardgame Logbook",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_status_log(frame: &mut ratatui::Frame, area: Rect, messages: &MessageLog) {
    let lines: Vec<Line> = messages
        .recent(2)
        .map(|entry| {
            let style = match entry.level {
                MessageLevel::Info => Style::default().fg(Color::White),
                MessageLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(entry.text.clone(), style))
        })
        .collect();

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Status "),
    );

    frame.render_widget(log, area);
}
