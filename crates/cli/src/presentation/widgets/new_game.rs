//! New-game form: board picker first, then roster and score entry.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::state::{NewGameFocus, NewGameState};

pub fn render(frame: &mut Frame, area: Rect, state: &NewGameState) {
    if state.board.is_none() {
        render_board_picker(frame, area, state);
    } else {
        render_roster_phase(frame, area, state);
    }
}

fn render_board_picker(frame: &mut Frame, area: Rect, state: &NewGameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        "New Game: choose a boardgame (or type a name to create it)",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, chunks[0]);

    frame.render_widget(filter_input(&state.board_filter), chunks[1]);

    let boards = state.filtered_boards();
    let items: Vec<ListItem> = boards
        .iter()
        .enumerate()
        .map(|(idx, board)| {
            let is_selected = idx == state.board_cursor;
            let prefix = if is_selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(
                    board.name.clone(),
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
            .title(" Boardgames "),
    );
    frame.render_widget(list, chunks[2]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("ENTER", Style::default().fg(Color::Green)),
        Span::raw(" Choose  "),
        Span::styled("Ctrl+N", Style::default().fg(Color::Cyan)),
        Span::raw(" Create from input  "),
        Span::styled("ESC", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}

fn render_roster_phase(frame: &mut Frame, area: Rect, state: &NewGameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        format!("New Game of {}", state.board_name().unwrap_or("?")),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_roster_pane(frame, panes[0], state);
    render_picker_pane(frame, panes[1], state);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("TAB", Style::default().fg(Color::Yellow)),
        Span::raw(" Switch pane  "),
        Span::styled("ENTER", Style::default().fg(Color::Green)),
        Span::raw(" Add player  "),
        Span::styled("DEL", Style::default().fg(Color::Magenta)),
        Span::raw(" Remove  "),
        Span::styled("Ctrl+N", Style::default().fg(Color::Cyan)),
        Span::raw(" New player  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Green)),
        Span::raw(" Record  "),
        Span::styled("ESC", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

fn render_roster_pane(frame: &mut Frame, area: Rect, state: &NewGameState) {
    let focused = state.focus == NewGameFocus::Roster;

    if state.roster.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No players added.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .block(pane_block(" Players & Scores ", focused));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .roster
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_selected = focused && idx == state.roster_cursor;
            let prefix = if is_selected { "► " } else { "  " };
            let score = if entry.score_text.is_empty() {
                "_".to_string()
            } else {
                entry.score_text.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.player_name(entry.player).to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  score: {score}"),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(pane_block(" Players & Scores ", focused));
    frame.render_widget(list, area);
}

fn render_picker_pane(frame: &mut Frame, area: Rect, state: &NewGameState) {
    let focused = state.focus == NewGameFocus::Picker;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    frame.render_widget(filter_input(&state.player_filter), chunks[0]);

    let players = state.filtered_players();
    let items: Vec<ListItem> = players
        .iter()
        .enumerate()
        .map(|(idx, player)| {
            let is_selected = focused && idx == state.player_cursor;
            let prefix = if is_selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("+ {}", player.name),
                    Style::default().fg(Color::White),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(pane_block(" Add players ", focused));
    frame.render_widget(list, chunks[1]);
}

fn filter_input(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::styled(text, Style::default().fg(Color::White)),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Filter "),
    )
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}
