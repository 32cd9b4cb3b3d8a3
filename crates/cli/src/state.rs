//! Per-screen UI state owned by the application.
//!
//! Navigation truth lives in [`logbook_core::NavState`]; each variant here
//! carries the records loaded for the screen plus cursor and form state.
//! Everything repository- or navigation-touching happens in the controller,
//! so these types stay plain data with local transitions.

use std::collections::HashMap;

use logbook_core::{Board, BoardId, Game, Player, PlayerId, Session};

pub const MENU_ITEMS: [&str; 6] = [
    "New Session",
    "Sessions",
    "Players",
    "Games",
    "Download",
    "Quit",
];

/// The screen currently on display.
#[derive(Debug)]
pub enum Screen {
    Menu(MenuState),
    SessionDetail(SessionDetailState),
    NewGame(NewGameState),
    GameDetail(GameDetailState),
    SessionList(SessionListState),
    PlayerList(PlayerListState),
    BoardList(BoardListState),
    Download(DownloadState),
}

#[derive(Debug, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < MENU_ITEMS.len() {
            self.selected += 1;
        }
    }
}

#[derive(Debug)]
pub struct SessionDetailState {
    pub session: Session,
    /// Games in creation order, straight from the session index.
    pub games: Vec<Game>,
    /// Board records for the games above, keyed by id.
    pub boards: HashMap<BoardId, Board>,
    pub selected: usize,
}

impl SessionDetailState {
    pub fn selected_game(&self) -> Option<&Game> {
        self.games.get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.games.len() {
            self.selected += 1;
        }
    }
}

/// One row of a finished game: who scored what.
#[derive(Debug)]
pub struct ScoreRow {
    pub player: Player,
    pub value: f32,
}

#[derive(Debug)]
pub struct GameDetailState {
    pub session: Session,
    pub board: Board,
    pub rows: Vec<ScoreRow>,
}

#[derive(Debug)]
pub struct SessionListState {
    /// Newest first.
    pub sessions: Vec<Session>,
    pub selected: usize,
}

impl SessionListState {
    pub fn selected_session(&self) -> Option<&Session> {
        self.sessions.get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.sessions.len() {
            self.selected += 1;
        }
    }
}

#[derive(Debug)]
pub struct PlayerListState {
    pub players: Vec<Player>,
    pub selected: usize,
}

impl PlayerListState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.players.len() {
            self.selected += 1;
        }
    }
}

#[derive(Debug)]
pub struct BoardListState {
    pub boards: Vec<Board>,
    pub selected: usize,
}

impl BoardListState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.boards.len() {
            self.selected += 1;
        }
    }
}

#[derive(Debug)]
pub struct DownloadState {
    /// `None` while the background task is still preparing the dump.
    pub data: Option<String>,
    pub scroll: u16,
}

impl DownloadState {
    pub fn new() -> Self {
        Self {
            data: None,
            scroll: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

/// Which pane of the new-game roster phase takes keystrokes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NewGameFocus {
    /// The add-players pane: filter text and candidate list.
    Picker,
    /// The participants pane: score entry per added player.
    Roster,
}

/// One participant being entered, score still as raw text.
#[derive(Debug)]
pub struct RosterEntry {
    pub player: PlayerId,
    pub score_text: String,
}

impl RosterEntry {
    fn new(player: PlayerId) -> Self {
        Self {
            player,
            score_text: String::new(),
        }
    }
}

/// Form state of the new-game screen.
///
/// Two phases: while `board` is `None` the board picker is up (filter,
/// pick, or create a new title from the typed text); afterwards the roster
/// and score entry. Cancelling at any point discards the whole form.
#[derive(Debug)]
pub struct NewGameState {
    pub session: Session,
    pub all_boards: Vec<Board>,
    pub all_players: Vec<Player>,
    pub board: Option<BoardId>,
    pub board_filter: String,
    pub board_cursor: usize,
    pub focus: NewGameFocus,
    pub roster: Vec<RosterEntry>,
    pub roster_cursor: usize,
    pub player_filter: String,
    pub player_cursor: usize,
}

impl NewGameState {
    pub fn new(session: Session, all_boards: Vec<Board>, all_players: Vec<Player>) -> Self {
        Self {
            session,
            all_boards,
            all_players,
            board: None,
            board_filter: String::new(),
            board_cursor: 0,
            focus: NewGameFocus::Picker,
            roster: Vec::new(),
            roster_cursor: 0,
            player_filter: String::new(),
            player_cursor: 0,
        }
    }

    pub fn board_name(&self) -> Option<&str> {
        let chosen = self.board?;
        self.all_boards
            .iter()
            .find(|board| board.id == chosen)
            .map(|board| board.name.as_str())
    }

    /// Non-hidden boards matching the typed filter.
    pub fn filtered_boards(&self) -> Vec<&Board> {
        self.all_boards
            .iter()
            .filter(|board| !board.hidden && board.name.contains(self.board_filter.as_str()))
            .collect()
    }

    /// Non-hidden players matching the filter, minus those already added.
    pub fn filtered_players(&self) -> Vec<&Player> {
        self.all_players
            .iter()
            .filter(|player| {
                !player.hidden
                    && player.name.contains(self.player_filter.as_str())
                    && !self.roster.iter().any(|entry| entry.player == player.id)
            })
            .collect()
    }

    pub fn player_name(&self, id: PlayerId) -> &str {
        self.all_players
            .iter()
            .find(|player| player.id == id)
            .map(|player| player.name.as_str())
            .unwrap_or("?")
    }

    /// Picks the board under the cursor; returns false when the filtered
    /// list is empty.
    pub fn choose_selected_board(&mut self) -> bool {
        let chosen = self
            .filtered_boards()
            .get(self.board_cursor)
            .map(|board| board.id);
        match chosen {
            Some(id) => {
                self.board = Some(id);
                true
            }
            None => false,
        }
    }

    /// A freshly created board becomes the chosen one immediately.
    pub fn adopt_new_board(&mut self, board: Board) {
        self.board = Some(board.id);
        self.all_boards.push(board);
        self.board_filter.clear();
        self.board_cursor = 0;
    }

    pub fn add_selected_player(&mut self) {
        let chosen = self
            .filtered_players()
            .get(self.player_cursor)
            .map(|player| player.id);
        if let Some(id) = chosen {
            self.roster.push(RosterEntry::new(id));
            self.player_filter.clear();
            self.player_cursor = 0;
        }
    }

    /// A freshly created player joins the roster immediately.
    pub fn adopt_new_player(&mut self, player: Player) {
        self.roster.push(RosterEntry::new(player.id));
        self.all_players.push(player);
        self.player_filter.clear();
        self.player_cursor = 0;
    }

    pub fn remove_selected_roster_entry(&mut self) {
        if self.roster_cursor < self.roster.len() {
            self.roster.remove(self.roster_cursor);
            if self.roster_cursor > 0 && self.roster_cursor >= self.roster.len() {
                self.roster_cursor -= 1;
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        if self.board.is_some() {
            self.focus = match self.focus {
                NewGameFocus::Picker => NewGameFocus::Roster,
                NewGameFocus::Roster => NewGameFocus::Picker,
            };
        }
    }

    pub fn input_char(&mut self, ch: char) {
        if self.board.is_none() {
            self.board_filter.push(ch);
            self.board_cursor = 0;
            return;
        }
        match self.focus {
            NewGameFocus::Picker => {
                self.player_filter.push(ch);
                self.player_cursor = 0;
            }
            NewGameFocus::Roster => {
                if (ch.is_ascii_digit() || ch == '.' || ch == '-')
                    && let Some(entry) = self.roster.get_mut(self.roster_cursor)
                {
                    entry.score_text.push(ch);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.board.is_none() {
            self.board_filter.pop();
            self.board_cursor = 0;
            return;
        }
        match self.focus {
            NewGameFocus::Picker => {
                self.player_filter.pop();
                self.player_cursor = 0;
            }
            NewGameFocus::Roster => {
                if let Some(entry) = self.roster.get_mut(self.roster_cursor) {
                    entry.score_text.pop();
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        if self.board.is_none() {
            self.board_cursor = self.board_cursor.saturating_sub(1);
            return;
        }
        match self.focus {
            NewGameFocus::Picker => self.player_cursor = self.player_cursor.saturating_sub(1),
            NewGameFocus::Roster => self.roster_cursor = self.roster_cursor.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self) {
        if self.board.is_none() {
            if self.board_cursor + 1 < self.filtered_boards().len() {
                self.board_cursor += 1;
            }
            return;
        }
        match self.focus {
            NewGameFocus::Picker => {
                if self.player_cursor + 1 < self.filtered_players().len() {
                    self.player_cursor += 1;
                }
            }
            NewGameFocus::Roster => {
                if self.roster_cursor + 1 < self.roster.len() {
                    self.roster_cursor += 1;
                }
            }
        }
    }

    /// Final score map for the repository, one entry per participant.
    pub fn scores(&self) -> HashMap<PlayerId, f32> {
        self.roster
            .iter()
            .map(|entry| (entry.player, parse_score(&entry.score_text)))
            .collect()
    }
}

/// Malformed numeric input counts as zero rather than failing the save.
pub fn parse_score(text: &str) -> f32 {
    text.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbook_core::SessionId;

    fn session() -> Session {
        Session {
            id: SessionId(0),
            started_at: 0,
        }
    }

    fn player(id: u32, name: &str, hidden: bool) -> Player {
        Player {
            id: PlayerId(id),
            name: name.into(),
            hidden,
        }
    }

    fn board(id: u32, name: &str, hidden: bool) -> Board {
        Board {
            id: BoardId(id),
            name: name.into(),
            hidden,
        }
    }

    #[test]
    fn malformed_scores_parse_as_zero() {
        assert_eq!(parse_score("3.5"), 3.5);
        assert_eq!(parse_score(" -2 "), -2.0);
        assert_eq!(parse_score("abc"), 0.0);
        assert_eq!(parse_score(""), 0.0);
    }

    #[test]
    fn board_filter_hides_hidden_and_mismatched_titles() {
        let mut form = NewGameState::new(
            session(),
            vec![
                board(0, "Carcassonne", false),
                board(1, "Catan", true),
                board(2, "Azul", false),
            ],
            vec![],
        );
        form.input_char('C');
        let names: Vec<_> = form
            .filtered_boards()
            .iter()
            .map(|b| b.name.clone())
            .collect();
        assert_eq!(names, vec!["Carcassonne".to_string()]);
    }

    #[test]
    fn choosing_a_board_enters_the_roster_phase() {
        let mut form = NewGameState::new(session(), vec![board(0, "Azul", false)], vec![]);
        assert!(form.choose_selected_board());
        assert_eq!(form.board, Some(BoardId(0)));
        assert_eq!(form.board_name(), Some("Azul"));
    }

    #[test]
    fn picker_excludes_players_already_on_the_roster() {
        let mut form = NewGameState::new(
            session(),
            vec![board(0, "Azul", false)],
            vec![
                player(0, "Alice", false),
                player(1, "Bob", false),
                player(2, "Eve", true),
            ],
        );
        form.choose_selected_board();
        form.add_selected_player();

        let names: Vec<_> = form
            .filtered_players()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Bob".to_string()]);
    }

    #[test]
    fn score_entry_accepts_numeric_characters_only() {
        let mut form = NewGameState::new(
            session(),
            vec![board(0, "Azul", false)],
            vec![player(0, "Alice", false)],
        );
        form.choose_selected_board();
        form.add_selected_player();
        form.toggle_focus();

        for ch in ['3', 'x', '.', '5'] {
            form.input_char(ch);
        }
        assert_eq!(form.roster[0].score_text, "3.5");

        let scores = form.scores();
        assert_eq!(scores[&PlayerId(0)], 3.5);
    }

    #[test]
    fn removing_a_roster_entry_clamps_the_cursor() {
        let mut form = NewGameState::new(
            session(),
            vec![board(0, "Azul", false)],
            vec![player(0, "Alice", false), player(1, "Bob", false)],
        );
        form.choose_selected_board();
        form.add_selected_player();
        form.add_selected_player();

        form.roster_cursor = 1;
        form.remove_selected_roster_entry();
        assert_eq!(form.roster.len(), 1);
        assert_eq!(form.roster_cursor, 0);

        form.remove_selected_roster_entry();
        assert!(form.roster.is_empty());
    }
}
