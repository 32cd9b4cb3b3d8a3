//! User actions: repository mutations and navigation transitions.
//!
//! Every handler follows the same policy: perform the repository work
//! first and apply the navigation event only on success. A failed mutation
//! is logged, lands in the status log, and leaves both the machine and the
//! screen in their pre-action state. There is no retry; the user repeats
//! the action.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use logbook_core::{
    GameId, KvStore, NavEvent, RepositoryError, Section, Session, SessionId,
};

use crate::app::App;
use crate::download;
use crate::state::{
    BoardListState, DownloadState, GameDetailState, MenuState, NewGameFocus, NewGameState,
    PlayerListState, ScoreRow, Screen, SessionDetailState, SessionListState,
};

impl<S: KvStore + 'static> App<S> {
    /// Routes one key press; returns true when the app should quit.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.nav.section() {
            Section::Menu => self.menu_key(key),
            Section::SessionDetail => {
                self.session_detail_key(key);
                false
            }
            Section::NewGame => {
                self.new_game_key(key);
                false
            }
            Section::GameDetail => {
                self.game_detail_key(key);
                false
            }
            Section::SessionList => {
                self.session_list_key(key);
                false
            }
            Section::PlayerList => {
                self.player_list_key(key);
                false
            }
            Section::BoardList => {
                self.board_list_key(key);
                false
            }
            Section::Download => {
                self.download_key(key);
                false
            }
        }
    }

    fn report(&mut self, context: &str, error: &RepositoryError) {
        tracing::error!(%error, "{context}");
        self.messages.push_error(format!("{context}: {error}"));
    }

    // ------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------

    fn menu_key(&mut self, key: KeyEvent) -> bool {
        let Screen::Menu(menu) = &mut self.screen else {
            return false;
        };
        match key.code {
            KeyCode::Up => menu.move_up(),
            KeyCode::Down => menu.move_down(),
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Enter => {
                let selected = menu.selected;
                return self.activate_menu_item(selected);
            }
            _ => {}
        }
        false
    }

    fn activate_menu_item(&mut self, index: usize) -> bool {
        match index {
            0 => self.start_session(),
            1 => self.open_session_list(),
            2 => self.open_player_list(),
            3 => self.open_board_list(),
            4 => self.open_download(),
            5 => return true,
            _ => {}
        }
        false
    }

    /// "New session": create first, transition only on success.
    pub(crate) fn start_session(&mut self) {
        match self.repo.new_session() {
            Ok(session) => {
                self.nav.apply(NavEvent::SessionStarted(session.id));
                self.screen = Screen::SessionDetail(SessionDetailState {
                    session,
                    games: Vec::new(),
                    boards: HashMap::new(),
                    selected: 0,
                });
                self.redraw.request_redraw();
            }
            Err(error) => self.report("creating session failed", &error),
        }
    }

    pub(crate) fn open_session_list(&mut self) {
        let sessions = self.sessions_newest_first();
        self.nav.apply(NavEvent::OpenSessionList);
        self.screen = Screen::SessionList(SessionListState {
            sessions,
            selected: 0,
        });
    }

    pub(crate) fn open_player_list(&mut self) {
        let players = match self.repo.all_players() {
            Ok(players) => players,
            Err(scan) => {
                self.messages
                    .push_error(format!("player list incomplete: {}", scan.error));
                scan.into_partial()
            }
        };
        self.nav.apply(NavEvent::OpenPlayerList);
        self.screen = Screen::PlayerList(PlayerListState {
            players,
            selected: 0,
        });
    }

    pub(crate) fn open_board_list(&mut self) {
        let boards = match self.repo.all_boards() {
            Ok(boards) => boards,
            Err(scan) => {
                self.messages
                    .push_error(format!("board list incomplete: {}", scan.error));
                scan.into_partial()
            }
        };
        self.nav.apply(NavEvent::OpenBoardList);
        self.screen = Screen::BoardList(BoardListState {
            boards,
            selected: 0,
        });
    }

    fn open_download(&mut self) {
        self.nav.apply(NavEvent::OpenDownload);
        self.screen = Screen::Download(DownloadState::new());
        download::spawn(
            self.repo.clone(),
            self.download_tx.clone(),
            self.redraw.clone(),
        );
    }

    fn sessions_newest_first(&mut self) -> Vec<Session> {
        let mut sessions = match self.repo.all_sessions() {
            Ok(sessions) => sessions,
            Err(scan) => {
                self.messages
                    .push_error(format!("session list incomplete: {}", scan.error));
                scan.into_partial()
            }
        };
        sessions.reverse();
        sessions
    }

    // ------------------------------------------------------------------
    // Session detail
    // ------------------------------------------------------------------

    fn session_detail_key(&mut self, key: KeyEvent) {
        let Screen::SessionDetail(detail) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Up => detail.move_up(),
            KeyCode::Down => detail.move_down(),
            KeyCode::Char('n') => self.start_new_game(),
            KeyCode::Enter => {
                if let Some(game) = detail.selected_game() {
                    let id = game.id;
                    self.open_game_detail(id);
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.nav.apply(NavEvent::Close);
                self.show_closed_section();
            }
            _ => {}
        }
    }

    /// Rebuild the screen after a session-detail close landed on either
    /// the menu or the session list. Neither target load can fail hard:
    /// list scans degrade to partial data.
    fn show_closed_section(&mut self) {
        match self.nav.section() {
            Section::SessionList => {
                let sessions = self.sessions_newest_first();
                self.screen = Screen::SessionList(SessionListState {
                    sessions,
                    selected: 0,
                });
            }
            _ => self.screen = Screen::Menu(MenuState::default()),
        }
    }

    fn load_session_detail(&self, id: SessionId) -> Result<SessionDetailState, RepositoryError> {
        let session = self.repo.session(id)?;
        let games = self.repo.games_in_session(id)?;
        let mut boards = HashMap::new();
        for game in &games {
            if !boards.contains_key(&game.board) {
                boards.insert(game.board, self.repo.board(game.board)?);
            }
        }
        Ok(SessionDetailState {
            session,
            games,
            boards,
            selected: 0,
        })
    }

    pub(crate) fn open_session_detail(&mut self, id: SessionId, event: NavEvent) {
        match self.load_session_detail(id) {
            Ok(state) => {
                self.nav.apply(event);
                self.screen = Screen::SessionDetail(state);
            }
            Err(error) => self.report("opening session failed", &error),
        }
    }

    // ------------------------------------------------------------------
    // New game form
    // ------------------------------------------------------------------

    pub(crate) fn start_new_game(&mut self) {
        let Screen::SessionDetail(detail) = &self.screen else {
            return;
        };
        let session = detail.session;

        let boards = match self.repo.all_boards() {
            Ok(boards) => boards,
            Err(scan) => {
                self.messages
                    .push_error(format!("board list incomplete: {}", scan.error));
                scan.into_partial()
            }
        };
        let players = match self.repo.all_players() {
            Ok(players) => players,
            Err(scan) => {
                self.messages
                    .push_error(format!("player list incomplete: {}", scan.error));
                scan.into_partial()
            }
        };

        self.nav.apply(NavEvent::StartNewGame);
        self.screen = Screen::NewGame(NewGameState::new(session, boards, players));
    }

    fn new_game_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.create_from_form_input(),
                KeyCode::Char('s') => self.save_game(),
                _ => {}
            }
            return;
        }

        let Screen::NewGame(form) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.cancel_new_game(),
            KeyCode::Tab => form.toggle_focus(),
            KeyCode::Up => form.move_up(),
            KeyCode::Down => form.move_down(),
            KeyCode::Enter => {
                if form.board.is_none() {
                    form.choose_selected_board();
                } else if form.focus == NewGameFocus::Picker {
                    form.add_selected_player();
                }
            }
            KeyCode::Delete => {
                if form.board.is_some() && form.focus == NewGameFocus::Roster {
                    form.remove_selected_roster_entry();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(ch) => form.input_char(ch),
            _ => {}
        }
    }

    /// Ctrl+N: create a board or player from whatever is typed into the
    /// active filter, and use it right away.
    fn create_from_form_input(&mut self) {
        let Screen::NewGame(form) = &self.screen else {
            return;
        };
        if form.board.is_none() {
            let name = form.board_filter.trim().to_string();
            if name.is_empty() {
                return;
            }
            match self.repo.new_board(name) {
                Ok(board) => {
                    if let Screen::NewGame(form) = &mut self.screen {
                        form.adopt_new_board(board);
                    }
                    self.redraw.request_redraw();
                }
                Err(error) => self.report("creating board failed", &error),
            }
        } else if form.focus == NewGameFocus::Picker {
            let name = form.player_filter.trim().to_string();
            if name.is_empty() {
                return;
            }
            match self.repo.new_player(name) {
                Ok(player) => {
                    if let Screen::NewGame(form) = &mut self.screen {
                        form.adopt_new_player(player);
                    }
                    self.redraw.request_redraw();
                }
                Err(error) => self.report("creating player failed", &error),
            }
        }
    }

    pub(crate) fn save_game(&mut self) {
        let Screen::NewGame(form) = &self.screen else {
            return;
        };
        let Some(board) = form.board else {
            self.messages.push_error("choose a board before recording");
            return;
        };
        let session = form.session;
        let scores = form.scores();

        match self.repo.new_game(board, session.id, &scores) {
            Ok(_) => {
                self.messages.push_info("Game recorded.");
                self.nav.apply(NavEvent::LeaveNewGame);
                self.show_session_detail_after_form(session);
                self.redraw.request_redraw();
            }
            Err(error) => self.report("recording game failed", &error),
        }
    }

    fn cancel_new_game(&mut self) {
        let Screen::NewGame(form) = &self.screen else {
            return;
        };
        let session = form.session;
        self.nav.apply(NavEvent::LeaveNewGame);
        self.show_session_detail_after_form(session);
    }

    fn show_session_detail_after_form(&mut self, session: Session) {
        let state = match self.load_session_detail(session.id) {
            Ok(state) => state,
            Err(error) => {
                self.report("reloading session failed", &error);
                SessionDetailState {
                    session,
                    games: Vec::new(),
                    boards: HashMap::new(),
                    selected: 0,
                }
            }
        };
        self.screen = Screen::SessionDetail(state);
    }

    // ------------------------------------------------------------------
    // Game detail
    // ------------------------------------------------------------------

    fn load_game_detail(&self, id: GameId) -> Result<GameDetailState, RepositoryError> {
        let game = self.repo.game(id)?;
        let session = self.repo.session(game.session)?;
        let board = self.repo.board(game.board)?;
        let scores = self.repo.scores_in_game(id)?;

        let mut rows = Vec::with_capacity(scores.len());
        for score in scores {
            rows.push(ScoreRow {
                player: self.repo.player(score.player)?,
                value: score.value,
            });
        }
        Ok(GameDetailState {
            session,
            board,
            rows,
        })
    }

    pub(crate) fn open_game_detail(&mut self, id: GameId) {
        match self.load_game_detail(id) {
            Ok(state) => {
                self.nav.apply(NavEvent::SelectGame(id));
                self.screen = Screen::GameDetail(state);
            }
            Err(error) => self.report("opening game failed", &error),
        }
    }

    fn game_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_game_detail(),
            _ => {}
        }
    }

    pub(crate) fn close_game_detail(&mut self) {
        let Some(id) = self.nav.active_session() else {
            return;
        };
        match self.load_session_detail(id) {
            Ok(state) => {
                self.nav.apply(NavEvent::Close);
                self.screen = Screen::SessionDetail(state);
            }
            Err(error) => self.report("returning to session failed", &error),
        }
    }

    // ------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------

    fn session_list_key(&mut self, key: KeyEvent) {
        let Screen::SessionList(list) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Up => list.move_up(),
            KeyCode::Down => list.move_down(),
            KeyCode::Enter => {
                if let Some(session) = list.selected_session() {
                    let id = session.id;
                    self.open_session_detail(id, NavEvent::SelectSession(id));
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.close_list(),
            _ => {}
        }
    }

    fn player_list_key(&mut self, key: KeyEvent) {
        let Screen::PlayerList(list) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Up => list.move_up(),
            KeyCode::Down => list.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected_player(),
            KeyCode::Esc | KeyCode::Char('q') => self.close_list(),
            _ => {}
        }
    }

    fn board_list_key(&mut self, key: KeyEvent) {
        let Screen::BoardList(list) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Up => list.move_up(),
            KeyCode::Down => list.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected_board(),
            KeyCode::Esc | KeyCode::Char('q') => self.close_list(),
            _ => {}
        }
    }

    pub(crate) fn toggle_selected_player(&mut self) {
        let Screen::PlayerList(list) = &mut self.screen else {
            return;
        };
        let Some(player) = list.players.get_mut(list.selected) else {
            return;
        };
        let hidden = !player.hidden;
        let result = self.repo.set_player_hidden(player, hidden);
        match result {
            Ok(()) => self.redraw.request_redraw(),
            Err(error) => self.report("updating player failed", &error),
        }
    }

    pub(crate) fn toggle_selected_board(&mut self) {
        let Screen::BoardList(list) = &mut self.screen else {
            return;
        };
        let Some(board) = list.boards.get_mut(list.selected) else {
            return;
        };
        let hidden = !board.hidden;
        let result = self.repo.set_board_hidden(board, hidden);
        match result {
            Ok(()) => self.redraw.request_redraw(),
            Err(error) => self.report("updating board failed", &error),
        }
    }

    fn close_list(&mut self) {
        self.nav.apply(NavEvent::Close);
        self.screen = Screen::Menu(MenuState::default());
    }

    // ------------------------------------------------------------------
    // Download
    // ------------------------------------------------------------------

    fn download_key(&mut self, key: KeyEvent) {
        let Screen::Download(state) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Up => state.scroll_up(),
            KeyCode::Down => state.scroll_down(),
            _ => {}
        }
    }
}
