//! Screen navigation with a single-slot back history.

use crate::entity::{GameId, SessionId};

/// Visible screen of the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Menu,
    SessionDetail,
    NewGame,
    GameDetail,
    SessionList,
    PlayerList,
    BoardList,
    Download,
}

/// Navigation input produced by the controller.
///
/// Events carry ids already resolved by the caller. `SessionStarted` in
/// particular is only emitted after the repository created the session, so
/// a failed creation never moves the machine off the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    SessionStarted(SessionId),
    SelectSession(SessionId),
    SelectGame(GameId),
    StartNewGame,
    LeaveNewGame,
    OpenSessionList,
    OpenPlayerList,
    OpenBoardList,
    OpenDownload,
    Close,
}

/// Which screen is visible plus the context needed to render it.
///
/// `previous` is one slot, not a stack: a deeper navigation overwrites it.
/// The only guard against closing into a dead end is the session-detail
/// self-loop rule in [`NavEvent::Close`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    section: Section,
    active_session: Option<SessionId>,
    active_game: Option<GameId>,
    previous: Option<Section>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            section: Section::Menu,
            active_session: None,
            active_game: None,
            previous: None,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Session context for the session-detail, new-game, and game-detail
    /// screens. Set by the transition that entered them.
    pub fn active_session(&self) -> Option<SessionId> {
        self.active_session
    }

    /// Game context for the game-detail screen.
    pub fn active_game(&self) -> Option<GameId> {
        self.active_game
    }

    /// Applies one navigation event and reports whether the state changed.
    ///
    /// Every (section, event) pair not listed is ignored: the machine never
    /// commits a partial transition, and events arriving on the wrong
    /// screen are dropped rather than guessed at.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        use NavEvent::*;
        use Section::*;

        match (self.section, event) {
            (Menu, SessionStarted(id)) => {
                self.section = SessionDetail;
                self.active_session = Some(id);
                self.previous = Some(Menu);
            }
            (Menu, OpenSessionList) => self.section = SessionList,
            (Menu, OpenPlayerList) => self.section = PlayerList,
            (Menu, OpenBoardList) => self.section = BoardList,
            // Terminal leaf: no close event applies to Download.
            (Menu, OpenDownload) => self.section = Download,

            (SessionList, SelectSession(id)) => {
                self.section = SessionDetail;
                self.active_session = Some(id);
                self.previous = Some(SessionList);
            }

            (SessionDetail, StartNewGame) => self.section = NewGame,
            (NewGame, LeaveNewGame) => self.section = SessionDetail,

            (SessionDetail, SelectGame(id)) => {
                self.section = GameDetail;
                self.active_game = Some(id);
                self.previous = Some(SessionDetail);
            }

            (SessionDetail, Close) => {
                // Closing a game lands back here with `previous` still
                // pointing at this section; route to the menu instead of
                // looping into ourselves.
                self.section = match self.previous {
                    Some(SessionDetail) | None => Menu,
                    Some(previous) => previous,
                };
            }
            (GameDetail, Close) => {
                self.section = self.previous.unwrap_or(Menu);
            }
            (SessionList | PlayerList | BoardList, Close) => self.section = Menu,

            _ => return false,
        }
        true
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_menu() {
        let nav = NavState::new();
        assert_eq!(nav.section(), Section::Menu);
        assert_eq!(nav.active_session(), None);
        assert_eq!(nav.active_game(), None);
    }

    #[test]
    fn new_session_opens_detail_and_closes_to_menu() {
        let mut nav = NavState::new();
        assert!(nav.apply(NavEvent::SessionStarted(SessionId(0))));
        assert_eq!(nav.section(), Section::SessionDetail);
        assert_eq!(nav.active_session(), Some(SessionId(0)));

        assert!(nav.apply(NavEvent::Close));
        assert_eq!(nav.section(), Section::Menu);
    }

    #[test]
    fn session_from_list_closes_back_to_list() {
        let mut nav = NavState::new();
        nav.apply(NavEvent::OpenSessionList);
        assert!(nav.apply(NavEvent::SelectSession(SessionId(3))));
        assert_eq!(nav.section(), Section::SessionDetail);
        assert_eq!(nav.active_session(), Some(SessionId(3)));

        nav.apply(NavEvent::Close);
        assert_eq!(nav.section(), Section::SessionList);
    }

    #[test]
    fn closing_after_game_detail_falls_back_to_menu() {
        let mut nav = NavState::new();
        nav.apply(NavEvent::OpenSessionList);
        nav.apply(NavEvent::SelectSession(SessionId(1)));
        nav.apply(NavEvent::SelectGame(GameId(5)));
        assert_eq!(nav.section(), Section::GameDetail);
        assert_eq!(nav.active_game(), Some(GameId(5)));

        // GameDetail closes into SessionDetail, whose previous slot now
        // names SessionDetail itself.
        nav.apply(NavEvent::Close);
        assert_eq!(nav.section(), Section::SessionDetail);

        nav.apply(NavEvent::Close);
        assert_eq!(nav.section(), Section::Menu);
    }

    #[test]
    fn new_game_returns_to_session_detail() {
        let mut nav = NavState::new();
        nav.apply(NavEvent::SessionStarted(SessionId(0)));
        assert!(nav.apply(NavEvent::StartNewGame));
        assert_eq!(nav.section(), Section::NewGame);

        assert!(nav.apply(NavEvent::LeaveNewGame));
        assert_eq!(nav.section(), Section::SessionDetail);
        assert_eq!(nav.active_session(), Some(SessionId(0)));
    }

    #[test]
    fn list_screens_close_to_menu() {
        for open in [
            NavEvent::OpenSessionList,
            NavEvent::OpenPlayerList,
            NavEvent::OpenBoardList,
        ] {
            let mut nav = NavState::new();
            assert!(nav.apply(open));
            assert!(nav.apply(NavEvent::Close));
            assert_eq!(nav.section(), Section::Menu);
        }
    }

    #[test]
    fn download_is_a_terminal_leaf() {
        let mut nav = NavState::new();
        nav.apply(NavEvent::OpenDownload);
        assert_eq!(nav.section(), Section::Download);
        assert!(!nav.apply(NavEvent::Close));
        assert_eq!(nav.section(), Section::Download);
    }

    #[test]
    fn events_on_the_wrong_screen_are_ignored() {
        let mut nav = NavState::new();
        assert!(!nav.apply(NavEvent::Close));
        assert!(!nav.apply(NavEvent::StartNewGame));
        assert!(!nav.apply(NavEvent::SelectSession(SessionId(0))));
        assert!(!nav.apply(NavEvent::LeaveNewGame));
        assert_eq!(nav.section(), Section::Menu);

        nav.apply(NavEvent::OpenPlayerList);
        assert!(!nav.apply(NavEvent::SessionStarted(SessionId(0))));
        assert!(!nav.apply(NavEvent::OpenDownload));
        assert_eq!(nav.section(), Section::PlayerList);
    }

    #[test]
    fn deeper_navigation_overwrites_the_back_slot() {
        let mut nav = NavState::new();
        nav.apply(NavEvent::SessionStarted(SessionId(0)));
        nav.apply(NavEvent::SelectGame(GameId(0)));
        nav.apply(NavEvent::Close);
        nav.apply(NavEvent::SelectGame(GameId(1)));

        // The slot still says SessionDetail; closing twice ends on Menu,
        // never back inside GameDetail.
        nav.apply(NavEvent::Close);
        assert_eq!(nav.section(), Section::SessionDetail);
        nav.apply(NavEvent::Close);
        assert_eq!(nav.section(), Section::Menu);
    }
}
