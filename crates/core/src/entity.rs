//! Record types persisted by the logbook.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, dense and zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Unique identifier for a board-game title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u32);

/// Unique identifier for one sitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

/// Unique identifier for one recorded play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four independently counted record kinds.
///
/// The string form (`player`, `board`, `session`, `game`) is the prefix of
/// every storage key belonging to that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Player,
    Board,
    Session,
    Game,
}

/// A person who plays. Hidden players stay resolvable by id for historical
/// games but are left out of pick-a-player lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hidden: bool,
}

/// A distinct board-game title, reusable across games. Same hide semantics
/// as [`Player`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub hidden: bool,
}

/// One sitting during which zero or more games are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Wall-clock start, seconds since the Unix epoch.
    pub started_at: i64,
}

/// A single play of a board within a session. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub board: BoardId,
    pub session: SessionId,
}

/// One player's numeric result in one game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub player: PlayerId,
    pub game: GameId,
    pub value: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_string_forms_match_key_prefixes() {
        assert_eq!(EntityKind::Player.to_string(), "player");
        assert_eq!(EntityKind::Board.to_string(), "board");
        assert_eq!(EntityKind::Session.to_string(), "session");
        assert_eq!(EntityKind::Game.to_string(), "game");
    }
}
