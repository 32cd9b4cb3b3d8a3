//! Persisted entity records, identity counters, and relation indices.

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::entity::{
    Board, BoardId, EntityKind, Game, GameId, Player, PlayerId, Score, Session, SessionId,
};
use crate::error::{PartialScan, RepositoryError, Result};
use crate::store::KvStore;

fn count_key(kind: EntityKind) -> String {
    format!("{kind}-count")
}

fn record_key(kind: EntityKind, id: u32) -> String {
    format!("{kind}-{id}")
}

fn session_games_key(session: SessionId) -> String {
    format!("session-{session}-games")
}

fn game_scores_key(game: GameId) -> String {
    format!("game-{game}-scores")
}

/// Single-writer facade over the key-value store.
///
/// Owns every storage key the logbook uses: the per-kind identity counters,
/// the entity records, the session→games index, and the game→scores maps.
/// Valid ids for a kind are exactly `0..count(kind)`; records are never
/// deleted, and only the `hidden` flag of players and boards is mutable.
///
/// Mutations assume one logical writer at a time: `next_id` and the index
/// read-modify-writes are not locked, so two in-flight mutations can lose an
/// append or double-assign an id. Reads are safe to share; the download
/// task holds the repository behind an `Arc` and only reads.
pub struct EntityRepository<S> {
    store: S,
}

impl<S: KvStore> EntityRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.store.get(key).map_err(|source| RepositoryError::Read {
            key: key.to_owned(),
            source,
        })
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.store
            .put(key, value)
            .map_err(|source| RepositoryError::Persist {
                key: key.to_owned(),
                source,
            })
    }

    fn record<T: DeserializeOwned>(&self, kind: EntityKind, id: u32) -> Result<T> {
        self.read(&record_key(kind, id))?
            .ok_or(RepositoryError::NotFound { kind, id })
    }

    /// Number of records ever created for `kind`. An uninitialized counter
    /// reads as zero.
    pub fn count(&self, kind: EntityKind) -> Result<u32> {
        Ok(self.read::<u32>(&count_key(kind))?.unwrap_or(0))
    }

    /// Allocates the next id for `kind` by advancing the counter.
    ///
    /// The advance is persisted before the caller writes its record, so a
    /// failed record write leaves a gap. Accepted for a single-user store.
    fn next_id(&self, kind: EntityKind) -> Result<u32> {
        let current = self.count(kind)?;
        self.write(&count_key(kind), &(current + 1))?;
        Ok(current)
    }

    fn all<T>(&self, kind: EntityKind) -> Result<Vec<T>, PartialScan<T>>
    where
        T: DeserializeOwned + fmt::Debug,
    {
        let count = match self.count(kind) {
            Ok(count) => count,
            Err(error) => {
                return Err(PartialScan {
                    partial: Vec::new(),
                    error,
                });
            }
        };

        let mut records = Vec::with_capacity(count as usize);
        for id in 0..count {
            match self.record(kind, id) {
                Ok(record) => records.push(record),
                Err(error) => {
                    return Err(PartialScan {
                        partial: records,
                        error,
                    });
                }
            }
        }
        Ok(records)
    }

    pub fn new_player(&self, name: impl Into<String>) -> Result<Player> {
        let id = PlayerId(self.next_id(EntityKind::Player)?);
        let player = Player {
            id,
            name: name.into(),
            hidden: false,
        };
        self.write(&record_key(EntityKind::Player, id.0), &player)?;
        tracing::debug!(%id, "created player");
        Ok(player)
    }

    pub fn new_board(&self, name: impl Into<String>) -> Result<Board> {
        let id = BoardId(self.next_id(EntityKind::Board)?);
        let board = Board {
            id,
            name: name.into(),
            hidden: false,
        };
        self.write(&record_key(EntityKind::Board, id.0), &board)?;
        tracing::debug!(%id, "created board");
        Ok(board)
    }

    /// Starts a new sitting stamped with the current wall clock.
    pub fn new_session(&self) -> Result<Session> {
        let id = SessionId(self.next_id(EntityKind::Session)?);
        let session = Session {
            id,
            started_at: Utc::now().timestamp(),
        };
        self.write(&record_key(EntityKind::Session, id.0), &session)?;
        tracing::debug!(%id, "created session");
        Ok(session)
    }

    /// Records one play of `board` within `session`, together with every
    /// participant's score.
    ///
    /// Three separate writes: the game record, the session's game index,
    /// the score map. There is no rollback; a failure partway leaves the
    /// earlier steps committed, at worst a game visible in the session list
    /// with no scores.
    pub fn new_game(
        &self,
        board: BoardId,
        session: SessionId,
        scores: &HashMap<PlayerId, f32>,
    ) -> Result<Game> {
        let id = GameId(self.next_id(EntityKind::Game)?);
        let game = Game { id, board, session };
        self.write(&record_key(EntityKind::Game, id.0), &game)?;

        let index_key = session_games_key(session);
        let mut game_ids: Vec<GameId> = self.read(&index_key)?.unwrap_or_default();
        game_ids.push(id);
        if let Err(error) = self.write(&index_key, &game_ids) {
            tracing::warn!(game = %id, %session, "game record persisted but index append failed");
            return Err(error);
        }

        if let Err(error) = self.write(&game_scores_key(id), scores) {
            tracing::warn!(game = %id, %session, "game persisted without its scores");
            return Err(error);
        }

        tracing::debug!(game = %id, %board, %session, players = scores.len(), "recorded game");
        Ok(game)
    }

    pub fn player(&self, id: PlayerId) -> Result<Player> {
        self.record(EntityKind::Player, id.0)
    }

    pub fn board(&self, id: BoardId) -> Result<Board> {
        self.record(EntityKind::Board, id.0)
    }

    pub fn session(&self, id: SessionId) -> Result<Session> {
        self.record(EntityKind::Session, id.0)
    }

    pub fn game(&self, id: GameId) -> Result<Game> {
        self.record(EntityKind::Game, id.0)
    }

    pub fn all_players(&self) -> Result<Vec<Player>, PartialScan<Player>> {
        self.all(EntityKind::Player)
    }

    pub fn all_boards(&self) -> Result<Vec<Board>, PartialScan<Board>> {
        self.all(EntityKind::Board)
    }

    pub fn all_sessions(&self) -> Result<Vec<Session>, PartialScan<Session>> {
        self.all(EntityKind::Session)
    }

    /// Flips the visibility flag on a caller-held record and re-persists it.
    pub fn set_player_hidden(&self, player: &mut Player, hidden: bool) -> Result<()> {
        player.hidden = hidden;
        self.write(&record_key(EntityKind::Player, player.id.0), player)
    }

    /// Flips the visibility flag on a caller-held record and re-persists it.
    pub fn set_board_hidden(&self, board: &mut Board, hidden: bool) -> Result<()> {
        board.hidden = hidden;
        self.write(&record_key(EntityKind::Board, board.id.0), board)
    }

    /// Games of a session in creation order (the index is append-only).
    pub fn games_in_session(&self, session: SessionId) -> Result<Vec<Game>> {
        let game_ids: Vec<GameId> = self.read(&session_games_key(session))?.unwrap_or_default();
        game_ids.into_iter().map(|id| self.game(id)).collect()
    }

    /// Scores of a game, one record per participant. Order is unspecified.
    pub fn scores_in_game(&self, game: GameId) -> Result<Vec<Score>> {
        let map: HashMap<PlayerId, f32> =
            self.read(&game_scores_key(game))?.unwrap_or_default();
        Ok(map
            .into_iter()
            .map(|(player, value)| Score {
                player,
                game,
                value,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo() -> EntityRepository<MemoryStore> {
        EntityRepository::new(MemoryStore::new())
    }

    #[test]
    fn counters_start_at_zero() {
        let repo = repo();
        assert_eq!(repo.count(EntityKind::Player).unwrap(), 0);
        assert_eq!(repo.count(EntityKind::Game).unwrap(), 0);
    }

    #[test]
    fn ids_are_dense_and_sequential() {
        let repo = repo();
        for expected in 0..4 {
            let player = repo.new_player(format!("p{expected}")).unwrap();
            assert_eq!(player.id, PlayerId(expected));
        }
        assert_eq!(repo.count(EntityKind::Player).unwrap(), 4);
    }

    #[test]
    fn counters_are_independent_per_kind() {
        let repo = repo();
        repo.new_player("Alice").unwrap();
        let board = repo.new_board("Azul").unwrap();
        assert_eq!(board.id, BoardId(0));
    }

    #[test]
    fn missing_record_is_not_found() {
        let repo = repo();
        let result = repo.player(PlayerId(7));
        assert!(matches!(
            result,
            Err(RepositoryError::NotFound {
                kind: EntityKind::Player,
                id: 7
            })
        ));
    }

    #[test]
    fn set_hidden_keeps_id_and_name() {
        let repo = repo();
        let mut player = repo.new_player("Alice").unwrap();
        repo.set_player_hidden(&mut player, true).unwrap();
        let stored = repo.player(player.id).unwrap();
        assert_eq!(stored.id, player.id);
        assert_eq!(stored.name, "Alice");
        assert!(stored.hidden);

        repo.set_player_hidden(&mut player, false).unwrap();
        assert!(!repo.player(player.id).unwrap().hidden);
    }

    #[test]
    fn games_index_preserves_creation_order() {
        let repo = repo();
        let board = repo.new_board("Catan").unwrap();
        let session = repo.new_session().unwrap();
        let scores = HashMap::new();

        let first = repo.new_game(board.id, session.id, &scores).unwrap();
        let second = repo.new_game(board.id, session.id, &scores).unwrap();

        let games = repo.games_in_session(session.id).unwrap();
        assert_eq!(
            games.iter().map(|g| g.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }

    #[test]
    fn scores_round_trip_exactly() {
        let repo = repo();
        let board = repo.new_board("Cascadia").unwrap();
        let session = repo.new_session().unwrap();
        let alice = repo.new_player("Alice").unwrap();
        let bob = repo.new_player("Bob").unwrap();

        let mut scores = HashMap::new();
        scores.insert(alice.id, 3.5_f32);
        scores.insert(bob.id, 2.0_f32);

        let game = repo.new_game(board.id, session.id, &scores).unwrap();
        let mut stored = repo.scores_in_game(game.id).unwrap();
        stored.sort_by_key(|score| score.player);

        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].player, alice.id);
        assert_eq!(stored[0].value, 3.5);
        assert_eq!(stored[1].player, bob.id);
        assert_eq!(stored[1].value, 2.0);
        assert!(stored.iter().all(|score| score.game == game.id));
    }

    #[test]
    fn scores_of_unknown_game_read_as_empty() {
        let repo = repo();
        assert!(repo.scores_in_game(GameId(9)).unwrap().is_empty());
    }

    #[test]
    fn games_of_fresh_session_read_as_empty() {
        let repo = repo();
        let session = repo.new_session().unwrap();
        assert!(repo.games_in_session(session.id).unwrap().is_empty());
    }
}
