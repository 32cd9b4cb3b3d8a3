//! Read-only snapshot of the whole logbook for user copy-out.

use serde::Serialize;

use crate::entity::{Board, Player, Session};
use crate::repository::EntityRepository;
use crate::store::KvStore;

/// Flat dump of every session, board, and player.
///
/// The three top-level named sequences are a boundary contract: external
/// consumers of the dump rely on exactly `sessions`, `boards`, `players`.
#[derive(Clone, Debug, Serialize)]
pub struct ExportData {
    pub sessions: Vec<Session>,
    pub boards: Vec<Board>,
    pub players: Vec<Player>,
}

impl ExportData {
    /// Collects the dump. A scan that stops early contributes whatever it
    /// read; the failure is logged, not fatal.
    pub fn collect<S: KvStore>(repo: &EntityRepository<S>) -> Self {
        Self {
            sessions: repo
                .all_sessions()
                .unwrap_or_else(|scan| scan.into_partial()),
            boards: repo.all_boards().unwrap_or_else(|scan| scan.into_partial()),
            players: repo
                .all_players()
                .unwrap_or_else(|scan| scan.into_partial()),
        }
    }

    /// Indented JSON rendering for display and copy-out.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn dump_has_the_three_named_sequences() {
        let repo = EntityRepository::new(MemoryStore::new());
        repo.new_player("Alice").unwrap();
        repo.new_board("Azul").unwrap();
        repo.new_session().unwrap();

        let dump = ExportData::collect(&repo);
        let json: serde_json::Value =
            serde_json::from_str(&dump.to_pretty_json().unwrap()).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["sessions"].as_array().unwrap().len(), 1);
        assert_eq!(object["boards"].as_array().unwrap().len(), 1);
        assert_eq!(object["players"].as_array().unwrap().len(), 1);
        assert_eq!(object["players"][0]["name"], "Alice");
    }

    #[test]
    fn empty_store_dumps_empty_sequences() {
        let repo = EntityRepository::new(MemoryStore::new());
        let dump = ExportData::collect(&repo);
        assert!(dump.sessions.is_empty());
        assert!(dump.boards.is_empty());
        assert!(dump.players.is_empty());
    }
}
