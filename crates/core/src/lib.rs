//! Core logbook logic shared by every client front-end.
//!
//! `logbook-core` owns the two stateful subsystems of the application: the
//! persisted entity store ([`EntityRepository`] over a pluggable [`KvStore`])
//! and the screen-navigation machine ([`NavState`]). Presentation layers
//! depend on the types re-exported here and never touch storage keys
//! directly.
pub mod entity;
pub mod error;
pub mod export;
pub mod nav;
pub mod repository;
pub mod store;

pub use entity::{
    Board, BoardId, EntityKind, Game, GameId, Player, PlayerId, Score, Session, SessionId,
};
pub use error::{PartialScan, RepositoryError};
pub use export::ExportData;
pub use nav::{NavEvent, NavState, Section};
pub use repository::EntityRepository;
pub use store::{FileStore, KvStore, MemoryStore, StoreError};
