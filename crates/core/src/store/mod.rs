//! Key-value persistence backing the entity repository.
//!
//! Values are JSON-encoded: the store contract requires a stable,
//! self-describing encoding with lossless round-trips for integers and
//! single-precision scores.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String-keyed store of structured values.
///
/// An absent key reads back as `None` (never an error); an undecodable
/// value is [`StoreError::Corrupted`]. There are no transactions: each
/// `put` stands alone, and multi-key sequences in the repository layer are
/// best-effort.
pub trait KvStore: Send + Sync {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;

    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;

    fn exists(&self, key: &str) -> Result<bool, StoreError>;
}
