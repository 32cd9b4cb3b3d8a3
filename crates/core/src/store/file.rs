//! File-based store, one JSON document per key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KvStore, StoreError};

/// File-backed implementation of [`KvStore`].
///
/// Each key becomes `<base_dir>/<key>.json`. Writes go through a temp file
/// followed by a rename, so a crash mid-write never leaves a truncated
/// value behind. Keys are the repository's own (`player-3`,
/// `session-0-games`, ...) and are filesystem-safe by construction.
#[derive(Debug)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) a store rooted at `base_dir`.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.value_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupted {
            key: key.to_owned(),
            reason: e.to_string(),
        })?;

        tracing::debug!(key, path = %path.display(), "loaded value");

        Ok(Some(value))
    }

    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.value_path(key);
        let temp_path = path.with_extension("json.tmp");

        let encoded =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&temp_path, encoded)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(key, path = %path.display(), "stored value");

        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.value_path(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.put("player-count", &3_u32).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get::<u32>("player-count").unwrap(), Some(3));
    }

    #[test]
    fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let value: Option<u32> = store.get("player-count").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.put("board-0", &"Carcassonne").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["board-0.json".to_string()]);
    }
}
