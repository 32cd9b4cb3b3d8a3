//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration required to open the store and size the UI.
#[derive(Clone, Debug)]
pub struct LogbookConfig {
    pub data_dir: PathBuf,
    pub message_capacity: usize,
}

impl LogbookConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOGBOOK_DATA_DIR` - storage directory (default: platform data dir)
    /// - `LOGBOOK_MESSAGE_CAPACITY` - status log capacity (default: 64)
    pub fn from_env() -> Self {
        let data_dir = env::var("LOGBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let mut config = Self {
            data_dir,
            message_capacity: 64,
        };

        if let Some(capacity) = read_env::<usize>("LOGBOOK_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }

        config
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "logbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("logbook-data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
