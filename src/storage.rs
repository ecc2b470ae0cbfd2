/// Key-value persistence for the access flag
///
/// The gate only needs `get`/`set` on string keys, so that is the whole
/// trait. The app injects a file-backed store; tests inject an in-memory
/// one. The file store keeps a flat JSON object in the user data
/// directory, the same place the rest of the app keeps per-user state.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access the flag store: {0}")]
    Io(#[from] std::io::Error),
    #[error("flag store is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Minimal persistent string store.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON-file-backed store.
///
/// The file lives at:
/// - Linux: ~/.local/share/onsen-estate/flags.json
/// - macOS: ~/Library/Application Support/onsen-estate/flags.json
/// - Windows: %APPDATA%\onsen-estate\flags.json
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the default per-user store, creating an empty one if the
    /// file does not exist yet.
    pub fn open_default() -> Result<Self, StoreError> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| std::io::Error::other("no user data directory"))?;
        path.push("onsen-estate");
        path.push("flags.json");
        Self::open(path)
    }

    /// Open a store at an explicit path.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };
        Ok(FileStore { path, values })
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Volatile store. Used in tests, and as the runtime fallback when the
/// user data directory is unusable (the gate then simply asks again next
/// session).
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
