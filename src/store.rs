//! Session-scoped key/value storage injected into [`crate::SearchSession`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::FinderError;

/// Keys a search session reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Last submitted raw input string
    SearchInput,
    /// JSON array of the recipes matched by the last completed search
    SuggestedRecipes,
}

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::SearchInput => "searchInput",
            SessionKey::SuggestedRecipes => "suggestedRecipes",
        }
    }
}

/// Storage that lives as long as one user session.
pub trait SessionStore: Send {
    fn get(&self, key: SessionKey) -> Option<String>;

    fn set(&mut self, key: SessionKey, value: String) -> Result<(), FinderError>;

    /// Drop everything; called when the session ends.
    fn clear(&mut self) -> Result<(), FinderError>;
}

/// In-memory store, gone when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: SessionKey, value: String) -> Result<(), FinderError> {
        self.entries.insert(key.as_str().to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), FinderError> {
        self.entries.clear();
        Ok(())
    }
}

/// Store backed by a JSON object on disk, so a session survives separate
/// invocations of the command line tool.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty session; an
    /// unreadable one is discarded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FinderError> {
        let path = path.as_ref().to_path_buf();
        let entries: HashMap<String, String> = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Opened session file {} ({} keys)", path.display(), entries.len());
        Ok(FileStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), FinderError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: SessionKey, value: String) -> Result<(), FinderError> {
        self.entries.insert(key.as_str().to_string(), value);
        self.flush()
    }

    fn clear(&mut self) -> Result<(), FinderError> {
        self.entries.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(SessionKey::SearchInput.as_str(), "searchInput");
        assert_eq!(SessionKey::SuggestedRecipes.as_str(), "suggestedRecipes");
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.get(SessionKey::SearchInput).is_none());

        store.set(SessionKey::SearchInput, "egg".to_string()).unwrap();
        store.set(SessionKey::SearchInput, "rice".to_string()).unwrap();
        assert_eq!(store.get(SessionKey::SearchInput).as_deref(), Some("rice"));
        assert!(store.get(SessionKey::SuggestedRecipes).is_none());

        store.clear().unwrap();
        assert!(store.get(SessionKey::SearchInput).is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store
            .set(SessionKey::SuggestedRecipes, "[]".to_string())
            .unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(SessionKey::SuggestedRecipes).as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get(SessionKey::SearchInput).is_none());
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(SessionKey::SearchInput, "a, b, c".to_string()).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
