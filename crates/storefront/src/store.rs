//! The persistence boundary: an opaque key-value store for state snapshots.
//!
//! The session writes the full serialized snapshot through [`StateStore`]
//! after every mutation and reads each key once at startup. Payloads are
//! self-describing JSON; interpreting them is the session's job, so a store
//! backend only moves strings around.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Well-known store keys.
pub mod keys {
    /// Cart snapshot key.
    pub const CART: &str = "cart";
    /// Wishlist snapshot key.
    pub const WISHLIST: &str = "wishlist";
}

/// Errors from a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium failed (disk unavailable, quota exceeded, ...).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque key-value storage for serialized state.
///
/// Implementations must treat payloads as opaque strings and must not
/// interpret keys beyond using them for addressing.
pub trait StateStore: Send {
    /// Read the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read. An
    /// absent key is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
}

/// In-memory store. Used by tests and as the memory-only fallback when no
/// durable backend is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory.
///
/// The native analogue of browser local storage. Writes go to a temporary
/// file first and are renamed into place so a crash mid-write cannot leave
/// a half-written snapshot behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
