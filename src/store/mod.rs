//! Key-value string storage behind the application state.
//!
//! Values are plain strings under fixed keys, see [`keys`]. The SQLite store
//! is the real backend; the memory store serves tests and sessions whose
//! database could not be opened.

pub mod keys;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::ui::messages::warning;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

/// Store used by CLI sessions: SQLite when available, memory otherwise.
pub enum SessionStore {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl SessionStore {
    /// Open the database at `path`; on failure warn and continue in memory.
    pub fn open(path: &str) -> Self {
        match SqliteStore::open(path) {
            Ok(store) => SessionStore::Sqlite(store),
            Err(e) => {
                warning(format!(
                    "Cannot open database '{}': {}. Changes will not be saved.",
                    path, e
                ));
                SessionStore::Memory(MemoryStore::new())
            }
        }
    }

    /// Write an audit line. Never fails the caller.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let SessionStore::Sqlite(store) = self
            && let Err(e) = store.log(operation, target, message)
        {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            SessionStore::Sqlite(s) => s.get(key),
            SessionStore::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        match self {
            SessionStore::Sqlite(s) => s.set(key, value),
            SessionStore::Memory(m) => m.set(key, value),
        }
    }
}
