//! Local storage layer (key/value blobs).
//!
//! Collections are persisted as whole serialized blobs under fixed,
//! versioned keys. The backend never inspects blob contents; the stores
//! own serialization and validation.

use std::cell::RefCell;
use std::rc::Rc;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage keys as constants.
///
/// Keys are versioned so a future incompatible schema change can move to a
/// new key without corrupting data written under the old one.
pub mod keys {
    /// Routine collection blob (a bare JSON array)
    pub const ROUTINES: &str = "progress-tracker:routines:v1";
    /// Completion collection blob (a JSON object wrapping a `completions` array)
    pub const COMPLETIONS: &str = "progress-tracker:completions:v1";
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// A string-by-key storage capability.
///
/// Injected explicitly into each store at construction. Reads are treated
/// as fallible only at load time (a missing or unreadable value degrades
/// to `None`); writes report failure to the caller.
pub trait StorageBackend {
    /// Read the raw stored string for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the stored string for `key` wholesale.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
///
/// The process is single-threaded by contract (single logical writer), so
/// `Rc<RefCell<..>>` is the whole concurrency story.
pub type SharedStorage = Rc<RefCell<dyn StorageBackend>>;

/// Wrap a backend into a [`SharedStorage`] handle.
pub fn shared<S: StorageBackend + 'static>(backend: S) -> SharedStorage {
    Rc::new(RefCell::new(backend))
}
