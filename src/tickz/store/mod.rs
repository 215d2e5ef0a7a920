//! # Storage Layer
//!
//! The [`StorageBackend`] trait handles the "how" of persistence; the stores
//! in `collection.rs` and `list.rs` handle the "what".
//!
//! ## The Blob Contract
//!
//! There is exactly one unit of persistence: the whole [`Collection`],
//! serialized as a single JSON array. It is read once at store construction
//! and fully overwritten on every mutation—read-modify-write-whole, even when
//! only one list's items changed. Absence of the blob is equivalent to an
//! empty collection. With one writer and everything in one blob there is
//! nothing to lock and nothing to merge.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `todos.json` under a data
//!   directory.
//! - [`memory::InMemoryStore`]: holds the serialized blob as an in-memory
//!   string, so tests exercise the real codec on every round trip.

use crate::error::Result;
use crate::model::Collection;

pub mod fs;
pub mod memory;

/// Abstract interface for collection persistence.
pub trait StorageBackend {
    /// Load the full collection; an absent blob loads as empty.
    fn load(&self) -> Result<Collection>;

    /// Overwrite the blob with the full collection.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}
