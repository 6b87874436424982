//! # Storage Layer
//!
//! The [`LibraryStore`] trait is the load/save boundary between the in-memory
//! [`Library`](crate::model::Library) and wherever the books live between runs.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole collection is one JSON array in a single file
//!     (`library.json` in the working directory unless configured otherwise)
//!   - Written pretty-printed so it stays hand-editable
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be seeded with a corrupt payload to exercise recovery paths
//!
//! ## Contract
//!
//! - `load` on a store that has never been written returns an empty list, not an error.
//! - `load` on unreadable content returns `LibraryError::Serialization`; deciding what
//!   to do about it (warn and start empty) is the caller's job.
//! - `save` overwrites everything. There is no merge, no backup, no atomic rename.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

pub trait LibraryStore {
    /// Read every stored book, in stored order.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human-readable description of where the data lives.
    fn location(&self) -> String;
}
