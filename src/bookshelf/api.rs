//! # API Facade
//!
//! [`LibraryApi`] is the single entry point for catalog operations. It owns the
//! store and the session's in-memory [`Library`], and hands a borrow of the
//! library to the matching command for each call.
//!
//! The facade:
//! - **Dispatches** to `commands/*.rs`
//! - **Owns** the collection for the lifetime of a session
//! - **Returns structured types** (`Result<CmdResult>`), never strings or output
//!
//! Everything here is synchronous and single-threaded; there is no locking
//! because nothing else can reach the library.
//!
//! Persistence only happens in [`LibraryApi::open`] and [`LibraryApi::save`].
//! Mutations in between live in memory until the session saves.

use crate::commands::{self, DisplayBook};
use crate::error::Result;
use crate::model::{Book, Library, SearchField};
use crate::store::LibraryStore;

pub struct LibraryApi<S: LibraryStore> {
    store: S,
    library: Library,
}

impl<S: LibraryStore> LibraryApi<S> {
    /// Loads the library from `store`. The result carries any warning about
    /// unreadable data.
    pub fn open(store: S) -> (Self, CmdResult) {
        let (library, result) = commands::load::run(&store);
        (Self { store, library }, result)
    }

    pub fn add_book(&mut self, book: Book) -> Result<CmdResult> {
        commands::add::run(&mut self.library, book)
    }

    pub fn remove_book(&mut self, title: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.library, title)
    }

    pub fn choose_removal(
        &mut self,
        candidates: &[DisplayBook],
        choice: &str,
    ) -> Result<CmdResult> {
        commands::remove::choose(&mut self.library, candidates, choice)
    }

    pub fn search_books(&self, field: SearchField, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.library, field, term)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.library)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.library)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, LibraryStats, MessageLevel};
