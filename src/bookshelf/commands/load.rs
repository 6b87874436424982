use crate::commands::{CmdMessage, CmdResult};
use crate::model::Library;
use crate::store::LibraryStore;

pub const UNREADABLE: &str = "Error reading library file. Starting with empty library.";

/// Builds the session library from the store.
///
/// Never fails: a store that cannot be read yields an empty library and a
/// warning. The stored data is left as is until the next save replaces it.
pub fn run<S: LibraryStore>(store: &S) -> (Library, CmdResult) {
    match store.load() {
        Ok(books) => (Library::from_books(books), CmdResult::default()),
        Err(e) => {
            log::warn!("Could not read {}: {}", store.location(), e);
            (
                Library::new(),
                CmdResult::default().with_message(CmdMessage::warning(UNREADABLE)),
            )
        }
    }
}
