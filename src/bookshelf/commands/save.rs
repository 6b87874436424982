use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Library;
use crate::store::LibraryStore;

pub const SAVED: &str = "Library saved to file. Goodbye!";

/// Writes the whole library back to the store. Only called on exit.
pub fn run<S: LibraryStore>(store: &mut S, library: &Library) -> Result<CmdResult> {
    match store.save(library.books()) {
        Ok(()) => Ok(CmdResult::default().with_message(CmdMessage::success(SAVED))),
        Err(e) => {
            log::warn!("Saving to {} failed: {}", store.location(), e);
            Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "Could not save library to {}: {}",
                store.location(),
                e
            ))))
        }
    }
}
