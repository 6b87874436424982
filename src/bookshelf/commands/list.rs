use crate::commands::{number_books, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Library;

pub const EMPTY: &str = "Your library is empty.";

pub fn run(library: &Library) -> Result<CmdResult> {
    if library.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY)));
    }
    Ok(CmdResult::default().with_listed_books(number_books(library.books().iter().enumerate())))
}
