use crate::commands::{number_books, CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::{Library, SearchField};

pub const INVALID_FIELD: &str = "Invalid choice.";
pub const NO_MATCHES: &str = "No matching books found.";

/// `1` searches titles, `2` searches authors. Anything else is rejected.
pub fn parse_field(input: &str) -> Result<SearchField> {
    match input.trim() {
        "1" => Ok(SearchField::Title),
        "2" => Ok(SearchField::Author),
        _ => Err(LibraryError::InvalidInput(INVALID_FIELD.to_string())),
    }
}

/// Case-insensitive substring search over one field, in library order.
pub fn run(library: &Library, field: SearchField, term: &str) -> Result<CmdResult> {
    let term_lower = term.trim().to_lowercase();

    let listed = number_books(
        library
            .books()
            .iter()
            .enumerate()
            .filter(|(_, b)| field.value_of(b).to_lowercase().contains(&term_lower)),
    );

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCHES));
    }
    Ok(result.with_listed_books(listed))
}
