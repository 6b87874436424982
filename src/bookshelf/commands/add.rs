use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::{Book, Library};

pub const INVALID_YEAR: &str = "Invalid year. Please enter a valid positive integer.";
pub const INVALID_READ_STATUS: &str = "Invalid input. Please enter 'yes' or 'no'.";

/// Parses a publication year. Zero is allowed, negatives and non-numbers are not.
///
/// Single underscores between digits are accepted as separators (`1_984`).
pub fn parse_year(input: &str) -> Result<u32> {
    strip_digit_separators(input.trim())
        .and_then(|digits| digits.parse::<i64>().ok())
        .and_then(|year| u32::try_from(year).ok())
        .ok_or_else(|| LibraryError::InvalidInput(INVALID_YEAR.to_string()))
}

/// Returns the signed digit string with separators removed, or `None` when an
/// underscore is leading, trailing or doubled.
fn strip_digit_separators(input: &str) -> Option<String> {
    let (sign, digits) = match input.strip_prefix(['+', '-']) {
        Some(rest) => (&input[..1], rest),
        None => ("", input),
    };
    let mut out = String::from(sign);
    for group in digits.split('_') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}

/// Accepts `yes`/`y` and `no`/`n` in any case.
pub fn parse_read_status(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(LibraryError::InvalidInput(INVALID_READ_STATUS.to_string())),
    }
}

pub fn run(library: &mut Library, book: Book) -> Result<CmdResult> {
    let book = Book {
        title: book.title.trim().to_string(),
        author: book.author.trim().to_string(),
        genre: book.genre.trim().to_string(),
        ..book
    };
    library.push(book.clone());

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(CmdMessage::success("Book added successfully!")))
}
