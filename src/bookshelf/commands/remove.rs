use crate::commands::{number_books, CmdMessage, CmdResult, DisplayBook};
use crate::error::{LibraryError, Result};
use crate::model::Library;

pub const NOT_FOUND: &str = "No book found with that title.";
pub const REMOVED: &str = "Book removed successfully!";
pub const INVALID_CHOICE: &str = "Invalid choice.";
pub const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";

/// Books whose title equals `title` ignoring case. Substrings do not count.
pub fn matching(library: &Library, title: &str) -> Vec<DisplayBook> {
    let wanted = title.trim().to_lowercase();
    number_books(
        library
            .books()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.title.to_lowercase() == wanted),
    )
}

/// Removes the single book titled `title`.
///
/// With more than one match nothing is removed; the matches come back as
/// `candidates` and the caller finishes with [`choose`].
pub fn run(library: &mut Library, title: &str) -> Result<CmdResult> {
    let mut matches = matching(library, title);

    match matches.len() {
        0 => Ok(CmdResult::default().with_message(CmdMessage::error(NOT_FOUND))),
        1 => {
            let only = matches.remove(0);
            remove_candidate(library, &only)
        }
        _ => Ok(CmdResult::default()
            .with_candidates(matches)
            .with_message(CmdMessage::info("Multiple books found with that title:"))),
    }
}

/// Resolves an ambiguous removal. `choice` is the 1-based number of the
/// candidate as it was shown, not a position in the whole library.
pub fn choose(
    library: &mut Library,
    candidates: &[DisplayBook],
    choice: &str,
) -> Result<CmdResult> {
    let number: i64 = match choice.trim().parse() {
        Ok(n) => n,
        Err(_) => return Ok(CmdResult::default().with_message(CmdMessage::error(NOT_A_NUMBER))),
    };

    let picked = candidates
        .iter()
        .find(|c| i64::try_from(c.index).map(|i| i == number).unwrap_or(false));

    match picked {
        Some(candidate) => remove_candidate(library, candidate),
        None => Ok(CmdResult::default().with_message(CmdMessage::error(INVALID_CHOICE))),
    }
}

fn remove_candidate(library: &mut Library, candidate: &DisplayBook) -> Result<CmdResult> {
    // Positions are only trusted while the book there is still the one that was listed.
    let position = if library.books().get(candidate.position) == Some(&candidate.book) {
        candidate.position
    } else {
        library
            .books()
            .iter()
            .position(|b| b == &candidate.book)
            .ok_or_else(|| {
                LibraryError::Store(format!("Book no longer in library: {}", candidate.book.title))
            })?
    };

    let removed = library
        .remove_at(position)
        .ok_or_else(|| LibraryError::Store(format!("No book at position {}", position)))?;

    Ok(CmdResult::default()
        .with_affected_books(vec![removed])
        .with_message(CmdMessage::success(REMOVED)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;

    fn dune_twice() -> Library {
        Library::from_books(vec![
            Book::new("Dune", "Herbert", 1965, "Sci-Fi", true),
            Book::new("Emma", "Austen", 1815, "Classic", false),
            Book::new("Dune", "Herbert", 1965, "Sci-Fi", false),
        ])
    }

    #[test]
    fn single_match_is_removed_case_insensitively() {
        let mut library = Library::from_books(vec![
            Book::new("Emma", "Austen", 1815, "Classic", false),
            Book::new("Dune", "Herbert", 1965, "Sci-Fi", true),
            Book::new("Ulysses", "Joyce", 1922, "Modernist", false),
        ]);

        let result = run(&mut library, "  dUNE ").unwrap();
        assert!(!result.needs_choice());
        assert_eq!(result.messages[0].content, REMOVED);
        assert_eq!(result.affected_books[0].title, "Dune");
        let titles: Vec<_> = library.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Emma", "Ulysses"]);
    }

    #[test]
    fn no_match_leaves_library_unchanged() {
        let mut library = dune_twice();
        let before = library.clone();

        let result = run(&mut library, "Dun").unwrap();
        assert_eq!(result.messages[0].content, NOT_FOUND);
        assert_eq!(library, before);
    }

    #[test]
    fn multiple_matches_defer_to_a_choice() {
        let mut library = dune_twice();
        let result = run(&mut library, "dune").unwrap();

        assert_eq!(library.len(), 3);
        assert_eq!(result.candidates.len(), 2);
        assert_eq!(result.candidates[0].index, 1);
        assert_eq!(result.candidates[0].position, 0);
        assert_eq!(result.candidates[1].index, 2);
        assert_eq!(result.candidates[1].position, 2);
    }

    #[test]
    fn choosing_second_match_removes_only_the_unread_copy() {
        let mut library = dune_twice();
        let pending = run(&mut library, "dune").unwrap();

        let result = choose(&mut library, &pending.candidates, "2").unwrap();
        assert_eq!(result.messages[0].content, REMOVED);
        assert_eq!(library.len(), 2);
        assert!(library.books()[0].read_status);
        assert_eq!(library.books()[1].title, "Emma");
    }

    #[test]
    fn choice_index_is_relative_to_matches_not_library() {
        let mut library = dune_twice();
        let pending = run(&mut library, "dune").unwrap();

        // "2" would be Emma if read against the whole library.
        choose(&mut library, &pending.candidates, "2").unwrap();
        assert!(library.books().iter().any(|b| b.title == "Emma"));
    }

    #[test]
    fn out_of_range_choice_aborts() {
        let mut library = dune_twice();
        let pending = run(&mut library, "dune").unwrap();

        for bad in ["0", "3", "-1"] {
            let result = choose(&mut library, &pending.candidates, bad).unwrap();
            assert_eq!(result.messages[0].content, INVALID_CHOICE);
        }
        assert_eq!(library, dune_twice());
    }

    #[test]
    fn non_numeric_choice_aborts() {
        let mut library = dune_twice();
        let pending = run(&mut library, "dune").unwrap();

        let result = choose(&mut library, &pending.candidates, "second").unwrap();
        assert_eq!(result.messages[0].content, NOT_A_NUMBER);
        assert_eq!(library, dune_twice());
    }
}
