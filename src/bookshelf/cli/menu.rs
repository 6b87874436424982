use bookshelf::error::LibraryError;
use std::str::FromStr;

pub(crate) const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 6.";

pub(crate) const MENU: &[&str] = &[
    "Welcome to your Personal Library Manager!",
    "1. Add a book",
    "2. Remove a book",
    "3. Search for a book",
    "4. Display all books",
    "5. Display statistics",
    "6. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Add,
    Remove,
    Search,
    List,
    Stats,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Remove),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::List),
            "5" => Ok(MenuChoice::Stats),
            "6" => Ok(MenuChoice::Exit),
            _ => Err(LibraryError::InvalidInput(INVALID_CHOICE.to_string())),
        }
    }
}
