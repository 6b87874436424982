use serde::{Deserialize, Serialize};

/// A single catalog entry. Field names are the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publication_year: u32,
    pub genre: String,
    pub read_status: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: u32,
        genre: impl Into<String>,
        read_status: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            read_status,
        }
    }

    pub fn read_label(&self) -> &'static str {
        if self.read_status {
            "Read"
        } else {
            "Unread"
        }
    }
}

/// Which field a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

/// The in-memory collection for one session.
///
/// Order is insertion order and is also the display and search order.
/// Removing a book keeps the relative order of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the book at `position`, returning it if the position existed.
    pub fn remove_at(&mut self, position: usize) -> Option<Book> {
        if position < self.books.len() {
            Some(self.books.remove(position))
        } else {
            None
        }
    }

    pub fn read_count(&self) -> usize {
        self.books.iter().filter(|b| b.read_status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_at_preserves_order_of_remaining_books() {
        let mut library = Library::from_books(vec![
            Book::new("A", "x", 1, "g", true),
            Book::new("B", "x", 2, "g", false),
            Book::new("C", "x", 3, "g", true),
        ]);

        let removed = library.remove_at(1).unwrap();
        assert_eq!(removed.title, "B");
        let titles: Vec<_> = library.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut library = Library::from_books(vec![Book::new("A", "x", 1, "g", true)]);
        assert!(library.remove_at(1).is_none());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn serializes_with_expected_keys() {
        let book = Book::new("Dune", "Herbert", 1965, "Sci-Fi", true);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["author"], "Herbert");
        assert_eq!(value["publication_year"], 1965);
        assert_eq!(value["genre"], "Sci-Fi");
        assert_eq!(value["read_status"], true);
    }

    #[test]
    fn read_count_counts_only_read_books() {
        let library = Library::from_books(vec![
            Book::new("A", "x", 1, "g", true),
            Book::new("B", "x", 2, "g", false),
        ]);
        assert_eq!(library.read_count(), 1);
    }
}
