use super::LibraryStore;
use crate::error::{LibraryError, Result};
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Option<Vec<Book>>,
    corrupt: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `books`, as if saved by an earlier run.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            ..Self::default()
        }
    }

    /// A store whose contents cannot be read back.
    pub fn corrupted() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    /// The last saved collection, or `None` if nothing was ever written.
    pub fn saved(&self) -> Option<&[Book]> {
        self.books.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LibraryStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        if self.corrupt {
            return Err(LibraryError::Serialization(serde::de::Error::custom(
                "corrupt in-memory payload",
            )));
        }
        Ok(self.books.clone().unwrap_or_default())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = Some(books.to_vec());
        self.corrupt = false;
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(mut self, book: Book) -> Self {
            self.store.books.get_or_insert_with(Vec::new).push(book);
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    2000 + i as u32,
                    "Fiction",
                    i % 2 == 0,
                );
                self = self.push(book);
            }
            self
        }

        pub fn with_book(self, title: &str, author: &str, read: bool) -> Self {
            self.push(Book::new(title, author, 1965, "Sci-Fi", read))
        }

        pub fn corrupt(mut self) -> Self {
            // Keeps any seeded books so a later save can be seen replacing them.
            self.store.corrupt = true;
            self
        }
    }
}
