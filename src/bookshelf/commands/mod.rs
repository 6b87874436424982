use crate::model::Book;

pub mod add;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;
pub mod search;
pub mod stats;

pub use stats::LibraryStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A book as shown to the user: its 1-based number in the listing plus its
/// position in the library at the time it was listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    pub index: usize,
    pub position: usize,
    pub book: Book,
}

/// Numbers `(position, book)` pairs from 1 in iteration order.
pub fn number_books<'a, I>(books: I) -> Vec<DisplayBook>
where
    I: IntoIterator<Item = (usize, &'a Book)>,
{
    books
        .into_iter()
        .enumerate()
        .map(|(i, (position, book))| DisplayBook {
            index: i + 1,
            position,
            book: book.clone(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    /// Matches the user still has to pick from before anything changes.
    pub candidates: Vec<DisplayBook>,
    pub stats: Option<LibraryStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_candidates(mut self, books: Vec<DisplayBook>) -> Self {
        self.candidates = books;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn needs_choice(&self) -> bool {
        !self.candidates.is_empty()
    }
}
