use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Library;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
}

impl LibraryStats {
    pub fn of(library: &Library) -> Self {
        Self {
            total: library.len(),
            read: library.read_count(),
        }
    }

    /// Share of read books in percent. An empty library is 0.
    pub fn percent_read(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.read as f64 / self.total as f64 * 100.0
    }

    /// [`percent_read`](Self::percent_read) to one decimal place, e.g. `66.7`.
    pub fn percent_read_display(&self) -> String {
        format!("{:.1}", self.percent_read())
    }
}

pub fn run(library: &Library) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(LibraryStats::of(library)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;

    fn library_with(read: usize, unread: usize) -> Library {
        let mut books = Vec::new();
        for i in 0..read {
            books.push(Book::new(format!("R{}", i), "a", 1, "g", true));
        }
        for i in 0..unread {
            books.push(Book::new(format!("U{}", i), "a", 1, "g", false));
        }
        Library::from_books(books)
    }

    #[test]
    fn empty_library_is_zero_percent() {
        let stats = run(&Library::new()).unwrap().stats.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percent_read_display(), "0.0");
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(LibraryStats::of(&library_with(2, 1)).percent_read_display(), "66.7");
        assert_eq!(LibraryStats::of(&library_with(1, 2)).percent_read_display(), "33.3");
        assert_eq!(LibraryStats::of(&library_with(1, 7)).percent_read_display(), "12.5");
        assert_eq!(LibraryStats::of(&library_with(3, 0)).percent_read_display(), "100.0");
        assert_eq!(LibraryStats::of(&library_with(0, 4)).percent_read_display(), "0.0");
    }

    #[test]
    fn counts_total_and_read() {
        let stats = LibraryStats::of(&library_with(2, 3));
        assert_eq!(stats, LibraryStats { total: 5, read: 2 });
    }
}
