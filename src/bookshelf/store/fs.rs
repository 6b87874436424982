use super::LibraryStore;
use crate::error::{LibraryError, Result};
use crate::model::Book;
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibraryStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            log::debug!("No data file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LibraryError::Io)?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(LibraryError::Serialization)?;
        log::debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LibraryError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(books).map_err(LibraryError::Serialization)?;
        fs::write(&self.path, content).map_err(LibraryError::Io)?;
        log::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true),
            Book::new("Emma", "Jane Austen", 1815, "Classic", false),
            Book::new("dune", "Someone Else", 0, "", false),
        ]
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nope.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_values_and_order() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("library.json"));
        let books = sample_books();

        store.save(&books).unwrap();
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn save_writes_indented_json_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        let mut store = FileStore::new(&path);
        store.save(&sample_books()[..1]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\n  {"));
        assert!(raw.contains("\"publication_year\": 1965"));
        assert!(raw.contains("\"read_status\": true"));
    }

    #[test]
    fn load_corrupt_file_is_serialization_error_and_file_is_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(
            store.load(),
            Err(LibraryError::Serialization(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn load_rejects_negative_year() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        fs::write(
            &path,
            r#"[{"title":"T","author":"A","publication_year":-3,"genre":"G","read_status":true}]"#,
        )
        .unwrap();

        assert!(FileStore::new(&path).load().is_err());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        fs::write(&path, "garbage").unwrap();
        let mut store = FileStore::new(&path);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested").join("library.json"));
        store.save(&sample_books()).unwrap();
        assert_eq!(store.load().unwrap().len(), 3);
    }
}
