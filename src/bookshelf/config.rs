use crate::error::{LibraryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "bookshelf.json";
pub const DEFAULT_DATA_FILE: &str = "library.json";

/// Configuration for bookshelf, stored in bookshelf.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Where the catalog is read from and written to. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibraryError::Io)?;
        let config: LibraryConfig =
            serde_json::from_str(&content).map_err(LibraryError::Serialization)?;
        Ok(config)
    }

    /// Replaces the data file when an override is given.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.data_file, PathBuf::from("library.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LibraryConfig::load(temp.path()).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_load_data_file_from_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "data_file": "books/catalog.json" }"#,
        )
        .unwrap();

        let loaded = LibraryConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("books/catalog.json"));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{\"theme\": \"dark\"}").unwrap();

        let loaded = LibraryConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, LibraryConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(LibraryConfig::load(temp.path()).is_err());
    }

    #[test]
    fn test_override_data_file() {
        let config = LibraryConfig::default().with_data_file(Some(PathBuf::from("other.json")));
        assert_eq!(config.data_file, PathBuf::from("other.json"));

        let config = LibraryConfig::default().with_data_file(None);
        assert_eq!(config.data_file, PathBuf::from("library.json"));
    }
}
