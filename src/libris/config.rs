use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOKS_FILE: &str = "books.txt";
const DEFAULT_MEMBERS_FILE: &str = "members.txt";

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "LIBRIS_HOME";

/// Configuration for libris, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// File holding one book per line
    #[serde(default = "default_books_file")]
    pub books_file: String,

    /// File holding one member per line
    #[serde(default = "default_members_file")]
    pub members_file: String,
}

fn default_books_file() -> String {
    DEFAULT_BOOKS_FILE.to_string()
}

fn default_members_file() -> String {
    DEFAULT_MEMBERS_FILE.to_string()
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            books_file: default_books_file(),
            members_file: default_members_file(),
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "books-file" => Ok(&self.books_file),
            "members-file" => Ok(&self.members_file),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value by its CLI key. File names must be plain names, not paths,
    /// and each collection needs a file of its own.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() || value.contains(['/', '\\']) {
            return Err(LibrisError::Api(format!(
                "'{}' is not a valid file name",
                value
            )));
        }
        let (slot, other) = match key {
            "books-file" => (&mut self.books_file, &self.members_file),
            "members-file" => (&mut self.members_file, &self.books_file),
            _ => return Err(unknown_key(key)),
        };
        if value == other.as_str() || value == CONFIG_FILENAME {
            return Err(LibrisError::Api(format!(
                "'{}' is already in use in the data directory",
                value
            )));
        }
        *slot = value.to_string();
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["books-file", "members-file"]
    }
}

fn unknown_key(key: &str) -> LibrisError {
    LibrisError::Api(format!(
        "Unknown config key '{}'. Known keys: {}",
        key,
        LibrisConfig::keys().join(", ")
    ))
}

/// Pick the data directory: explicit flag, then `LIBRIS_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    directories::ProjectDirs::from("org", "libris", "libris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LibrisError::Store("Could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LibrisConfig::default();
        assert_eq!(config.books_file, "books.txt");
        assert_eq!(config.members_file, "members.txt");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = LibrisConfig::load(dir.path()).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fresh");

        let mut config = LibrisConfig::default();
        config.set("books-file", "libros.txt").unwrap();
        config.save(&target).unwrap();

        let loaded = LibrisConfig::load(&target).unwrap();
        assert_eq!(loaded.books_file, "libros.txt");
        assert_eq!(loaded.members_file, "members.txt");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "members_file": "socios.txt" }"#,
        )
        .unwrap();

        let config = LibrisConfig::load(dir.path()).unwrap();
        assert_eq!(config.books_file, "books.txt");
        assert_eq!(config.members_file, "socios.txt");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            LibrisConfig::load(dir.path()),
            Err(LibrisError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = LibrisConfig::default();
        assert_eq!(config.get("members-file").unwrap(), "members.txt");
        assert!(config.get("colour").is_err());
        assert!(config.set("books-file", "../escape.txt").is_err());
        assert!(config.set("books-file", "").is_err());
        assert_eq!(config.books_file, "books.txt");
    }

    #[test]
    fn test_set_refuses_shared_file_names() {
        let mut config = LibrisConfig::default();
        assert!(config.set("books-file", "members.txt").is_err());
        assert!(config.set("members-file", "books.txt").is_err());
        assert!(config.set("books-file", "config.json").is_err());
        assert_eq!(config, LibrisConfig::default());

        config.set("books-file", "libros.txt").unwrap();
        config.set("members-file", "books.txt").unwrap();
        assert_eq!(config.members_file, "books.txt");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/libris-explicit");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
