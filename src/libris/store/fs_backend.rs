use super::backend::{Collection, StorageBackend};
use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
    books_file: String,
    members_file: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        let defaults = LibrisConfig::default();
        Self {
            root,
            books_file: defaults.books_file,
            members_file: defaults.members_file,
        }
    }

    /// Use the file names from a loaded configuration.
    pub fn with_config(mut self, config: &LibrisConfig) -> Self {
        self.books_file = config.books_file.clone();
        self.members_file = config.members_file.clone();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Books => &self.books_file,
            Collection::Members => &self.members_file,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(LibrisError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, collection: Collection) -> Result<Option<String>> {
        let path = self.location(collection);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(LibrisError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let target = self.location(collection);

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", collection, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(LibrisError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(LibrisError::Io(e));
        }

        Ok(())
    }

    fn location(&self, collection: Collection) -> PathBuf {
        self.root.join(self.file_name(collection))
    }
}
