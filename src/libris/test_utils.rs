use crate::api::LibraryApi;
use crate::store::catalog::{BookFields, MemberFields};
use crate::store::fs_backend::FsBackend;
use crate::store::CatalogStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A fresh store over the temp directory, already loaded.
    pub fn store(&self) -> CatalogStore<FsBackend> {
        let mut store = CatalogStore::with_backend(FsBackend::new(self.root.clone()));
        store.load().expect("failed to load catalog");
        store
    }

    pub fn api(&self) -> LibraryApi<FsBackend> {
        LibraryApi::open(self.root.clone()).expect("failed to open catalog")
    }

    pub fn read(&self, file: &str) -> String {
        std::fs::read_to_string(self.root.join(file)).unwrap_or_default()
    }
}

pub fn book(title: &str, author: &str, isbn: &str, year: i32, pages: i32) -> BookFields {
    BookFields {
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        year,
        pages,
    }
}

pub fn member(first_name: &str, last_name: &str, number: i32) -> MemberFields {
    MemberFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        number,
    }
}
