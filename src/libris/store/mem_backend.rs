use super::backend::{Collection, StorageBackend};
use crate::error::{LibrisError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded,
/// letting the `StorageBackend` trait keep `&self` on every method.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<Collection, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with raw text, as if an earlier run had saved it.
    pub fn with_content(self, collection: Collection, text: &str) -> Self {
        self.files.borrow_mut().insert(collection, text.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far, across all collections.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw stored text, for assertions.
    pub fn content(&self, collection: Collection) -> Option<String> {
        self.files.borrow().get(&collection).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.content(collection))
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(LibrisError::Store("Simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(collection, content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, collection: Collection) -> PathBuf {
        PathBuf::from(format!("memory://{}", collection))
    }
}
