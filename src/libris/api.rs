//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for catalog operations, whatever UI drives them.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds no
//! business logic, performs no terminal I/O and formats nothing for display.
//!
//! ## Generic Over StorageBackend
//!
//! `LibraryApi<B: StorageBackend>` works with any backend:
//! - Production: `LibraryApi<FsBackend>`, built with [`LibraryApi::open`]
//! - Testing: `LibraryApi<MemBackend>`
//!
//! ## Error Model
//!
//! Lookup misses (unknown ISBN or member number) come back as `Ok` with
//! `CmdResult::not_found` set and a warning message. Everything else
//! (duplicate keys, malformed storage, I/O) is an `Err`.

use crate::commands;
use crate::config::LibrisConfig;
use crate::error::Result;
use crate::store::catalog::{BookFields, BookUpdate, MemberFields, MemberUpdate};
use crate::store::fs_backend::FsBackend;
use crate::store::{CatalogStore, StorageBackend};
use std::path::{Path, PathBuf};

pub struct LibraryApi<B: StorageBackend> {
    store: CatalogStore<B>,
    data_dir: PathBuf,
}

impl LibraryApi<FsBackend> {
    /// Open the catalog kept in `data_dir`, honoring its `config.json`.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = LibrisConfig::load(&data_dir)?;
        let backend = FsBackend::new(data_dir.clone()).with_config(&config);
        let mut api = Self::new(CatalogStore::with_backend(backend), data_dir);
        api.load()?;
        Ok(api)
    }
}

impl<B: StorageBackend> LibraryApi<B> {
    pub fn new(store: CatalogStore<B>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn store(&self) -> &CatalogStore<B> {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load(&mut self) -> Result<()> {
        self.store.load()
    }

    pub fn save(&self) -> Result<()> {
        self.store.save()
    }

    // --- Books ---

    pub fn add_book(&mut self, fields: BookFields) -> Result<commands::CmdResult> {
        commands::books::add(&mut self.store, fields)
    }

    pub fn modify_book(&mut self, isbn: &str, update: BookUpdate) -> Result<commands::CmdResult> {
        commands::books::modify(&mut self.store, isbn, update)
    }

    pub fn delete_book(&mut self, isbn: &str) -> Result<commands::CmdResult> {
        commands::books::delete(&mut self.store, isbn)
    }

    pub fn search_books(&self, query: &str) -> Result<commands::CmdResult> {
        commands::books::search(&self.store, query)
    }

    pub fn show_book(&self, isbn: &str) -> Result<commands::CmdResult> {
        commands::books::show(&self.store, isbn)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::books::list(&self.store)
    }

    // --- Members ---

    pub fn add_member(&mut self, fields: MemberFields) -> Result<commands::CmdResult> {
        commands::members::add(&mut self.store, fields)
    }

    pub fn modify_member(
        &mut self,
        number: i32,
        update: MemberUpdate,
    ) -> Result<commands::CmdResult> {
        commands::members::modify(&mut self.store, number, update)
    }

    pub fn delete_member(&mut self, number: i32) -> Result<commands::CmdResult> {
        commands::members::delete(&mut self.store, number)
    }

    pub fn list_members(&self) -> Result<commands::CmdResult> {
        commands::members::list(&self.store)
    }

    // --- Loans ---

    pub fn lend_book(&mut self, isbn: &str, member: i32) -> Result<commands::CmdResult> {
        commands::loans::lend(&mut self.store, isbn, member)
    }

    pub fn return_book(&mut self, isbn: &str, member: i32) -> Result<commands::CmdResult> {
        commands::loans::give_back(&mut self.store, isbn, member)
    }

    // --- Config ---

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::store::catalog::LoanReceipt;
