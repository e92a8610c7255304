//! # Storage Layer
//!
//! The catalog keeps its books and members in memory and rewrites the matching
//! text file after every change. Two pieces split that work:
//!
//! - [`backend::StorageBackend`]: raw I/O, the "how". Reads and writes the full
//!   text of a [`Collection`]. Knows nothing about records.
//! - [`catalog::CatalogStore`]: the "what". Owns the collections, enforces the
//!   identity keys and drives the codec on load and save.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one file per collection in
//!   a data directory. Writes go to a temp file that is renamed over the target.
//! - [`mem_backend::MemBackend`]: in-memory, for tests. Can simulate write failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── config.json     # file names (optional)
//! ├── books.txt       # one book per line
//! └── members.txt     # one member per line
//! ```
//!
//! A missing file means an empty collection. Every save replaces the whole file;
//! nothing is appended.

pub mod backend;
pub mod catalog;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{Collection, StorageBackend};
pub use catalog::CatalogStore;
