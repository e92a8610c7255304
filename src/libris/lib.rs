//! # Libris Architecture
//!
//! Libris is a small library catalog: books, members and the borrow/return state
//! of each book, kept in plain `|`-delimited text files between runs.
//!
//! The catalog is a **library that happens to have a CLI client**. Nothing from
//! `api.rs` inward prints, reads the terminal or exits the process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints CmdResult, owns exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the backend      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns catalog outcomes into messages and listings        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore: collections, keys, load/save via codec     │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-operation logic producing `CmdResult`
//! - [`store`]: Catalog store and storage backends
//! - [`model`]: Publications (`Book`, `Magazine`, `Dvd`) and `Member`
//! - [`lending`]: The `Lendable` capability and its two-state machine
//! - [`codec`]: Record ⇄ text line conversion
//! - [`config`]: Configuration and data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod lending;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
