//! # Bookshelf Architecture
//!
//! Bookshelf is a personal library catalog: a list of books kept in a JSON file,
//! edited through an interactive menu. The catalog logic is a library; the menu
//! is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, retry loops, colored output          │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the session's Library                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, remove, search, list, stats, load, save             │
//! │  - Operates on Rust types, no I/O                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - LibraryStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Lifecycle
//!
//! The library is read once when a session opens and written once when the
//! user exits through the menu. Everything in between happens in memory. A
//! missing data file is an empty library; an unreadable one is an empty library
//! plus a warning, and the next save overwrites it.
//!
//! ## Identity
//!
//! Books have no id. Removal matches titles case-insensitively and, when more
//! than one book matches, asks which of the matches to drop. The chosen match
//! carries its position in the library, so the number the user types is never
//! read as a position in the whole collection.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book` and `Library`
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
