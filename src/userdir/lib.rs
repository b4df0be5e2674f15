//! # Userdir Architecture
//!
//! Userdir is a **UI-agnostic user directory library**: an ordered list of user
//! records with add, edit, delete, status toggling, search and role filtering,
//! persisted to a key-value text store. The command-line client in `main.rs`
//! is one possible front end; a web page or TUI could drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints the table, handles exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the form session (current edit target)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, create/update/delete/status/query/stats      │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: ordered list, persisted after each change   │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. Diagnostics go through the `log` facade; the binary decides
//! whether anything is listening.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore`. Most coverage lives here.
//! 2. **API**: form-session behaviour and dispatch.
//! 3. **Storage**: `FileStore` round trips in `tests/`, using temp dirs.
//! 4. **CLI**: end-to-end runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`UserRecord`, `UserDraft`, `Role`, `Status`)
//! - [`validation`]: Form field checks
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
