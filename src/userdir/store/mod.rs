//! # Storage Layer
//!
//! Persistence is a flat key-value text store, the same shape as browser
//! local storage: string keys mapping to string values. The [`KeyValueStore`]
//! trait hides where those strings live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One file per key: `{root}/{key}.json`
//!   - Writes go to a temp file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Record Collection
//!
//! [`record_store::RecordStore`] sits on top of a backend. It owns the ordered
//! record list, loads it once on open, and writes the whole list back under a
//! single key after every mutation:
//!
//! ```text
//! {data-dir}/
//! ├── users.json     # JSON array of {id, name, email, phone, role, status}
//! └── config.json    # Directory configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod record_store;

/// Abstract interface for raw key-value persistence.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the key was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
