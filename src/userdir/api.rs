//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every directory operation, whatever UI sits on top.
//!
//! It:
//! - **Dispatches** to the command functions
//! - **Tracks the form session**: which record, if any, is being edited
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not format output or touch stdout/stderr.
//!
//! ## Form Session
//!
//! A single form serves both "add" and "edit". [`DirectoryApi::begin_edit`]
//! loads a record into a [`UserDraft`] and remembers its id;
//! [`DirectoryApi::submit`] then updates that record instead of creating a
//! new one. A successful submit or [`DirectoryApi::cancel_edit`] returns the
//! form to "add" mode. A rejected submit keeps the edit target so the user
//! can fix the form and try again.
//!
//! ## Generic Over KeyValueStore
//!
//! `DirectoryApi<B: KeyValueStore>` works with any backend:
//! - Production: `DirectoryApi<FileStore>`
//! - Testing: `DirectoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{RecordId, Role, Stats, Status, UserDraft, UserRecord};
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;

pub struct DirectoryApi<B: KeyValueStore> {
    store: RecordStore<B>,
    editing: Option<RecordId>,
}

impl<B: KeyValueStore> DirectoryApi<B> {
    /// Open the collection stored under `key` in `backend`.
    pub fn open(backend: B, key: &str) -> Result<Self> {
        Ok(Self::new(RecordStore::open(backend, key)?))
    }

    pub fn new(store: RecordStore<B>) -> Self {
        Self {
            store,
            editing: None,
        }
    }

    pub fn create_user(&mut self, draft: &UserDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_user(
        &mut self,
        id: RecordId,
        draft: &UserDraft,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete_users(&mut self, ids: &[RecordId]) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, ids)?;
        if self.editing.is_some_and(|id| ids.contains(&id)) {
            self.editing = None;
        }
        Ok(result)
    }

    pub fn set_status(&mut self, id: RecordId, status: Status) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    /// Flip a record between `Active` and `Inactive`.
    pub fn toggle_status(&mut self, id: RecordId) -> Result<commands::CmdResult> {
        let current = commands::get::run(&self.store, id)?.listed_records[0].status;
        self.set_status(id, current.toggled())
    }

    pub fn get_user(&self, id: RecordId) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn query(&self, search: &str, role: Option<Role>) -> Result<commands::CmdResult> {
        commands::query::run(&self.store, &RecordFilter::new(search, role))
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    /// The whole collection, most recent first.
    pub fn records(&self) -> &[UserRecord] {
        self.store.records()
    }

    pub fn current_stats(&self) -> Stats {
        commands::stats::count(self.store.records())
    }

    /// Load record `id` into the form and switch it to edit mode.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<UserDraft> {
        let result = commands::get::run(&self.store, id)?;
        let draft = UserDraft::from(&result.listed_records[0]);
        self.editing = Some(id);
        log::debug!("editing user {}", id);
        Ok(draft)
    }

    /// Save the form: update the record being edited, or create a new one.
    pub fn submit(&mut self, draft: &UserDraft) -> Result<commands::CmdResult> {
        let result = match self.editing {
            Some(id) => commands::update::run(&mut self.store, id, draft)?,
            None => commands::create::run(&mut self.store, draft)?,
        };
        self.editing = None;
        Ok(result)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::query::RecordFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
