use super::KeyValueStore;
use crate::error::{Result, UserdirError};
use crate::model::{RecordId, Status, UserRecord, ValidUser};
use chrono::Utc;

pub const DEFAULT_STORAGE_KEY: &str = "users";

/// The ordered record collection and its persistence.
///
/// Records are kept most-recent-first. The list is read from the backend
/// once, in [`RecordStore::open`], and written back in full after every
/// mutation.
pub struct RecordStore<B: KeyValueStore> {
    backend: B,
    key: String,
    records: Vec<UserRecord>,
    last_id: Option<RecordId>,
}

impl<B: KeyValueStore> RecordStore<B> {
    /// Load the collection stored under `key`. A missing key is an empty
    /// directory; an unreadable value is an error.
    pub fn open(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let records: Vec<UserRecord> = match backend.get_item(&key)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(UserdirError::Serialization)?
            }
            _ => Vec::new(),
        };
        log::debug!("loaded {} user(s) from key {:?}", records.len(), key);

        let last_id = records.iter().map(|r| r.id).max();
        Ok(Self {
            backend,
            key,
            records,
            last_id,
        })
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Insert a new record at the head of the list and persist.
    pub fn insert_front(&mut self, user: ValidUser) -> Result<RecordId> {
        let id = self.next_id()?;
        self.records.insert(0, UserRecord::from_valid(id, user));
        self.persist()?;
        Ok(id)
    }

    /// Replace the editable fields of `id` in place. Returns `false` and
    /// leaves storage untouched if there is no such record.
    pub fn update(&mut self, id: RecordId, user: ValidUser) -> Result<bool> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        record.apply(user);
        self.persist()?;
        Ok(true)
    }

    /// Remove `id` if present. The collection is persisted either way.
    pub fn remove(&mut self, id: RecordId) -> Result<Option<UserRecord>> {
        let position = self.records.iter().position(|r| r.id == id);
        let removed = position.map(|pos| self.records.remove(pos));
        self.persist()?;
        Ok(removed)
    }

    /// Set the status of `id`. Returns `false` if there is no such record.
    pub fn set_status(&mut self, id: RecordId, status: Status) -> Result<bool> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        record.status = status;
        self.persist()?;
        Ok(true)
    }

    pub fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.records).map_err(UserdirError::Serialization)?;
        self.backend.set_item(&self.key, &raw)?;
        log::debug!("persisted {} user(s)", self.records.len());
        Ok(())
    }

    /// Wall-clock milliseconds, bumped past the last id handed out.
    fn next_id(&mut self) -> Result<RecordId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = match self.last_id {
            Some(RecordId(last)) if now <= last => last
                .checked_add(1)
                .map(RecordId)
                .ok_or_else(|| UserdirError::Store("id space exhausted".to_string()))?,
            _ => RecordId(now),
        };
        self.last_id = Some(id);
        Ok(id)
    }
}
