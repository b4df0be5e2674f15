use super::KeyValueStore;
use crate::error::{Result, UserdirError};
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`. Keys are restricted to
    /// `[A-Za-z0-9_-]` so they cannot escape the root directory.
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(UserdirError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(UserdirError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(UserdirError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        self.ensure_dir()?;

        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp, value).map_err(UserdirError::Io)?;
        fs::rename(&tmp, &path).map_err(UserdirError::Io)?;
        log::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(UserdirError::Io)?;
        }
        Ok(())
    }
}
