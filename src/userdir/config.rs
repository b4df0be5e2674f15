use crate::error::{Result, UserdirError};
use crate::model::{Role, Status};
use crate::store::record_store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["storage-key", "default-role", "default-status"];

/// Configuration for a directory, stored in `{data-dir}/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Key the record collection is stored under
    pub storage_key: String,

    /// Role a cleared form starts with
    pub default_role: Role,

    /// Status a cleared form starts with
    pub default_status: Status,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_role: Role::Admin,
            default_status: Status::Active,
        }
    }
}

impl DirectoryConfig {
    /// Read `config.json` from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        match fs::read_to_string(dir.join(CONFIG_FILENAME)) {
            Ok(raw) => serde_json::from_str(&raw).map_err(UserdirError::Serialization),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(UserdirError::Io(e)),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(UserdirError::Io)?;
        let raw = serde_json::to_string_pretty(self).map_err(UserdirError::Serialization)?;
        fs::write(dir.join(CONFIG_FILENAME), raw).map_err(UserdirError::Io)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "default-role" => Some(self.default_role.to_string()),
            "default-status" => Some(self.default_status.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
                if !valid {
                    return Err(format!("Invalid storage key: {}", value));
                }
                self.storage_key = value.to_string();
            }
            "default-role" => self.default_role = value.parse()?,
            "default-status" => self.default_status = value.parse()?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
