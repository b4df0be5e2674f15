use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a user record.
///
/// Ids are milliseconds since the Unix epoch at creation time, bumped as
/// needed so they stay strictly increasing within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| format!("Invalid user id: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown role: {} (expected one of {})",
                    s,
                    Role::ALL.map(|r| r.as_str()).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// The status the "toggle" button on a row switches to.
    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            _ => Err(format!(
                "Unknown status: {} (expected Active or Inactive)",
                s
            )),
        }
    }
}

/// One entry in the directory. Field order matches the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub status: Status,
}

impl UserRecord {
    pub fn from_valid(id: RecordId, valid: ValidUser) -> Self {
        Self {
            id,
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            role: valid.role,
            status: valid.status,
        }
    }

    /// Overwrite every editable field, leaving the id untouched.
    pub fn apply(&mut self, valid: ValidUser) {
        self.name = valid.name;
        self.email = valid.email;
        self.phone = valid.phone;
        self.role = valid.role;
        self.status = valid.status;
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Unvalidated form contents.
///
/// The default value is the cleared form: empty text, `Admin`, `Active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub status: Status,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: Role::Admin,
            status: Status::Active,
        }
    }
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
        status: Status,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
            status,
        }
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            role: record.role,
            status: record.status,
        }
    }
}

/// A draft that passed validation, with text fields trimmed.
///
/// Only [`crate::validation::validate`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) role: Role,
    pub(crate) status: Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}
