use crate::config::DirectoryConfig;
use crate::model::{RecordId, Stats, UserRecord};

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod query;
pub mod stats;
pub mod status;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<UserRecord>,
    pub listed_records: Vec<UserRecord>,
    pub stats: Option<Stats>,
    pub config: Option<DirectoryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<UserRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Id of the first record the command touched, e.g. the one just created.
    pub fn affected_id(&self) -> Option<RecordId> {
        self.affected_records.first().map(|r| r.id)
    }
}

pub(crate) fn not_found_message(id: RecordId) -> CmdMessage {
    CmdMessage::new(MessageLevel::Warning, format!("No user with id {}", id))
}
