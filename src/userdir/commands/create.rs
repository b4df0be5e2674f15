use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::UserDraft;
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;
use crate::validation::validate;

pub fn run<B: KeyValueStore>(store: &mut RecordStore<B>, draft: &UserDraft) -> Result<CmdResult> {
    let valid = validate(draft)?;
    let id = store.insert_front(valid)?;

    let mut result = CmdResult::default();
    if let Some(record) = store.get(id) {
        log::info!("created user {} ({})", record.id, record.name);
        result.add_message(CmdMessage::new(
            MessageLevel::Success,
            format!("User added ({}): {}", record.id, record.name),
        ));
        result.affected_records.push(record.clone());
    }
    Ok(result)
}
