use crate::commands::{not_found_message, CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;

pub fn run<B: KeyValueStore>(store: &mut RecordStore<B>, ids: &[RecordId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match store.remove(id)? {
            Some(record) => {
                log::info!("deleted user {}", id);
                result.add_message(CmdMessage::new(
                    MessageLevel::Success,
                    format!("User deleted ({}): {}", id, record.name),
                ));
                result.affected_records.push(record);
            }
            None => {
                log::warn!("delete skipped, no user with id {}", id);
                result.add_message(not_found_message(id));
            }
        }
    }

    Ok(result)
}
