use crate::commands::{not_found_message, CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::{RecordId, Status};
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;

pub fn run<B: KeyValueStore>(
    store: &mut RecordStore<B>,
    id: RecordId,
    status: Status,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !store.set_status(id, status)? {
        log::warn!("status change skipped, no user with id {}", id);
        result.add_message(not_found_message(id));
        return Ok(result);
    }

    if let Some(record) = store.get(id) {
        log::info!("user {} is now {}", id, status);
        let verb = match status {
            Status::Active => "activated",
            Status::Inactive => "deactivated",
        };
        result.add_message(CmdMessage::new(
            MessageLevel::Success,
            format!("User {} ({}): {}", verb, id, record.name),
        ));
        result.affected_records.push(record.clone());
    }
    Ok(result)
}
