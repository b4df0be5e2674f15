use crate::commands::{not_found_message, CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::{RecordId, UserDraft};
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;
use crate::validation::validate;

/// Validate `draft` and write it over record `id`, keeping its position.
///
/// An unknown id is not an error: nothing changes and a warning is attached.
pub fn run<B: KeyValueStore>(
    store: &mut RecordStore<B>,
    id: RecordId,
    draft: &UserDraft,
) -> Result<CmdResult> {
    let valid = validate(draft)?;
    let mut result = CmdResult::default();

    if !store.update(id, valid)? {
        log::warn!("update skipped, no user with id {}", id);
        result.add_message(not_found_message(id));
        return Ok(result);
    }

    if let Some(record) = store.get(id) {
        log::info!("updated user {}", id);
        result.add_message(CmdMessage::new(
            MessageLevel::Success,
            format!("User updated ({}): {}", id, record.name),
        ));
        result.affected_records.push(record.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::{UserdirError, ValidationError};
    use crate::model::{Role, Status};
    use crate::store::memory::InMemoryStore;

    fn seeded() -> RecordStore<InMemoryStore> {
        let mut store = RecordStore::open(InMemoryStore::new(), "users").unwrap();
        for name in ["Ann", "Bo", "Cy"] {
            create::run(
                &mut store,
                &UserDraft::new(
                    name,
                    format!("{}@x.co", name.to_lowercase()),
                    "1",
                    Role::User,
                    Status::Active,
                ),
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn edits_in_place() {
        let mut store = seeded();
        let bo = store.records()[1].id;
        run(
            &mut store,
            bo,
            &UserDraft::new("Bob", "bob@x.co", "42", Role::Admin, Status::Inactive),
        )
        .unwrap();

        let record = &store.records()[1];
        assert_eq!(record.id, bo);
        assert_eq!(record.name, "Bob");
        assert_eq!(record.phone, "42");
        assert_eq!(record.role, Role::Admin);
        assert_eq!(record.status, Status::Inactive);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut store = seeded();
        let before = store.records().to_vec();
        let result = run(
            &mut store,
            RecordId(7),
            &UserDraft::new("Zed", "zed@x.co", "1", Role::User, Status::Active),
        )
        .unwrap();

        assert_eq!(store.records(), before.as_slice());
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn validation_runs_before_lookup() {
        let mut store = seeded();
        let ann = store.records()[2].id;
        let err = run(
            &mut store,
            ann,
            &UserDraft::new("Ann", "ann@x.co", "one", Role::User, Status::Active),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            UserdirError::Validation(ValidationError::InvalidPhone)
        ));
        assert_eq!(store.records()[2].phone, "1");
    }
}
