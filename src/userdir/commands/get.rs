use crate::commands::CmdResult;
use crate::error::{Result, UserdirError};
use crate::model::RecordId;
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;

/// Look up a single record. Unlike the mutating commands, a missing id is an
/// error here: there is nothing to show.
pub fn run<B: KeyValueStore>(store: &RecordStore<B>, id: RecordId) -> Result<CmdResult> {
    let record = store.get(id).ok_or(UserdirError::NotFound(id))?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{Role, Status, UserDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_record() {
        let mut store = RecordStore::open(InMemoryStore::new(), "users").unwrap();
        let id = create::run(
            &mut store,
            &UserDraft::new("Ann", "ann@x.co", "1", Role::User, Status::Active),
        )
        .unwrap()
        .affected_id()
        .unwrap();

        let result = run(&store, id).unwrap();
        assert_eq!(result.listed_records[0].name, "Ann");
    }

    #[test]
    fn missing_record_is_not_found() {
        let store = RecordStore::open(InMemoryStore::new(), "users").unwrap();
        assert!(matches!(
            run(&store, RecordId(9)),
            Err(UserdirError::NotFound(RecordId(9)))
        ));
    }
}
