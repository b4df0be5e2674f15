use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Stats, UserRecord};
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;

pub fn count(records: &[UserRecord]) -> Stats {
    let total = records.len();
    let active = records.iter().filter(|r| r.is_active()).count();
    Stats {
        total,
        active,
        inactive: total - active,
    }
}

pub fn run<B: KeyValueStore>(store: &RecordStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(count(store.records())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete, status};
    use crate::model::{Role, Status, UserDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_directory() {
        let store = RecordStore::open(InMemoryStore::new(), "users").unwrap();
        assert_eq!(run(&store).unwrap().stats, Some(Stats::default()));
    }

    #[test]
    fn totals_always_add_up() {
        let mut store = RecordStore::open(InMemoryStore::new(), "users").unwrap();
        let check = |store: &RecordStore<InMemoryStore>| {
            let s = run(store).unwrap().stats.unwrap();
            assert_eq!(s.total, s.active + s.inactive);
            assert_eq!(s.total, store.records().len());
            s
        };

        for (i, status) in [Status::Active, Status::Inactive, Status::Active]
            .into_iter()
            .enumerate()
        {
            create::run(
                &mut store,
                &UserDraft::new(format!("U{}", i), "u@x.co", "1", Role::User, status),
            )
            .unwrap();
            check(&store);
        }
        assert_eq!(check(&store).active, 2);

        let first = store.records()[0].id;
        status::run(&mut store, first, Status::Inactive).unwrap();
        assert_eq!(check(&store).inactive, 2);

        delete::run(&mut store, &[first]).unwrap();
        let s = check(&store);
        assert_eq!((s.total, s.active, s.inactive), (2, 1, 1));
    }
}
