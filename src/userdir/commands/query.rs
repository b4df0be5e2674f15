use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Role, UserRecord};
use crate::store::record_store::RecordStore;
use crate::store::KeyValueStore;

/// Search box and role dropdown. Empty search and `None` role match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub search: String,
    pub role: Option<Role>,
}

impl RecordFilter {
    pub fn new(search: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            search: search.into(),
            role,
        }
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        let name_ok = self.search.is_empty()
            || record
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let role_ok = self.role.map_or(true, |role| record.role == role);
        name_ok && role_ok
    }
}

pub fn run<B: KeyValueStore>(store: &RecordStore<B>, filter: &RecordFilter) -> Result<CmdResult> {
    let listed: Vec<UserRecord> = store
        .records()
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{Status, UserDraft};
    use crate::store::memory::InMemoryStore;

    fn seeded() -> RecordStore<InMemoryStore> {
        let mut store = RecordStore::open(InMemoryStore::new(), "users").unwrap();
        let people = [
            ("Annabel", Role::Admin),
            ("Bo", Role::User),
            ("Hannah", Role::User),
            ("Cy", Role::Editor),
        ];
        for (name, role) in people {
            create::run(
                &mut store,
                &UserDraft::new(name, "u@x.co", "1", role, Status::Active),
            )
            .unwrap();
        }
        store
    }

    fn names(store: &RecordStore<InMemoryStore>, filter: RecordFilter) -> Vec<String> {
        run(store, &filter)
            .unwrap()
            .listed_records
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn empty_filter_lists_all_most_recent_first() {
        let store = seeded();
        assert_eq!(
            names(&store, RecordFilter::default()),
            ["Cy", "Hannah", "Bo", "Annabel"]
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = seeded();
        assert_eq!(
            names(&store, RecordFilter::new("ANN", None)),
            ["Hannah", "Annabel"]
        );
    }

    #[test]
    fn role_filter_is_exact() {
        let store = seeded();
        assert_eq!(
            names(&store, RecordFilter::new("", Some(Role::User))),
            ["Hannah", "Bo"]
        );
    }

    #[test]
    fn search_and_role_combine() {
        let store = seeded();
        assert_eq!(
            names(&store, RecordFilter::new("ann", Some(Role::User))),
            ["Hannah"]
        );
        assert!(names(&store, RecordFilter::new("zz", None)).is_empty());
    }
}
