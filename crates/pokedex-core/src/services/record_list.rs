//! List view: filtered, name-sorted projection of the store.

use std::sync::Arc;

use feruca::Collator;

use crate::domain::Record;

use super::RecordStore;

/// Sort by name with the Unicode collation algorithm (CLDR root order).
///
/// Accents and case only break ties, lowercase first. The sort is stable.
fn sort_by_name(records: &mut [Record]) {
    let mut collator = Collator::default();
    records.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
}

/// Keep records whose name contains `term` (case-insensitive), sorted by name.
///
/// An empty term keeps every record. Records with identical names keep
/// their storage order.
pub fn filter_and_sort(records: &[Record], term: &str) -> Vec<Record> {
    let needle = term.to_lowercase();
    let mut filtered: Vec<Record> = records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    sort_by_name(&mut filtered);
    filtered
}

/// Live list view over a store, driven by a search term.
///
/// Holds no records of its own: every call to [`rows`](Self::rows)
/// recomputes from a fresh store snapshot.
pub struct RecordListView {
    store: Arc<RecordStore>,
    search: String,
}

impl RecordListView {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            search: String::new(),
        }
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The display sequence for the current store contents and search term.
    pub fn rows(&self) -> Vec<Record> {
        filter_and_sort(&self.store.records(), &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeCatalog;

    fn named(id: i64, name: &str) -> Record {
        Record::summary(id, name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
    }

    fn sample() -> Vec<Record> {
        vec![
            named(4, "charmander"),
            named(1, "bulbasaur"),
            named(7, "squirtle"),
            named(2, "ivysaur"),
            named(5, "Charmeleon"),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_sorts_everything() {
        let rows = filter_and_sort(&sample(), "");
        assert_eq!(
            names(&rows),
            vec!["bulbasaur", "charmander", "Charmeleon", "ivysaur", "squirtle"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = filter_and_sort(&sample(), "CHAR");
        assert_eq!(names(&rows), vec!["charmander", "Charmeleon"]);

        let rows = filter_and_sort(&sample(), "saur");
        assert_eq!(names(&rows), vec!["bulbasaur", "ivysaur"]);
    }

    #[test]
    fn test_filter_contains_exactly_matching_subset() {
        let records = sample();
        for term in ["", "a", "r", "zz", "Le", "squirtle"] {
            let rows = filter_and_sort(&records, term);
            let expected = records
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&term.to_lowercase()))
                .count();
            assert_eq!(rows.len(), expected, "term {term:?}");

            let mut collator = Collator::default();
            assert!(
                rows.windows(2)
                    .all(|w| collator.collate(w[0].name.as_str(), w[1].name.as_str()).is_le())
            );
        }
    }

    #[test]
    fn test_sort_uses_collation_order() {
        let records = vec![
            named(41, "zubat"),
            named(239, "élekid"),
            named(133, "eevee"),
            named(5, "Charmeleon"),
            named(1005, "charmeleon"),
        ];
        let rows = filter_and_sort(&records, "");
        assert_eq!(
            names(&rows),
            vec!["charmeleon", "Charmeleon", "eevee", "élekid", "zubat"]
        );
    }

    #[test]
    fn test_accented_search_term() {
        let records = vec![named(239, "Élekid"), named(133, "eevee")];
        assert_eq!(names(&filter_and_sort(&records, "éLE")), vec!["Élekid"]);
    }

    #[test]
    fn test_filter_and_sort_is_idempotent() {
        let records = sample();
        for term in ["", "a", "CHAR"] {
            let once = filter_and_sort(&records, term);
            let twice = filter_and_sort(&once, term);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_duplicate_names_keep_storage_order() {
        let records = vec![named(10, "eevee"), named(3, "eevee")];
        let rows = filter_and_sort(&records, "");
        assert_eq!(rows[0].id, 10);
        assert_eq!(rows[1].id, 3);
    }

    #[test]
    fn test_view_recomputes_from_store() {
        let store = Arc::new(RecordStore::without_events(Arc::new(FakeCatalog::new())));
        for record in sample() {
            store.add(record);
        }

        let mut view = RecordListView::new(store.clone());
        view.set_search("saur");
        assert_eq!(names(&view.rows()), vec!["bulbasaur", "ivysaur"]);

        store.add(named(3, "venusaur"));
        assert_eq!(names(&view.rows()), vec!["bulbasaur", "ivysaur", "venusaur"]);

        view.set_search("");
        assert_eq!(view.rows().len(), 6);
        assert_eq!(view.search(), "");
    }
}
