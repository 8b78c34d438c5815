//! The list-view data pipeline: normalize → filter → paginate → render.
//!
//! Everything here is pure and shared by the server (normalizing backend payloads,
//! building dashboard tabs) and the browser client (search and pagination state).

pub mod columns;
pub mod format;
pub mod normalize;
pub mod paginate;
pub mod price;
pub mod search;

use crate::pipeline::{
    paginate::{Pagination, PAGE_SIZE},
    search::{filter_records, Searchable},
};

/// The rows of one table page together with its pagination state
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub pagination: Pagination,
}

/// Filters `records` by `query` and cuts out `page`.
///
/// The page is not reset when the query narrows the results, so a page past the end
/// of the filtered list renders empty.
pub fn list_view<T: Searchable + Clone>(records: &[T], query: &str, page: usize) -> ListView<T> {
    let filtered = filter_records(records, query);
    let pagination = Pagination::new(page, PAGE_SIZE, filtered.len());

    ListView {
        rows: pagination.slice(&filtered).to_vec(),
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(String);

    impl Searchable for Row {
        fn name(&self) -> &str {
            &self.0
        }

        fn description(&self) -> &str {
            ""
        }
    }

    fn rows(n: usize, prefix: &str) -> Vec<Row> {
        (0..n).map(|i| Row(format!("{prefix} {i}"))).collect()
    }

    #[test]
    fn pages_filtered_rows() {
        let mut records = rows(25, "reef");
        records.extend(rows(5, "desert"));

        let view = list_view(&records, "reef", 3);

        assert_eq!(view.pagination.total, 25);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].0, "reef 20");
    }

    #[test]
    fn narrowing_search_keeps_page_index() {
        let mut records = rows(25, "reef");
        records.extend(rows(3, "desert"));

        let view = list_view(&records, "desert", 3);

        assert_eq!(view.pagination.page, 3);
        assert_eq!(view.pagination.total, 3);
        assert!(view.rows.is_empty());
    }
}
