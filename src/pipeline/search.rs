/// A record that can be matched by the admin tables' free-text search.
pub trait Searchable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Case-insensitive substring match on name or description
    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.name().to_lowercase().contains(&query)
            || self.description().to_lowercase().contains(&query)
    }
}

/// Keeps the records matching `query`, preserving their original order.
pub fn filter_records<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}
