use std::ops::Range;

/// Rows shown per page in the admin tables
pub const PAGE_SIZE: usize = 10;

/// A 1-based page over a list of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page * self.page_size < self.total
    }

    /// Whether pagination controls are worth showing at all
    pub fn is_needed(&self) -> bool {
        self.total > self.page_size
    }

    /// Index range of the current page, empty when the page lies past the end
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range()]
    }

    /// e.g. "Showing 11 to 20 of 25 hotels", or "Showing 0 of 15 hotels" past the end
    pub fn summary(&self, noun: &str) -> String {
        let range = self.range();

        if range.is_empty() {
            return format!("Showing 0 of {} {}", self.total, noun);
        }

        format!(
            "Showing {} to {} of {} {}",
            range.start + 1,
            range.end,
            self.total,
            noun
        )
    }
}
