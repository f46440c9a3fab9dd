//! Shared types returned by storage backends.

/// One window of a filtered collection, plus the unwindowed total.
///
/// `total` counts every row matching the query's filters, not just the rows
/// in this window; the REST layer needs it for `totalCount` and the
/// next-link decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The rows inside the requested window, in backend order.
    pub rows: Vec<T>,
    /// Total matching rows across all windows.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page from a row window and total count.
    pub fn new(rows: Vec<T>, total: u64) -> Self {
        Self { rows, total }
    }

    /// An empty page over an empty collection.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }

    /// Number of rows in this window.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when this window holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
