/// Represents the LIMIT/OFFSET window of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    /// Create pagination with both limit and offset
    pub fn limit_offset(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(" LIMIT {} OFFSET {}", self.limit, self.offset)
    }

    /// Apply the window to an already filtered and ordered sequence
    pub fn apply<T>(&self, rows: impl IntoIterator<Item = T>) -> Vec<T> {
        let offset = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        rows.into_iter().skip(offset).take(limit).collect()
    }
}
