//! Page requests, page results and the count-avoiding page assembly.

use crate::config::SearchConfig;
use crate::error::{MemberQueryError, Result};
use crate::query_builder::{Direction, Field, NullOrdering, OrderBy, Pagination};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// One caller-declared sort key, resolved against the projection fields on use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub property: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub nulls: NullOrdering,
}

impl SortKey {
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
            nulls: NullOrdering::Native,
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Asc)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Desc)
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = NullOrdering::NullsFirst;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = NullOrdering::NullsLast;
        self
    }

    /// Parse the request form `property[,asc|desc[,nulls_first|nulls_last|native]]`
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split(',').map(str::trim);

        let property = parts.next().unwrap_or_default();
        if property.is_empty() {
            return Err(MemberQueryError::invalid_argument(format!(
                "sort key '{input}' has no property"
            )));
        }
        Field::from_property(property)?;

        let direction = match parts.next() {
            None => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(d) => {
                return Err(MemberQueryError::invalid_argument(format!(
                    "unknown sort direction '{d}' in '{input}'"
                )))
            }
        };

        let nulls = match parts.next().map(|n| n.to_ascii_lowercase().replace('_', "")) {
            None => NullOrdering::Native,
            Some(n) if n == "native" => NullOrdering::Native,
            Some(n) if n == "nullsfirst" => NullOrdering::NullsFirst,
            Some(n) if n == "nullslast" => NullOrdering::NullsLast,
            Some(n) => {
                return Err(MemberQueryError::invalid_argument(format!(
                    "unknown null ordering '{n}' in '{input}'"
                )))
            }
        };

        if parts.next().is_some() {
            return Err(MemberQueryError::invalid_argument(format!(
                "sort key '{input}' has too many parts"
            )));
        }

        Ok(Self {
            property: property.to_string(),
            direction,
            nulls,
        })
    }

    pub fn resolve(&self) -> Result<OrderBy> {
        let field = Field::from_property(self.property.trim())?;
        Ok(OrderBy::new(field, self.direction, self.nulls))
    }
}

/// Requested window into an ordered result set
///
/// Fields are signed so that out-of-range requests can be represented and
/// rejected as invalid arguments before any query runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub offset: i64,
    pub page_size: i64,
    #[serde(default)]
    pub sort: Vec<SortKey>,
}

impl Pageable {
    /// Zero-based page number and page size; offset is `page * size`
    pub fn of(page: i64, size: i64) -> Self {
        Self::with_offset(page.saturating_mul(size), size)
    }

    pub fn with_offset(offset: i64, page_size: i64) -> Self {
        Self {
            offset,
            page_size,
            sort: Vec::new(),
        }
    }

    /// First page at the configured default size
    pub fn first(config: &SearchConfig) -> Self {
        Self::of(0, i64::from(config.default_page_size))
    }

    /// Append a sort key (lower priority than any already present)
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort.push(key);
        self
    }

    pub fn page_number(&self) -> i64 {
        if self.page_size > 0 {
            self.offset / self.page_size
        } else {
            0
        }
    }

    /// The following page with the same size and ordering
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.page_size),
            page_size: self.page_size,
            sort: self.sort.clone(),
        }
    }

    /// Validated LIMIT/OFFSET for this request
    pub fn window(&self) -> Result<Pagination> {
        let offset = u64::try_from(self.offset).map_err(|_| {
            MemberQueryError::invalid_argument(format!(
                "offset must not be negative, got {}",
                self.offset
            ))
        })?;
        let limit = u64::try_from(self.page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                MemberQueryError::invalid_argument(format!(
                    "page size must be positive, got {}",
                    self.page_size
                ))
            })?;
        Ok(Pagination::limit_offset(limit, offset))
    }

    /// Sort keys resolved to projection fields, in declared priority
    pub fn order(&self) -> Result<Vec<OrderBy>> {
        self.sort.iter().map(SortKey::resolve).collect()
    }
}

/// A page of content with its request and the exact matching-row total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    content: Vec<T>,
    pageable: Pageable,
    total: u64,
}

impl<T> PageResult<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total: u64) -> Self {
        Self {
            content,
            pageable,
            total,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn pageable(&self) -> &Pageable {
        &self.pageable
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Requested page size
    pub fn size(&self) -> u64 {
        self.pageable.page_size.max(0).unsigned_abs()
    }

    /// Zero-based page number
    pub fn number(&self) -> u64 {
        self.pageable.page_number().max(0).unsigned_abs()
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn total_pages(&self) -> u64 {
        match self.size() {
            0 => 1,
            size => self.total.div_ceil(size),
        }
    }

    pub fn has_next(&self) -> bool {
        let offset = self.pageable.offset.max(0).unsigned_abs();
        offset + (self.content.len() as u64) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.pageable.offset > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert the content, keeping request and total
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total: self.total,
        }
    }
}

/// Assemble a page, invoking `count` only when the content cannot prove the total
///
/// A page shorter than the requested size is the last page, so the total is
/// `offset + content.len()`. That only holds when the page has rows or starts at
/// zero: an empty page past the end proves nothing about the rows before it.
/// A full page runs `count`; its failure fails the page.
pub async fn get_page<T, F, Fut>(
    content: Vec<T>,
    pageable: &Pageable,
    count: F,
) -> Result<PageResult<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64>>,
{
    let window = pageable.window()?;
    let returned = content.len() as u64;

    if returned < window.limit && (returned > 0 || window.offset == 0) {
        let total = window.offset + returned;
        debug!(
            offset = window.offset,
            page_size = window.limit,
            returned = returned,
            total = total,
            count_skipped = true,
            "Total derived from short page"
        );
        return Ok(PageResult::new(content, pageable.clone(), total));
    }

    let total = count().await?;
    if total < window.offset + returned {
        warn!(
            offset = window.offset,
            returned = returned,
            total = total,
            "Count query reported fewer rows than the content query returned"
        );
    }
    debug!(
        offset = window.offset,
        page_size = window.limit,
        returned = returned,
        total = total,
        count_skipped = false,
        "Total resolved by count query"
    );

    Ok(PageResult::new(content, pageable.clone(), total))
}
