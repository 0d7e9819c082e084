use super::condition::MemberSearchCondition;
use super::page::{get_page, PageResult, Pageable};
use super::predicates;
use crate::config::{SearchConfig, DEFAULT_MAX_PAGE_SIZE};
use crate::error::{MemberQueryError, Result};
use crate::logging::{log_search_error, log_search_operation};
use crate::models::MemberTeamRow;
use crate::query_builder::{MemberScopes, OrderBy, Pagination};
use crate::storage::QueryExecutor;
use std::time::Instant;
use tracing::debug;

/// Member search over a storage collaborator
///
/// All three modes filter and join identically; they differ only in paging and in
/// how the total is obtained.
#[derive(Debug, Clone)]
pub struct MemberSearchRepository<E> {
    executor: E,
    max_page_size: u64,
}

impl<E: QueryExecutor> MemberSearchRepository<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            max_page_size: u64::from(DEFAULT_MAX_PAGE_SIZE),
        }
    }

    pub fn with_config(executor: E, config: &SearchConfig) -> Self {
        Self {
            executor,
            max_page_size: u64::from(config.max_page_size),
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Every matching row, unordered and unpaged
    pub async fn search(&self, condition: &MemberSearchCondition) -> Result<Vec<MemberTeamRow>> {
        let started = Instant::now();
        let filter = predicates::build(condition);
        debug!(active_predicates = filter.len(), "Searching members");

        let query = MemberScopes::member_team_projection(filter);
        let rows = self
            .executor
            .fetch_rows(&query)
            .await
            .inspect_err(|e| log_search_error("search", &e.to_string(), None))?;

        log_search_operation("search", None, None, rows.len(), None, elapsed_ms(started));
        Ok(rows)
    }

    /// Content page plus a full count, always both
    pub async fn search_page_simple(
        &self,
        condition: &MemberSearchCondition,
        pageable: &Pageable,
    ) -> Result<PageResult<MemberTeamRow>> {
        let started = Instant::now();
        let (window, order) = self.resolve(pageable)?;
        let filter = predicates::build(condition);
        debug!(
            active_predicates = filter.len(),
            offset = window.offset,
            page_size = window.limit,
            "Searching member page (content + count)"
        );

        let content_query = MemberScopes::member_team_page(filter, &order, window);
        let count_query = content_query.count_query();

        let (content, total) = futures::try_join!(
            self.executor.fetch_rows(&content_query),
            self.executor.count(&count_query)
        )
        .inspect_err(|e| log_search_error("search_page_simple", &e.to_string(), None))?;

        log_search_operation(
            "search_page_simple",
            Some(window.offset),
            Some(window.limit),
            content.len(),
            Some(total),
            elapsed_ms(started),
        );
        Ok(PageResult::new(content, pageable.clone(), total))
    }

    /// Content page first; the count query runs only when the page is full
    pub async fn search_page_complex(
        &self,
        condition: &MemberSearchCondition,
        pageable: &Pageable,
    ) -> Result<PageResult<MemberTeamRow>> {
        let started = Instant::now();
        let (window, order) = self.resolve(pageable)?;
        let filter = predicates::build(condition);
        debug!(
            active_predicates = filter.len(),
            offset = window.offset,
            page_size = window.limit,
            "Searching member page (deferred count)"
        );

        let content_query = MemberScopes::member_team_page(filter, &order, window);
        let content = self
            .executor
            .fetch_rows(&content_query)
            .await
            .inspect_err(|e| log_search_error("search_page_complex", &e.to_string(), Some("content")))?;

        let count_query = content_query.simplified_count_query();
        let page = get_page(content, pageable, || self.executor.count(&count_query))
            .await
            .inspect_err(|e| log_search_error("search_page_complex", &e.to_string(), Some("count")))?;

        log_search_operation(
            "search_page_complex",
            Some(window.offset),
            Some(window.limit),
            page.number_of_elements(),
            Some(page.total()),
            elapsed_ms(started),
        );
        Ok(page)
    }

    /// Validate the request before any query is issued
    fn resolve(&self, pageable: &Pageable) -> Result<(Pagination, Vec<OrderBy>)> {
        let window = pageable.window()?;
        if window.limit > self.max_page_size {
            return Err(MemberQueryError::invalid_argument(format!(
                "page size {} exceeds maximum {}",
                window.limit, self.max_page_size
            )));
        }
        let order = pageable.order()?;
        Ok((window, order))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
