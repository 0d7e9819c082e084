//! # Storage Collaborators
//!
//! Query execution behind a trait: a [`QueryExecutor`] receives a
//! [`QueryBuilder`] and returns projected rows or a row count. Nothing above this
//! layer knows which database answers.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

use crate::error::Result;
use crate::models::MemberTeamRow;
use crate::query_builder::QueryBuilder;
use async_trait::async_trait;
use std::sync::Arc;

pub use memory::InMemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PgQueryExecutor;

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run the query with its projection, ordering and window
    async fn fetch_rows(&self, query: &QueryBuilder) -> Result<Vec<MemberTeamRow>>;

    /// Count rows matching source, joins and filter; projection, ordering and window
    /// are ignored
    async fn count(&self, query: &QueryBuilder) -> Result<u64>;
}

#[async_trait]
impl<T: QueryExecutor + ?Sized> QueryExecutor for Arc<T> {
    async fn fetch_rows(&self, query: &QueryBuilder) -> Result<Vec<MemberTeamRow>> {
        (**self).fetch_rows(query).await
    }

    async fn count(&self, query: &QueryBuilder) -> Result<u64> {
        (**self).count(query).await
    }
}
