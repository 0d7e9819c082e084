#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Member Query
//!
//! Dynamic search conditions and count-optimized pagination over a Member → Team
//! relation.
//!
//! ## Overview
//!
//! A caller hands in a sparse [`MemberSearchCondition`] (any of username, team name,
//! lower and upper age bound). The crate turns the present fields into a conjunctive
//! predicate list, describes a joined projection query as a plain value
//! ([`query_builder::QueryBuilder`]) and hands that value to a storage collaborator
//! ([`storage::QueryExecutor`]) for execution.
//!
//! ## Retrieval Modes
//!
//! - [`MemberSearchRepository::search`] - every matching row, no paging
//! - [`MemberSearchRepository::search_page_simple`] - content and total count, always both
//! - [`MemberSearchRepository::search_page_complex`] - content first, count only when
//!   the page is full (a short page already proves the total)
//!
//! ## Module Organization
//!
//! - [`models`] - Member, Team and the flat projection row
//! - [`query_builder`] - select/join/filter/order/window specification
//! - [`search`] - conditions, pageables, page results, repository
//! - [`storage`] - query execution collaborators (in-memory and PostgreSQL)
//! - [`config`] - layered configuration
//! - [`logging`] - structured logging setup
//! - [`error`] - structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use member_query::search::{MemberSearchCondition, MemberSearchRepository, Pageable};
//! use member_query::storage::InMemoryStore;
//!
//! # async fn example() -> member_query::Result<()> {
//! let store = InMemoryStore::new();
//! let team_a = store.insert_team("teamA");
//! store.insert_member(Some("member1"), 10, Some(team_a.team_id))?;
//! store.insert_member(Some("member2"), 20, None)?;
//!
//! let repository = MemberSearchRepository::new(store);
//! let condition = MemberSearchCondition::new().age_goe(15);
//! let page = repository
//!     .search_page_complex(&condition, &Pageable::of(0, 10))
//!     .await?;
//! assert_eq!(page.total(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;
pub mod search;
pub mod storage;

pub use config::SearchConfig;
pub use error::{MemberQueryError, Result};
pub use models::{Member, MemberTeamRow, Team};
pub use search::{
    MemberSearchCondition, MemberSearchRepository, PageResult, Pageable, SortKey,
};
