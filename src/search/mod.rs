//! # Member Search
//!
//! - [`condition`] - The sparse filter callers send
//! - [`predicates`] - Filter construction from a condition
//! - [`page`] - Page requests, page results and count-avoiding assembly
//! - [`repository`] - The three retrieval modes

pub mod condition;
pub mod page;
pub mod predicates;
pub mod repository;

pub use condition::MemberSearchCondition;
pub use page::{get_page, PageResult, Pageable, SortKey};
pub use repository::MemberSearchRepository;
