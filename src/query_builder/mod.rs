//! # Query Builder System
//!
//! Storage-agnostic query specifications for member searches.
//!
//! ## Key Components
//!
//! - [`builder`] - The query value: source, projection, joins, filter, order, window
//! - [`conditions`] - Comparison predicates and their conjunction
//! - [`joins`] - Relations and JOIN kinds (INNER, LEFT)
//! - [`ordering`] - ORDER BY keys with explicit NULL placement
//! - [`pagination`] - LIMIT/OFFSET window
//! - [`scopes`] - The shared member/team projection
//!
//! Executors in [`crate::storage`] interpret a [`QueryBuilder`]; `build_sql()` renders
//! it as PostgreSQL text with inlined literals for logging and debugging.
//!
//! ## Example Usage
//!
//! ```rust
//! use member_query::query_builder::{Condition, Field, MemberScopes, WhereClause};
//!
//! let filter = WhereClause::and(vec![Condition::goe(Field::Age, 25)]);
//! let query = MemberScopes::member_team_projection(filter);
//! assert!(query.build_sql().contains("LEFT JOIN team t"));
//! assert!(query.simplified_count_query().joins().is_empty());
//! ```

pub mod builder;
pub mod conditions;
pub mod fields;
pub mod joins;
pub mod ordering;
pub mod pagination;
pub mod scopes;

pub use builder::QueryBuilder;
pub use conditions::{Condition, Operator, WhereClause};
pub use fields::{Entity, Field};
pub use joins::{Join, JoinType, Relation};
pub use ordering::{Direction, NullOrdering, OrderBy};
pub use pagination::Pagination;
pub use scopes::MemberScopes;
