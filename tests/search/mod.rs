//! Member search tests: the three retrieval modes and ordering.

pub mod ordering;
pub mod simple_page;
pub mod unpaged;
