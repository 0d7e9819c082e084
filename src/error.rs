//! Error types for member search.
//!

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberQueryError {
    /// Rejected before any query is issued (negative offset, bad page size, unknown sort key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The content or count query failed inside the storage collaborator
    #[error("Storage failure: {0}")]
    StorageFailure(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl MemberQueryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        MemberQueryError::InvalidArgument(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        MemberQueryError::StorageFailure(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MemberQueryError::InvalidArgument(_))
    }

    pub fn is_storage_failure(&self) -> bool {
        matches!(self, MemberQueryError::StorageFailure(_))
    }
}

impl From<sqlx::Error> for MemberQueryError {
    fn from(err: sqlx::Error) -> Self {
        MemberQueryError::StorageFailure(err.to_string())
    }
}

impl From<config::ConfigError> for MemberQueryError {
    fn from(err: config::ConfigError) -> Self {
        MemberQueryError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MemberQueryError>;
