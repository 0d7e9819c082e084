//! # Search Configuration
//!
//! Layered configuration: built-in defaults, then an optional file
//! (`config/member_query.{toml,yaml,json}` or an explicit path), then
//! `MEMBER_QUERY_*` environment variables.

use crate::error::{MemberQueryError, Result};
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/member_query_development";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 2000;

const ENV_PREFIX: &str = "MEMBER_QUERY";
const DEFAULT_CONFIG_FILE: &str = "config/member_query";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Page size used when a caller builds a pageable without one
    pub default_page_size: u32,
    /// Upper bound on any requested page size
    pub max_page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl SearchConfig {
    /// Load defaults, `config/member_query.*` if present, then the environment
    pub fn load() -> Result<Self> {
        Self::load_layers(Some(File::with_name(DEFAULT_CONFIG_FILE).required(false)))
    }

    /// Load defaults, the given file (which must exist), then the environment
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_layers(Some(File::from(path).required(true)))
    }

    /// Defaults overridden by `MEMBER_QUERY_*` variables only
    pub fn from_env() -> Result<Self> {
        Self::load_layers(None)
    }

    fn load_layers(file: Option<File<FileSourceFile, FileFormat>>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("default_page_size", i64::from(defaults.default_page_size))?
            .set_default("max_page_size", i64::from(defaults.max_page_size))?;
        if let Some(file) = file {
            builder = builder.add_source(file);
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize::<SearchConfig>()?;

        config.validate()?;

        debug!(
            max_connections = config.max_connections,
            default_page_size = config.default_page_size,
            max_page_size = config.max_page_size,
            "Search configuration loaded"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(MemberQueryError::Configuration(
                "database_url must not be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(MemberQueryError::Configuration(
                "max_connections must be positive".to_string(),
            ));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(MemberQueryError::Configuration(
                "page sizes must be positive".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(MemberQueryError::Configuration(format!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}
