//! PostgreSQL executor.
//!
//! Renders the same shape as [`QueryBuilder::build_sql`] but with bound parameters
//! instead of inlined literals.

use super::QueryExecutor;
use crate::config::SearchConfig;
use crate::error::{MemberQueryError, Result};
use crate::models::MemberTeamRow;
use crate::query_builder::{QueryBuilder, WhereClause};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Row};
use tracing::debug;

type PgSqlBuilder = sqlx::QueryBuilder<'static, Postgres>;

#[derive(Debug, Clone)]
pub struct PgQueryExecutor {
    pool: PgPool,
}

impl PgQueryExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration
    pub async fn connect(config: &SearchConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// `SELECT <projection> FROM ... [WHERE ...] [ORDER BY ...] [LIMIT $n OFFSET $m]`
pub fn build_select(query: &QueryBuilder) -> Result<PgSqlBuilder> {
    if query.select_fields().is_empty() {
        return Err(MemberQueryError::storage("projection query selects no columns"));
    }

    let mut builder = PgSqlBuilder::new("SELECT ");
    let select_parts: Vec<String> = query
        .select_fields()
        .iter()
        .map(|field| format!("{} AS {}", field.column(), field.alias()))
        .collect();
    builder.push(select_parts.join(", "));

    push_from_and_where(&mut builder, query)?;

    if !query.ordering().is_empty() {
        let order_parts: Vec<String> = query.ordering().iter().map(|o| o.to_sql()).collect();
        builder.push(" ORDER BY ");
        builder.push(order_parts.join(", "));
    }

    if let Some(window) = query.pagination() {
        builder.push(" LIMIT ");
        builder.push_bind(to_bigint(window.limit)?);
        builder.push(" OFFSET ");
        builder.push_bind(to_bigint(window.offset)?);
    }

    Ok(builder)
}

/// `SELECT COUNT(*) FROM ... [WHERE ...]`
pub fn build_count(query: &QueryBuilder) -> Result<PgSqlBuilder> {
    let mut builder = PgSqlBuilder::new("SELECT COUNT(*)");
    push_from_and_where(&mut builder, query)?;
    Ok(builder)
}

fn push_from_and_where(builder: &mut PgSqlBuilder, query: &QueryBuilder) -> Result<()> {
    builder.push(" FROM ");
    builder.push(query.base().to_sql());

    for join in query.joins() {
        builder.push(" ");
        builder.push(join.to_sql());
    }

    push_filter(builder, query.filter())
}

fn push_filter(builder: &mut PgSqlBuilder, filter: &WhereClause) -> Result<()> {
    for (index, condition) in filter.conditions.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(condition.field.column());
        builder.push(" ");
        builder.push(condition.operator.to_sql());
        builder.push(" ");

        match &condition.value {
            serde_json::Value::String(s) => {
                builder.push_bind(s.clone());
            }
            serde_json::Value::Number(n) => {
                let value = n.as_i64().ok_or_else(|| {
                    MemberQueryError::invalid_argument(format!(
                        "{} expects an integer, got {n}",
                        condition.field
                    ))
                })?;
                builder.push_bind(value);
            }
            other => {
                return Err(MemberQueryError::invalid_argument(format!(
                    "unsupported value {other} for {}",
                    condition.field
                )))
            }
        }
    }
    Ok(())
}

fn to_bigint(value: u64) -> Result<i64> {
    i64::try_from(value)
        .map_err(|_| MemberQueryError::invalid_argument(format!("{value} exceeds BIGINT range")))
}

#[async_trait]
impl QueryExecutor for PgQueryExecutor {
    async fn fetch_rows(&self, query: &QueryBuilder) -> Result<Vec<MemberTeamRow>> {
        let mut builder = build_select(query)?;
        debug!(sql = %builder.sql(), "Executing member projection query");

        let rows = builder
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self, query: &QueryBuilder) -> Result<u64> {
        let mut builder = build_count(query)?;
        debug!(sql = %builder.sql(), "Executing member count query");

        let row = builder.build().fetch_one(&self.pool).await?;
        let total: i64 = row.try_get(0)?;
        u64::try_from(total)
            .map_err(|_| MemberQueryError::storage(format!("negative row count {total}")))
    }
}
