//! In-memory interpreter for member queries.
//!
//! Evaluates a [`QueryBuilder`] the way PostgreSQL would: columns of an entity that
//! is not joined are an error, comparisons against NULL never match, and rows come
//! back in insertion order unless the query orders them.

use super::QueryExecutor;
use crate::error::{MemberQueryError, Result};
use crate::models::{Member, MemberTeamRow, Team};
use crate::query_builder::{Condition, Entity, Field, JoinType, Operator, QueryBuilder};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct StoreData {
    teams: BTreeMap<i64, Team>,
    members: Vec<Member>,
    next_team_id: i64,
    next_member_id: i64,
}

/// Member/team tables held in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<StoreData>,
}

/// A single column value; `None` at the call site is SQL NULL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Cell<'a> {
    Int(i64),
    Text(&'a str),
}

/// A member with its team after joins were applied
#[derive(Debug, Clone, Copy)]
struct JoinedRecord<'a> {
    member: &'a Member,
    team: Option<&'a Team>,
}

impl<'a> JoinedRecord<'a> {
    fn cell(&self, field: Field) -> Option<Cell<'a>> {
        match field {
            Field::MemberId => Some(Cell::Int(self.member.member_id)),
            Field::Username => self.member.username.as_deref().map(Cell::Text),
            Field::Age => Some(Cell::Int(i64::from(self.member.age))),
            Field::TeamId => self.team.map(|t| Cell::Int(t.team_id)),
            Field::TeamName => self.team.map(|t| Cell::Text(t.name.as_str())),
        }
    }

    fn matches(&self, condition: &Condition) -> Result<bool> {
        let Some(cell) = self.cell(condition.field) else {
            return Ok(false);
        };
        let ordering = match (cell, &condition.value) {
            (Cell::Int(actual), serde_json::Value::Number(n)) => {
                let expected = n.as_i64().ok_or_else(|| {
                    MemberQueryError::storage(format!(
                        "invalid input syntax for type bigint: \"{n}\""
                    ))
                })?;
                actual.cmp(&expected)
            }
            (Cell::Text(actual), serde_json::Value::String(expected)) => {
                actual.cmp(&expected.as_str())
            }
            // NULL literal: comparison yields NULL, which filters the row out
            (_, serde_json::Value::Null) => return Ok(false),
            (_, other) => {
                return Err(MemberQueryError::storage(format!(
                    "operator does not exist: {} {} {other}",
                    condition.field.column(),
                    condition.operator.to_sql()
                )))
            }
        };
        Ok(match condition.operator {
            Operator::Eq => ordering == Ordering::Equal,
            Operator::Goe => ordering != Ordering::Less,
            Operator::Loe => ordering != Ordering::Greater,
        })
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_team(&self, name: &str) -> Team {
        let mut data = self.data.write();
        data.next_team_id += 1;
        let team = Team::new(data.next_team_id, name);
        data.teams.insert(team.team_id, team.clone());
        team
    }

    /// Insert a member; a team reference must point at an existing team
    pub fn insert_member(
        &self,
        username: Option<&str>,
        age: i32,
        team_id: Option<i64>,
    ) -> Result<Member> {
        let mut data = self.data.write();
        if let Some(id) = team_id {
            if !data.teams.contains_key(&id) {
                return Err(MemberQueryError::storage(format!(
                    "insert on table \"member\" violates foreign key: team {id} does not exist"
                )));
            }
        }
        data.next_member_id += 1;
        let member = Member::new(data.next_member_id, username, age, team_id);
        data.members.push(member.clone());
        Ok(member)
    }

    pub fn members(&self) -> Vec<Member> {
        self.data.read().members.clone()
    }

    pub fn teams(&self) -> Vec<Team> {
        self.data.read().teams.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.data.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join and filter; projection, ordering and window are left to the caller
    fn select_records<'a>(
        data: &'a StoreData,
        query: &QueryBuilder,
    ) -> Result<Vec<JoinedRecord<'a>>> {
        if query.base() != Entity::Member {
            return Err(MemberQueryError::storage(format!(
                "unsupported query source \"{}\"",
                query.base().table()
            )));
        }

        let team_join = query.join_for(Entity::Team).map(|join| join.join_type);
        let mut records = Vec::with_capacity(data.members.len());

        for member in &data.members {
            let team = match team_join {
                None => None,
                Some(_) => member.team_id.and_then(|id| data.teams.get(&id)),
            };
            if team_join == Some(JoinType::Inner) && team.is_none() {
                continue;
            }

            let record = JoinedRecord { member, team };
            let mut keep = true;
            for condition in &query.filter().conditions {
                if !record.matches(condition)? {
                    keep = false;
                    break;
                }
            }
            if keep {
                records.push(record);
            }
        }

        Ok(records)
    }
}

/// Reject references to entities the query never brought into scope
fn check_scope(query: &QueryBuilder, fields: impl IntoIterator<Item = Field>) -> Result<()> {
    for field in fields {
        let entity = field.entity();
        if !query.is_in_scope(entity) {
            return Err(MemberQueryError::storage(format!(
                "missing FROM-clause entry for table \"{}\"",
                entity.alias()
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl QueryExecutor for InMemoryStore {
    async fn fetch_rows(&self, query: &QueryBuilder) -> Result<Vec<MemberTeamRow>> {
        check_scope(query, query.referenced_fields())?;

        let data = self.data.read();
        let mut records = Self::select_records(&data, query)?;

        if !query.ordering().is_empty() {
            records.sort_by(|left, right| {
                query
                    .ordering()
                    .iter()
                    .map(|key| key.compare(left.cell(key.field).as_ref(), right.cell(key.field).as_ref()))
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let rows = records
            .into_iter()
            .map(|record| MemberTeamRow::from_parts(record.member, record.team));

        Ok(match query.pagination() {
            Some(window) => window.apply(rows),
            None => rows.collect(),
        })
    }

    async fn count(&self, query: &QueryBuilder) -> Result<u64> {
        check_scope(query, query.filter().conditions.iter().map(|c| c.field))?;

        let data = self.data.read();
        let records = Self::select_records(&data, query)?;
        Ok(records.len() as u64)
    }
}
