//! Turns a [`MemberSearchCondition`] into the conjunctive filter of a member query.
//!
//! Each field maps to at most one condition; absent fields and blank text map to
//! nothing, and an empty result matches every row.

use super::condition::{has_text, MemberSearchCondition};
use crate::query_builder::{Condition, Field, WhereClause};

/// Build the filter for a search condition
pub fn build(condition: &MemberSearchCondition) -> WhereClause {
    WhereClause::and_present([
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ])
}

fn username_eq(username: Option<&str>) -> Option<Condition> {
    username
        .filter(|s| has_text(s))
        .map(|s| Condition::eq(Field::Username, s))
}

/// Only satisfiable through the team join
fn team_name_eq(team_name: Option<&str>) -> Option<Condition> {
    team_name
        .filter(|s| has_text(s))
        .map(|s| Condition::eq(Field::TeamName, s))
}

fn age_goe(age: Option<i32>) -> Option<Condition> {
    age.map(|a| Condition::goe(Field::Age, a))
}

fn age_loe(age: Option<i32>) -> Option<Condition> {
    age.map(|a| Condition::loe(Field::Age, a))
}
