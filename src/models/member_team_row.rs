use super::{Member, Team};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Flat projection of a member joined (left outer) with its team
///
/// Column aliases match the field names so the row maps straight from the
/// projection query. Team columns are `None` when the member has no team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl MemberTeamRow {
    pub fn from_parts(member: &Member, team: Option<&Team>) -> Self {
        Self {
            member_id: member.member_id,
            username: member.username.clone(),
            age: member.age,
            team_id: team.map(|t| t.team_id),
            team_name: team.map(|t| t.name.clone()),
        }
    }
}
