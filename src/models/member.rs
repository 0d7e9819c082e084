use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member record with a non-owning reference to its team
/// Maps to `member` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    /// `None` means the member has no team
    pub team_id: Option<i64>,
}

impl Member {
    pub fn new(member_id: i64, username: Option<&str>, age: i32, team_id: Option<i64>) -> Self {
        Self {
            member_id,
            username: username.map(str::to_string),
            age,
            team_id,
        }
    }
}
