use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Team a member may belong to
/// Maps to `team` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
}

impl Team {
    pub fn new(team_id: i64, name: impl Into<String>) -> Self {
        Self {
            team_id,
            name: name.into(),
        }
    }
}
