use crate::error::{MemberQueryError, Result};
use std::fmt;

/// Queryable entities and their table aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Member,
    Team,
}

impl Entity {
    pub fn table(&self) -> &'static str {
        match self {
            Entity::Member => "member",
            Entity::Team => "team",
        }
    }

    pub fn alias(&self) -> &'static str {
        match self {
            Entity::Member => "m",
            Entity::Team => "t",
        }
    }

    /// `FROM`/`JOIN` target, e.g. `member m`
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.table(), self.alias())
    }
}

/// Columns addressable by predicates, projections and ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MemberId,
    Username,
    Age,
    TeamId,
    TeamName,
}

impl Field {
    /// The five projection fields in output order
    pub const PROJECTION: [Field; 5] = [
        Field::MemberId,
        Field::Username,
        Field::Age,
        Field::TeamId,
        Field::TeamName,
    ];

    pub fn entity(&self) -> Entity {
        match self {
            Field::MemberId | Field::Username | Field::Age => Entity::Member,
            Field::TeamId | Field::TeamName => Entity::Team,
        }
    }

    /// Qualified column, e.g. `t.name`
    pub fn column(&self) -> &'static str {
        match self {
            Field::MemberId => "m.member_id",
            Field::Username => "m.username",
            Field::Age => "m.age",
            Field::TeamId => "t.team_id",
            Field::TeamName => "t.name",
        }
    }

    /// Output column alias in the projection
    pub fn alias(&self) -> &'static str {
        match self {
            Field::MemberId => "member_id",
            Field::Username => "username",
            Field::Age => "age",
            Field::TeamId => "team_id",
            Field::TeamName => "team_name",
        }
    }

    /// Property name callers use in sort parameters
    pub fn property(&self) -> &'static str {
        match self {
            Field::MemberId => "memberId",
            Field::Username => "username",
            Field::Age => "age",
            Field::TeamId => "teamId",
            Field::TeamName => "teamName",
        }
    }

    /// Resolve a sort property; accepts camelCase and snake_case spellings
    pub fn from_property(property: &str) -> Result<Field> {
        Field::PROJECTION
            .into_iter()
            .find(|field| field.property() == property || field.alias() == property)
            .ok_or_else(|| {
                MemberQueryError::invalid_argument(format!("unknown sort property '{property}'"))
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}
