use super::Entity;

/// Represents the JOIN kinds used by member queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// Navigable references from the member to related entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `member.team_id -> team.team_id`, many-to-one, nullable
    MemberTeam,
}

impl Relation {
    pub fn target(&self) -> Entity {
        match self {
            Relation::MemberTeam => Entity::Team,
        }
    }

    pub fn on_condition(&self) -> &'static str {
        match self {
            Relation::MemberTeam => "t.team_id = m.team_id",
        }
    }
}

/// Represents a SQL JOIN clause along a relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub join_type: JoinType,
    pub relation: Relation,
}

impl Join {
    /// Create an INNER JOIN
    pub fn inner(relation: Relation) -> Self {
        Self {
            join_type: JoinType::Inner,
            relation,
        }
    }

    /// Create a LEFT JOIN
    pub fn left(relation: Relation) -> Self {
        Self {
            join_type: JoinType::Left,
            relation,
        }
    }

    pub fn entity(&self) -> Entity {
        self.relation.target()
    }

    /// Same relation, different join kind
    pub fn with_type(&self, join_type: JoinType) -> Self {
        Self {
            join_type,
            relation: self.relation,
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(
            "{} {} ON {}",
            self.join_type.to_sql(),
            self.entity().to_sql(),
            self.relation.on_condition()
        )
    }
}
