use super::Field;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Placement of NULLs relative to non-null values
///
/// `Native` follows PostgreSQL: NULLs sort as larger than any value, so they come
/// last ascending and first descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NullOrdering {
    #[default]
    Native,
    NullsFirst,
    NullsLast,
}

/// A resolved ORDER BY key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: Field,
    pub direction: Direction,
    pub nulls: NullOrdering,
}

impl OrderBy {
    pub fn new(field: Field, direction: Direction, nulls: NullOrdering) -> Self {
        Self {
            field,
            direction,
            nulls,
        }
    }

    pub fn asc(field: Field) -> Self {
        Self::new(field, Direction::Asc, NullOrdering::Native)
    }

    pub fn desc(field: Field) -> Self {
        Self::new(field, Direction::Desc, NullOrdering::Native)
    }

    /// Whether NULLs end up before non-null values for this key
    pub fn nulls_come_first(&self) -> bool {
        match self.nulls {
            NullOrdering::NullsFirst => true,
            NullOrdering::NullsLast => false,
            NullOrdering::Native => self.direction == Direction::Desc,
        }
    }

    /// Compare two optional values under this key
    pub fn compare<T: Ord>(&self, left: Option<&T>, right: Option<&T>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) if self.nulls_come_first() => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) if self.nulls_come_first() => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(l), Some(r)) => match self.direction {
                Direction::Asc => l.cmp(r),
                Direction::Desc => r.cmp(l),
            },
        }
    }

    pub fn to_sql(&self) -> String {
        let nulls = if self.nulls_come_first() {
            "NULLS FIRST"
        } else {
            "NULLS LAST"
        };
        format!("{} {} {}", self.field.column(), self.direction.to_sql(), nulls)
    }
}
