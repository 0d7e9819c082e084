use super::{Entity, Field};

/// Comparison operators a predicate can apply
///
/// Every operator rejects NULL: a row whose column is absent never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    /// Greater than or equal
    Goe,
    /// Less than or equal
    Loe,
}

impl Operator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Goe => ">=",
            Operator::Loe => "<=",
        }
    }
}

/// A single predicate over a projection field
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: Field,
    pub operator: Operator,
    pub value: serde_json::Value,
}

impl Condition {
    pub fn new(field: Field, operator: Operator, value: serde_json::Value) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    pub fn eq(field: Field, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, Operator::Eq, value.into())
    }

    pub fn goe(field: Field, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, Operator::Goe, value.into())
    }

    pub fn loe(field: Field, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, Operator::Loe, value.into())
    }

    pub fn references(&self, entity: Entity) -> bool {
        self.field.entity() == entity
    }

    /// Convert condition to SQL string with an inlined literal
    pub fn to_sql(&self) -> String {
        format!(
            "{} {} {}",
            self.field.column(),
            self.operator.to_sql(),
            format_value(&self.value)
        )
    }
}

/// Conjunction of conditions; empty means "match every row"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
}

impl WhereClause {
    /// Combine multiple conditions with AND
    pub fn and(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Fold optional conditions, keeping only the present ones
    pub fn and_present<I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = Option<Condition>>,
    {
        Self {
            conditions: conditions.into_iter().flatten().collect(),
        }
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn references(&self, entity: Entity) -> bool {
        self.conditions.iter().any(|c| c.references(entity))
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            return "1=1".to_string();
        }

        let condition_sqls: Vec<String> = self.conditions.iter().map(Condition::to_sql).collect();
        condition_sqls.join(" AND ")
    }
}

/// Format a JSON value for SQL
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        _ => format!("'{}'", value.to_string().replace('\'', "''")),
    }
}
