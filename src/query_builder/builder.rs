use super::{
    Condition, Entity, Field, Join, JoinType, OrderBy, Pagination, Relation, WhereClause,
};

/// Storage-agnostic description of a select/join/filter/order/window query
///
/// Executors interpret this value; nothing here talks to a database.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    base: Entity,
    select_fields: Vec<Field>,
    joins: Vec<Join>,
    where_clause: WhereClause,
    order_by: Vec<OrderBy>,
    pagination: Option<Pagination>,
}

impl QueryBuilder {
    /// Create a new query builder rooted at the given entity
    pub fn new(base: Entity) -> Self {
        Self {
            base,
            select_fields: Vec::new(),
            joins: Vec::new(),
            where_clause: WhereClause::default(),
            order_by: Vec::new(),
            pagination: None,
        }
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[Field]) -> Self {
        self.select_fields = fields.to_vec();
        self
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Add an INNER JOIN
    pub fn inner_join(self, relation: Relation) -> Self {
        self.join(Join::inner(relation))
    }

    /// Add a LEFT JOIN
    pub fn left_join(self, relation: Relation) -> Self {
        self.join(Join::left(relation))
    }

    /// AND every condition of the clause into the filter
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clause.conditions.extend(clause.conditions);
        self
    }

    /// AND a single condition into the filter
    pub fn and_where(mut self, condition: Condition) -> Self {
        self.where_clause.push(condition);
        self
    }

    /// Add ORDER BY key
    pub fn order_by(mut self, key: OrderBy) -> Self {
        self.order_by.push(key);
        self
    }

    /// Add ORDER BY keys in priority order
    pub fn order_by_all(mut self, keys: impl IntoIterator<Item = OrderBy>) -> Self {
        self.order_by.extend(keys);
        self
    }

    /// Add LIMIT/OFFSET
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn base(&self) -> Entity {
        self.base
    }

    pub fn select_fields(&self) -> &[Field] {
        &self.select_fields
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn filter(&self) -> &WhereClause {
        &self.where_clause
    }

    pub fn ordering(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    /// The join that brings `entity` into scope, if any
    pub fn join_for(&self, entity: Entity) -> Option<&Join> {
        self.joins.iter().find(|join| join.entity() == entity)
    }

    /// Whether columns of `entity` can be referenced by this query
    pub fn is_in_scope(&self, entity: Entity) -> bool {
        self.base == entity || self.join_for(entity).is_some()
    }

    /// Every field the query reads: projection, filter and ordering
    pub fn referenced_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.select_fields
            .iter()
            .copied()
            .chain(self.where_clause.conditions.iter().map(|c| c.field))
            .chain(self.order_by.iter().map(|o| o.field))
    }

    /// Same filter and joins, no projection, ordering or window
    pub fn count_query(&self) -> QueryBuilder {
        let mut count_builder = self.clone();
        count_builder.select_fields.clear();
        count_builder.order_by.clear();
        count_builder.pagination = None;
        count_builder
    }

    /// Count query with joins pruned to what the filter needs
    ///
    /// Member → Team is many-to-one, so dropping the left join never changes the
    /// row count. When the filter does reference the joined entity the join becomes
    /// INNER: every operator rejects NULL, so unmatched members were excluded anyway.
    pub fn simplified_count_query(&self) -> QueryBuilder {
        let mut count_builder = self.count_query();
        let filter = &count_builder.where_clause;
        count_builder.joins = count_builder
            .joins
            .iter()
            .filter(|join| filter.references(join.entity()))
            .map(|join| join.with_type(JoinType::Inner))
            .collect();
        count_builder
    }

    fn push_from_and_where(&self, sql: &mut String) {
        sql.push_str(&format!(" FROM {}", self.base.to_sql()));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }

        if !self.where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clause.to_sql());
        }
    }

    /// Build the complete SQL query string with inlined literals
    pub fn build_sql(&self) -> String {
        let mut sql = String::from("SELECT ");

        let select_parts: Vec<String> = self
            .select_fields
            .iter()
            .map(|field| format!("{} AS {}", field.column(), field.alias()))
            .collect();
        sql.push_str(&select_parts.join(", "));

        self.push_from_and_where(&mut sql);

        if !self.order_by.is_empty() {
            let order_parts: Vec<String> = self.order_by.iter().map(OrderBy::to_sql).collect();
            sql.push_str(&format!(" ORDER BY {}", order_parts.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }

    /// Build `SELECT COUNT(*)` over the same source, joins and filter
    pub fn build_count_sql(&self) -> String {
        let mut sql = String::from("SELECT COUNT(*)");
        self.push_from_and_where(&mut sql);
        sql
    }
}
