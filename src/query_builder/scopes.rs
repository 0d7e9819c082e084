use super::{Entity, Field, OrderBy, Pagination, QueryBuilder, Relation, WhereClause};

/// Member query scopes
pub struct MemberScopes;

impl MemberScopes {
    /// Member rows projected with their team, team columns NULL when absent
    ///
    /// The shape every search mode shares: five projection fields, member as the
    /// source, team reached through a left outer join, filter applied as given.
    pub fn member_team_projection(filter: WhereClause) -> QueryBuilder {
        QueryBuilder::new(Entity::Member)
            .select(&Field::PROJECTION)
            .left_join(Relation::MemberTeam)
            .where_clause(filter)
    }

    /// The projection narrowed to a page window in the given order
    pub fn member_team_page(
        filter: WhereClause,
        order: &[OrderBy],
        window: Pagination,
    ) -> QueryBuilder {
        Self::member_team_projection(filter)
            .order_by_all(order.iter().copied())
            .paginate(window)
    }
}
