use crate::common::{scenario_store, usernames, CountingExecutor};
use member_query::search::{MemberSearchCondition, MemberSearchRepository};

#[tokio::test]
async fn test_empty_condition_returns_every_member() {
    let repository = MemberSearchRepository::new(scenario_store());
    let rows = repository.search(&MemberSearchCondition::new()).await.unwrap();

    assert_eq!(
        usernames(&rows),
        vec![Some("member1"), Some("member2"), Some("member3"), Some("member4")]
    );
}

#[tokio::test]
async fn test_age_goe_filters() {
    let repository = MemberSearchRepository::new(scenario_store());
    let rows = repository
        .search(&MemberSearchCondition::new().age_goe(25))
        .await
        .unwrap();

    assert_eq!(usernames(&rows), vec![Some("member3"), Some("member4")]);
}

#[tokio::test]
async fn test_age_bounds_are_inclusive() {
    let repository = MemberSearchRepository::new(scenario_store());
    let rows = repository
        .search(&MemberSearchCondition::new().age_goe(20).age_loe(30))
        .await
        .unwrap();

    assert_eq!(usernames(&rows), vec![Some("member2"), Some("member3")]);
}

#[tokio::test]
async fn test_all_four_fields_combine_with_and() {
    let repository = MemberSearchRepository::new(scenario_store());
    let condition = MemberSearchCondition::new()
        .username("member4")
        .team_name("teamB")
        .age_goe(35)
        .age_loe(40);
    let rows = repository.search(&condition).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username.as_deref(), Some("member4"));
    assert_eq!(rows[0].age, 40);
    assert_eq!(rows[0].team_name.as_deref(), Some("teamB"));

    let mismatched = condition.team_name("teamA");
    assert!(repository.search(&mismatched).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_team_name_filters_through_join() {
    let repository = MemberSearchRepository::new(scenario_store());
    let rows = repository
        .search(&MemberSearchCondition::new().team_name("teamB"))
        .await
        .unwrap();

    assert_eq!(usernames(&rows), vec![Some("member3"), Some("member4")]);
    assert!(rows.iter().all(|row| row.team_id.is_some()));
}

#[tokio::test]
async fn test_blank_text_fields_are_ignored() {
    let repository = MemberSearchRepository::new(scenario_store());
    let blank = MemberSearchCondition::new().username("   ").team_name("").age_loe(20);
    let absent = MemberSearchCondition::new().age_loe(20);

    assert_eq!(
        repository.search(&blank).await.unwrap(),
        repository.search(&absent).await.unwrap()
    );
}

#[tokio::test]
async fn test_member_without_team_is_kept_by_left_join() {
    let store = scenario_store();
    store.insert_member(Some("free_agent"), 50, None).unwrap();
    let repository = MemberSearchRepository::new(store);

    let rows = repository.search(&MemberSearchCondition::new()).await.unwrap();
    assert_eq!(rows.len(), 5);
    let free_agent = &rows[4];
    assert_eq!(free_agent.username.as_deref(), Some("free_agent"));
    assert_eq!(free_agent.team_id, None);
    assert_eq!(free_agent.team_name, None);

    let filtered = repository
        .search(&MemberSearchCondition::new().team_name("teamA"))
        .await
        .unwrap();
    assert!(filtered.iter().all(|row| row.username.as_deref() != Some("free_agent")));
}

#[tokio::test]
async fn test_search_never_counts() {
    let repository = MemberSearchRepository::new(CountingExecutor::new(scenario_store()));
    repository.search(&MemberSearchCondition::new()).await.unwrap();

    assert_eq!(repository.executor().content_queries(), 1);
    assert_eq!(repository.executor().count_queries(), 0);
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let executor = CountingExecutor::new(scenario_store());
    executor.fail_content();
    let repository = MemberSearchRepository::new(executor);

    let err = repository.search(&MemberSearchCondition::new()).await.unwrap_err();
    assert!(err.is_storage_failure());
}

#[tokio::test]
async fn test_no_break_space_username_is_a_filter() {
    let repository = MemberSearchRepository::new(scenario_store());
    let rows = repository
        .search(&MemberSearchCondition::new().username("\u{A0}"))
        .await
        .unwrap();
    assert!(rows.is_empty());

    let rows = repository
        .search(&MemberSearchCondition::new().username("\u{2003}\t"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 4);
}
