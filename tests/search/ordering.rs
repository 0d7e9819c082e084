use crate::common::{scenario_store, usernames};
use member_query::search::{MemberSearchCondition, MemberSearchRepository, Pageable, SortKey};

#[tokio::test]
async fn test_age_desc_then_username_nulls_last() {
    let store = scenario_store();
    store.insert_member(None, 100, None).unwrap();
    store.insert_member(Some("member5"), 100, None).unwrap();
    store.insert_member(Some("member6"), 100, None).unwrap();
    let repository = MemberSearchRepository::new(store);

    let pageable = Pageable::of(0, 10)
        .with_sort(SortKey::desc("age"))
        .with_sort(SortKey::asc("username").nulls_last());
    let page = repository
        .search_page_complex(&MemberSearchCondition::new().age_goe(100), &pageable)
        .await
        .unwrap();

    assert_eq!(
        usernames(page.content()),
        vec![Some("member5"), Some("member6"), None]
    );
}

#[tokio::test]
async fn test_nulls_first() {
    let store = scenario_store();
    store.insert_member(None, 15, None).unwrap();
    let repository = MemberSearchRepository::new(store);

    let pageable = Pageable::of(0, 3).with_sort(SortKey::asc("username").nulls_first());
    let page = repository
        .search_page_simple(&MemberSearchCondition::new(), &pageable)
        .await
        .unwrap();

    assert_eq!(
        usernames(page.content()),
        vec![None, Some("member1"), Some("member2")]
    );
    assert_eq!(page.total(), 5);
}

#[tokio::test]
async fn test_offset_paging_by_username_desc() {
    let repository = MemberSearchRepository::new(scenario_store());
    let pageable = Pageable::with_offset(1, 2).with_sort(SortKey::parse("username,desc").unwrap());
    let page = repository
        .search_page_simple(&MemberSearchCondition::new(), &pageable)
        .await
        .unwrap();

    assert_eq!(usernames(page.content()), vec![Some("member3"), Some("member2")]);
    assert_eq!(page.total(), 4);
    assert!(page.has_previous());
}

#[tokio::test]
async fn test_sort_by_team_name_keeps_left_join() {
    let store = scenario_store();
    store.insert_member(Some("free_agent"), 5, None).unwrap();
    let repository = MemberSearchRepository::new(store);

    let pageable = Pageable::of(0, 10)
        .with_sort(SortKey::desc("teamName").nulls_last())
        .with_sort(SortKey::asc("age"));
    let page = repository
        .search_page_complex(&MemberSearchCondition::new(), &pageable)
        .await
        .unwrap();

    assert_eq!(
        usernames(page.content()),
        vec![
            Some("member3"),
            Some("member4"),
            Some("member1"),
            Some("member2"),
            Some("free_agent"),
        ]
    );
    assert_eq!(page.total(), 5);
}

#[tokio::test]
async fn test_unknown_sort_property_is_invalid_argument() {
    let repository = MemberSearchRepository::new(scenario_store());
    let pageable = Pageable::of(0, 10).with_sort(SortKey::asc("password"));
    let err = repository
        .search_page_simple(&MemberSearchCondition::new(), &pageable)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
}
