use crate::common::{scenario_store, usernames, CountingExecutor, StalledExecutor};
use member_query::search::{MemberSearchCondition, MemberSearchRepository, Pageable};
use member_query::SearchConfig;
use std::time::Duration;

#[tokio::test]
async fn test_first_page_with_exact_total() {
    let repository = MemberSearchRepository::new(CountingExecutor::new(scenario_store()));
    let page = repository
        .search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 2))
        .await
        .unwrap();

    assert_eq!(usernames(page.content()), vec![Some("member1"), Some("member2")]);
    assert_eq!(page.total(), 4);
    assert_eq!(page.total_pages(), 2);
    assert!(page.has_next());
    assert!(page.is_first());
}

#[tokio::test]
async fn test_always_counts_even_for_short_page() {
    let repository = MemberSearchRepository::new(CountingExecutor::new(scenario_store()));
    let page = repository
        .search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 10))
        .await
        .unwrap();

    assert_eq!(page.number_of_elements(), 4);
    assert_eq!(page.total(), 4);
    assert_eq!(repository.executor().content_queries(), 1);
    assert_eq!(repository.executor().count_queries(), 1);
}

#[tokio::test]
async fn test_count_ignores_window_and_keeps_join() {
    let repository = MemberSearchRepository::new(CountingExecutor::new(scenario_store()));
    let page = repository
        .search_page_simple(
            &MemberSearchCondition::new().age_goe(20),
            &Pageable::with_offset(1, 1),
        )
        .await
        .unwrap();

    assert_eq!(usernames(page.content()), vec![Some("member3")]);
    assert_eq!(page.total(), 3);

    let count_query = repository.executor().last_count_query().unwrap();
    assert_eq!(count_query.pagination(), None);
    assert_eq!(count_query.joins().len(), 1);
}

#[tokio::test]
async fn test_negative_offset_is_invalid_argument() {
    let repository = MemberSearchRepository::new(CountingExecutor::new(scenario_store()));
    let err = repository
        .search_page_simple(&MemberSearchCondition::new(), &Pageable::with_offset(-1, 10))
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(repository.executor().content_queries(), 0);
    assert_eq!(repository.executor().count_queries(), 0);
}

#[tokio::test]
async fn test_non_positive_page_size_is_invalid_argument() {
    let repository = MemberSearchRepository::new(scenario_store());
    for size in [0, -3] {
        let err = repository
            .search_page_simple(&MemberSearchCondition::new(), &Pageable::with_offset(0, size))
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

#[tokio::test]
async fn test_page_size_above_configured_maximum() {
    let config = SearchConfig {
        max_page_size: 3,
        ..SearchConfig::default()
    };
    let repository = MemberSearchRepository::with_config(scenario_store(), &config);

    let err = repository
        .search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 4))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let page = repository
        .search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 3))
        .await
        .unwrap();
    assert_eq!(page.number_of_elements(), 3);
}

#[tokio::test]
async fn test_count_failure_fails_page() {
    let executor = CountingExecutor::new(scenario_store());
    executor.fail_count();
    let repository = MemberSearchRepository::new(executor);

    let err = repository
        .search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 10))
        .await
        .unwrap_err();
    assert!(err.is_storage_failure());
}

#[tokio::test]
async fn test_cancelled_before_queries_finish_yields_no_page() {
    let repository = MemberSearchRepository::new(StalledExecutor::all(scenario_store()));
    let result = tokio::time::timeout(
        Duration::from_millis(50),
        repository.search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 2)),
    )
    .await;
    assert!(result.is_err());

    // Content finishes but the concurrent count never does
    let repository = MemberSearchRepository::new(StalledExecutor::count_only(scenario_store()));
    let result = tokio::time::timeout(
        Duration::from_millis(50),
        repository.search_page_simple(&MemberSearchCondition::new(), &Pageable::of(0, 10)),
    )
    .await;
    assert!(result.is_err());
}
