use member_query::search::{MemberSearchCondition, Pageable};
use member_query::storage::InMemoryStore;
use proptest::prelude::*;

/// A member row to seed: username, age, index into the seeded teams
pub type MemberSeed = (Option<String>, i32, Option<usize>);

pub const TEAM_NAMES: [&str; 3] = ["teamA", "teamB", "teamC"];

/// Small username alphabet so equality filters actually hit
pub fn username_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("member1".to_string()),
        Just("member2".to_string()),
        Just("member3".to_string()),
    ])
}

pub fn member_seed_strategy() -> impl Strategy<Value = MemberSeed> {
    (
        username_strategy(),
        0i32..60,
        prop::option::of(0usize..TEAM_NAMES.len()),
    )
}

pub fn store_seed_strategy() -> impl Strategy<Value = Vec<MemberSeed>> {
    prop::collection::vec(member_seed_strategy(), 0..20)
}

/// Text filter values, blanks included
pub fn text_filter_strategy(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        prop::sample::select(values).prop_map(str::to_string),
        Just(String::new()),
        Just("   ".to_string()),
    ])
}

pub fn condition_strategy() -> impl Strategy<Value = MemberSearchCondition> {
    (
        text_filter_strategy(&["member1", "member2", "member3"]),
        text_filter_strategy(&TEAM_NAMES),
        prop::option::of(0i32..60),
        prop::option::of(0i32..60),
    )
        .prop_map(|(username, team_name, age_goe, age_loe)| MemberSearchCondition {
            username,
            team_name,
            age_goe,
            age_loe,
        })
}

pub fn pageable_strategy() -> impl Strategy<Value = Pageable> {
    (0i64..25, 1i64..8).prop_map(|(offset, size)| Pageable::with_offset(offset, size))
}

pub fn build_store(seeds: &[MemberSeed]) -> InMemoryStore {
    let store = InMemoryStore::new();
    let teams: Vec<i64> = TEAM_NAMES
        .iter()
        .map(|name| store.insert_team(name).team_id)
        .collect();
    for (username, age, team) in seeds {
        store
            .insert_member(username.as_deref(), *age, team.map(|index| teams[index]))
            .unwrap();
    }
    store
}
