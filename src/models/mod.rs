pub mod member;
pub mod member_team_row;
pub mod team;

// Re-export core models for easy access
pub use member::Member;
pub use member_team_row::MemberTeamRow;
pub use team::Team;
