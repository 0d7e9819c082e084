use serde::{Deserialize, Serialize};

/// Sparse member filter: every field is optional and absence means "no constraint"
///
/// Deserializes from camelCase request parameters (`teamName`, `ageGoe`, `ageLoe`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower age bound
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Same condition with blank text fields cleared
    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.clone().filter(|s| has_text(s)),
            team_name: self.team_name.clone().filter(|s| has_text(s)),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }
}

/// True when the text holds at least one non-whitespace character
///
/// Whitespace is ASCII whitespace, the `U+001C..=U+001F` separators and Unicode
/// space/line/paragraph separators. No-break spaces (`U+00A0`, `U+2007`, `U+202F`)
/// and `U+0085` are text.
pub fn has_text(value: &str) -> bool {
    !value.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}
