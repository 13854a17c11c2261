//! Per-field column alias tables.
//!
//! Spreadsheet exports have gone through several header spellings; each
//! canonical field carries an ordered candidate list and the first
//! non-null cell wins. The tables are declarative so the mapping stays
//! testable apart from any parsing.

use jam_model::{RawRow, RawValue};

pub const NAME: &[&str] = &[
    "name",
    "Name",
    "username",
    "Username",
    "user",
    "Full Name",
    "full_name",
];

pub const HANDLE: &[&str] = &["handle", "link", "profile", "profileUrl", "Profile URL"];

pub const STREAK: &[&str] = &["streak", "Streak"];

pub const SYLLABUS: &[&str] = &[
    "syllabusCompleted",
    "SyllabusCompleted",
    "syllabus",
    "Syllabus",
    "Total Completions",
    "totalCompletions",
];

pub const SKILL_BADGES: &[&str] = &[
    "skillBadges",
    "SkillBadges",
    "badges",
    "Skill Badges Completed",
    "# of Skill Badges Completed",
    "No of Skill Badges Completed",
];

pub const ARCADE_GAMES: &[&str] = &[
    "arcadeGames",
    "ArcadeGames",
    "arcade",
    "arcadeGame",
    "Arcade Games Completed",
    "No of Arcade Games Completed",
];

pub const TRIVIA_GAMES: &[&str] = &["triviaGames", "TriviaGames", "Trivia Games Completed"];

pub const POINTS: &[&str] = &["points", "Points"];

pub const VERIFIED: &[&str] = &["verified", "Verified"];

pub const MODULES: &[&str] = &["modules", "Modules"];

pub const PROGRESS: &[&str] = &["progress", "Progress"];

pub const TRACK: &[&str] = &["track", "Track", "Institution", "institution"];

/// First non-null cell among the ordered candidates.
pub fn first_match<'a>(row: &'a RawRow, candidates: &[&str]) -> Option<&'a RawValue> {
    candidates.iter().find_map(|column| row.get(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: &[&[&str]] = &[
        NAME,
        HANDLE,
        STREAK,
        SYLLABUS,
        SKILL_BADGES,
        ARCADE_GAMES,
        TRIVIA_GAMES,
        POINTS,
        VERIFIED,
        MODULES,
        PROGRESS,
        TRACK,
    ];

    #[test]
    fn no_column_claimed_by_two_fields() {
        let mut seen = std::collections::BTreeSet::new();
        for table in ALL_TABLES {
            for column in *table {
                assert!(seen.insert(*column), "column {column} appears twice");
            }
        }
    }

    #[test]
    fn earlier_alias_wins() {
        let mut row = RawRow::new();
        row.insert("username", RawValue::Text("second".to_string()));
        row.insert("name", RawValue::Text("first".to_string()));
        assert_eq!(
            first_match(&row, NAME),
            Some(&RawValue::Text("first".to_string()))
        );
    }

    #[test]
    fn null_alias_falls_through() {
        let mut row = RawRow::new();
        row.insert("name", RawValue::Null);
        row.insert("username", RawValue::Text("backup".to_string()));
        assert_eq!(
            first_match(&row, NAME),
            Some(&RawValue::Text("backup".to_string()))
        );
    }
}
