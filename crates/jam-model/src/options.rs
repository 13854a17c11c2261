//! Query options for the leaderboard pipeline.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

/// Sortable member fields.
///
/// Parsed from caller-supplied strings; an unrecognized field is a
/// caller bug and fails fast rather than silently picking a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Points,
    Modules,
    Name,
    Streak,
    SkillBadges,
    ArcadeGames,
    SyllabusCompleted,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Modules => "modules",
            Self::Name => "name",
            Self::Streak => "streak",
            Self::SkillBadges => "skillBadges",
            Self::ArcadeGames => "arcadeGames",
            Self::SyllabusCompleted => "syllabusCompleted",
        }
    }
}

impl FromStr for SortField {
    type Err = LeaderboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "points" => Ok(Self::Points),
            "modules" => Ok(Self::Modules),
            "name" => Ok(Self::Name),
            "streak" => Ok(Self::Streak),
            "skillBadges" | "skill-badges" => Ok(Self::SkillBadges),
            "arcadeGames" | "arcade-games" => Ok(Self::ArcadeGames),
            "syllabusCompleted" | "syllabus-completed" => Ok(Self::SyllabusCompleted),
            other => Err(LeaderboardError::UnknownSortField(other.to_string())),
        }
    }
}

/// Display sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = LeaderboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(LeaderboardError::UnknownDirection(other.to_string())),
        }
    }
}

/// Filter criteria; all predicates compose by logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Case-insensitive substring match against name or handle.
    /// Empty or whitespace-only means no filter.
    pub search: Option<String>,
    /// Equality filter on `track`; `"all"` or `None` disables.
    pub track: Option<String>,
    /// Reserved week filter; the member schema carries no week field,
    /// so any value passes everything through.
    pub week: Option<String>,
    pub verified_only: bool,
}

impl Criteria {
    /// A criteria set that matches every member.
    pub fn any() -> Self {
        Self::default()
    }
}

/// Full leaderboard query: filter, display sort, optional truncation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    pub criteria: Criteria,
    pub sort_field: SortField,
    pub direction: SortDirection,
    /// Applied after ranking: rank values reflect the full filtered
    /// set, not the truncated slice.
    pub limit: Option<usize>,
}
