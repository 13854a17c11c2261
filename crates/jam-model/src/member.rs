//! The canonical participant record.

use serde::{Deserialize, Serialize};

/// A normalized study-jam participant.
///
/// Members are value objects derived fresh from raw rows on every read;
/// two normalizations of the same input produce identical collections.
/// `rank` is assigned by the rank assigner and is never authoritative
/// state on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Stable identifier: profile URL/handle if present, else name,
    /// else a synthesized positional id. Never empty.
    pub id: String,
    pub name: String,
    pub handle: String,
    pub profile_url: String,
    /// Track or institution label; empty when the source has none.
    pub track: String,
    pub streak: u32,
    /// Completed curriculum units (a.k.a. total completions).
    pub syllabus_completed: u32,
    pub skill_badges: u32,
    pub arcade_games: u32,
    /// Present in later data sources only; defaults to 0.
    pub trivia_games: u32,
    /// Direct from source, or the weighted fallback
    /// `arcade_games * 2 + skill_badges + trivia_games`.
    pub points: u32,
    pub verified: bool,
    pub modules: u32,
    pub progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Member {
    /// The weighted score used when the source carries no points column.
    ///
    /// Re-derivable from the member's own counts; no hidden state.
    /// Saturates so degenerate counts cannot overflow.
    pub fn fallback_points(&self) -> u32 {
        self.arcade_games
            .saturating_mul(2)
            .saturating_add(self.skill_badges)
            .saturating_add(self.trivia_games)
    }
}
