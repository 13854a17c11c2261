//! Summary statistics and chart series types.

use serde::{Deserialize, Serialize};

/// Aggregate statistics over a member collection.
///
/// All fields are zero for an empty collection; averages never go
/// through a division by zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub participants: usize,
    /// Members with at least one completed curriculum unit.
    pub active_participants: usize,
    pub total_points: u64,
    /// Mean of `modules`, rounded to one decimal place.
    pub avg_modules: f64,
    /// Members with a streak greater than zero.
    pub active_streaks: usize,
    pub total_skill_badges: u64,
    pub total_arcade_games: u64,
    pub total_trivia_games: u64,
    pub verified_count: usize,
}

/// One bucket of the weekly points series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub week: String,
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_camel_case() {
        let stats = Stats {
            participants: 2,
            total_points: 10,
            ..Stats::default()
        };
        let json = serde_json::to_string(&stats).expect("serialize stats");
        assert!(json.contains("\"totalPoints\":10"));
        assert!(json.contains("\"avgModules\":0.0"));
    }
}
