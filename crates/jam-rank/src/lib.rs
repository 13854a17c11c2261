//! Leaderboard pipeline: filter, display sort, rank assignment, and
//! top-performer selection over normalized members.

pub mod filter;
pub mod rank;
pub mod sort;

use jam_model::{LeaderboardQuery, Member};
use serde::{Deserialize, Serialize};

pub use rank::{FALLBACK_RANK, assign_ranks, canonical_order};
pub use sort::sort_members;

/// A podium entry from [`top_performers`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub member: Member,
    /// 1-based podium position.
    pub position: u32,
}

/// The full display pipeline: filter, sort for display, attach
/// authoritative ranks, then truncate.
///
/// Truncation happens after ranking, so rank values reflect the whole
/// filtered set rather than the visible slice.
pub fn leaderboard(members: &[Member], query: &LeaderboardQuery) -> Vec<Member> {
    let filtered = filter::apply(members, &query.criteria);
    let sorted = sort::sort_members(&filtered, query.sort_field, query.direction);
    let mut ranked = rank::assign_ranks(&sorted);
    if let Some(limit) = query.limit {
        ranked.truncate(limit);
    }
    tracing::debug!(
        input = members.len(),
        filtered = filtered.len(),
        returned = ranked.len(),
        sort_field = query.sort_field.as_str(),
        "built leaderboard"
    );
    ranked
}

/// The top `n` members by canonical score, positions 1..=n.
pub fn top_performers(members: &[Member], n: usize) -> Vec<TopPerformer> {
    rank::canonical_order(members)
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(index, member)| TopPerformer {
            member,
            position: index as u32 + 1,
        })
        .collect()
}
