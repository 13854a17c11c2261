//! Authoritative rank assignment.
//!
//! Rank is decoupled from display order: a table sorted by name still
//! shows each member's badge-based rank. A copy of the input is ordered
//! canonically, an id → position map is built, and ranks are
//! reattached in whatever order the caller supplied.

use std::collections::HashMap;

use jam_model::Member;

use crate::sort::canonical_cmp;

/// Rank used when an id cannot be found in the rank map. Collisions on
/// duplicate ids resolve to the first occurrence's rank instead; only a
/// genuine lookup miss lands here.
pub const FALLBACK_RANK: u32 = 999;

/// A copy of the members in canonical scoring order.
pub fn canonical_order(members: &[Member]) -> Vec<Member> {
    let mut ordered = members.to_vec();
    ordered.sort_by(canonical_cmp);
    ordered
}

/// Attach authoritative ranks, preserving the caller's order.
///
/// For unique ids the assigned ranks are exactly {1, ..., N}.
pub fn assign_ranks(members: &[Member]) -> Vec<Member> {
    let ordered = canonical_order(members);
    let mut rank_map: HashMap<&str, u32> = HashMap::with_capacity(ordered.len());
    for (position, member) in ordered.iter().enumerate() {
        // First occurrence wins on duplicate ids.
        rank_map
            .entry(member.id.as_str())
            .or_insert(position as u32 + 1);
    }

    members
        .iter()
        .map(|member| {
            let rank = rank_map
                .get(member.id.as_str())
                .copied()
                .unwrap_or(FALLBACK_RANK);
            Member {
                rank: Some(rank),
                ..member.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, skill: u32, arcade: u32, trivia: u32) -> Member {
        Member {
            id: id.to_string(),
            name: id.to_string(),
            skill_badges: skill,
            arcade_games: arcade,
            trivia_games: trivia,
            ..Member::default()
        }
    }

    #[test]
    fn ranks_follow_the_canonical_chain() {
        let members = vec![
            member("a", 3, 0, 0),
            member("b", 5, 1, 0),
            member("c", 5, 2, 0),
            member("d", 5, 2, 4),
        ];
        let ranked = assign_ranks(&members);
        let ranks: Vec<_> = ranked.iter().map(|m| (m.id.as_str(), m.rank)).collect();
        assert_eq!(
            ranks,
            vec![
                ("a", Some(4)),
                ("b", Some(3)),
                ("c", Some(2)),
                ("d", Some(1)),
            ]
        );
    }

    #[test]
    fn caller_order_is_preserved() {
        let members = vec![member("z", 1, 0, 0), member("a", 9, 0, 0)];
        let ranked = assign_ranks(&members);
        assert_eq!(ranked[0].id, "z");
        assert_eq!(ranked[0].rank, Some(2));
        assert_eq!(ranked[1].rank, Some(1));
    }

    #[test]
    fn duplicate_ids_share_the_first_slot() {
        let members = vec![member("dup", 9, 0, 0), member("dup", 1, 0, 0)];
        let ranked = assign_ranks(&members);
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[1].rank, Some(1));
    }

    #[test]
    fn equal_badges_rank_by_games_and_hence_points() {
        // Same badge count; the extra arcade game carries both the
        // tie-break and the higher weighted points.
        let mut stronger = member("strong", 4, 3, 0);
        stronger.points = stronger.fallback_points();
        let mut weaker = member("weak", 4, 1, 0);
        weaker.points = weaker.fallback_points();
        assert!(stronger.points > weaker.points);

        let ranked = assign_ranks(&[weaker, stronger]);
        assert_eq!(ranked[0].id, "weak");
        assert_eq!(ranked[0].rank, Some(2));
        assert_eq!(ranked[1].rank, Some(1));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(assign_ranks(&[]).is_empty());
    }
}
