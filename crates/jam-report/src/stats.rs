//! Aggregate statistics over a member collection.

use jam_model::{Member, Stats};

/// Single-pass reduction; an empty collection yields all-zero stats
/// rather than NaN averages.
pub fn compute_stats(members: &[Member]) -> Stats {
    let mut stats = Stats {
        participants: members.len(),
        ..Stats::default()
    };

    let mut module_total: u64 = 0;
    for member in members {
        stats.total_points += u64::from(member.points);
        stats.total_skill_badges += u64::from(member.skill_badges);
        stats.total_arcade_games += u64::from(member.arcade_games);
        stats.total_trivia_games += u64::from(member.trivia_games);
        module_total += u64::from(member.modules);
        if member.streak > 0 {
            stats.active_streaks += 1;
        }
        if member.syllabus_completed > 0 {
            stats.active_participants += 1;
        }
        if member.verified {
            stats.verified_count += 1;
        }
    }

    if !members.is_empty() {
        stats.avg_modules = round1(module_total as f64 / members.len() as f64);
    }
    stats
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(points: u32, modules: u32, streak: u32) -> Member {
        Member {
            id: "x".to_string(),
            points,
            modules,
            streak,
            ..Member::default()
        }
    }

    #[test]
    fn empty_input_yields_zero_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.avg_modules, 0.0);
    }

    #[test]
    fn totals_and_average() {
        let members = vec![member(10, 3, 2), member(20, 4, 0), member(0, 0, 1)];
        let stats = compute_stats(&members);
        assert_eq!(stats.participants, 3);
        assert_eq!(stats.total_points, 30);
        assert_eq!(stats.avg_modules, 2.3);
        assert_eq!(stats.active_streaks, 2);
    }

    #[test]
    fn activity_and_verification_counts() {
        let mut active = member(5, 1, 0);
        active.syllabus_completed = 2;
        active.verified = true;
        let idle = member(0, 0, 0);
        let stats = compute_stats(&[active, idle]);
        assert_eq!(stats.active_participants, 1);
        assert_eq!(stats.verified_count, 1);
    }

    #[test]
    fn input_is_not_mutated() {
        let members = vec![member(10, 1, 1)];
        let before = members.clone();
        let _ = compute_stats(&members);
        assert_eq!(members, before);
    }
}
