//! Display ordering with the fixed tie-break chain.
//!
//! Used both for user-facing table order (any field, either direction)
//! and as the building block for canonical ranking, which always runs
//! skill badges descending.

use std::cmp::Ordering;

use jam_model::{Member, SortDirection, SortField};

/// Sort a copy of the members by the requested field.
///
/// The sort is stable: ties on non-primary fields keep prior relative
/// order. Direction inverts the whole comparison, so the skill-badge
/// tie-break chain follows the primary direction.
pub fn sort_members(
    members: &[Member],
    field: SortField,
    direction: SortDirection,
) -> Vec<Member> {
    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Ascending comparison on one field.
///
/// `SkillBadges` carries its fixed tie-break chain (points, then
/// streak); every other field compares directly and leaves ties to the
/// stable sort.
fn compare(a: &Member, b: &Member, field: SortField) -> Ordering {
    match field {
        SortField::Points => a.points.cmp(&b.points),
        SortField::Modules => a.modules.cmp(&b.modules),
        SortField::Streak => a.streak.cmp(&b.streak),
        SortField::ArcadeGames => a.arcade_games.cmp(&b.arcade_games),
        SortField::SyllabusCompleted => a.syllabus_completed.cmp(&b.syllabus_completed),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::SkillBadges => a
            .skill_badges
            .cmp(&b.skill_badges)
            .then_with(|| a.points.cmp(&b.points))
            .then_with(|| a.streak.cmp(&b.streak)),
    }
}

/// The canonical scoring comparison: skill badges, then arcade games,
/// then trivia games, all descending. Rank assignment and top-performer
/// selection both order by this, independent of any display sort.
pub fn canonical_cmp(a: &Member, b: &Member) -> Ordering {
    b.skill_badges
        .cmp(&a.skill_badges)
        .then_with(|| b.arcade_games.cmp(&a.arcade_games))
        .then_with(|| b.trivia_games.cmp(&a.trivia_games))
}
