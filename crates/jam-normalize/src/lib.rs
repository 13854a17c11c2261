//! Row normalization: heterogeneous spreadsheet rows to canonical
//! members.
//!
//! Pure function of its input; never errors. Every missing or
//! malformed field degrades to its default per the permissiveness
//! policy for human-maintained spreadsheet data.

pub mod aliases;
pub mod coerce;

use jam_model::{Member, RawRow};

use crate::coerce::{coerce_count, coerce_flag, coerce_text};

/// Normalize a decoded row sequence into members.
///
/// `index` feeds id synthesis for rows with no usable identity field.
pub fn normalize(rows: &[RawRow]) -> Vec<Member> {
    let members: Vec<Member> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| member_from_row(row, index))
        .collect();
    tracing::debug!(rows = rows.len(), members = members.len(), "normalized rows");
    members
}

/// Normalize a single row. 0-based `index` is the positional fallback
/// for id synthesis.
pub fn member_from_row(row: &RawRow, index: usize) -> Member {
    let name = coerce_text(aliases::first_match(row, aliases::NAME));
    let handle = coerce_text(aliases::first_match(row, aliases::HANDLE));

    let id = synthesize_id(&handle, &name, index);

    let mut member = Member {
        id,
        name,
        profile_url: handle.clone(),
        handle,
        track: coerce_text(aliases::first_match(row, aliases::TRACK)),
        streak: coerce_count(aliases::first_match(row, aliases::STREAK)),
        syllabus_completed: coerce_count(aliases::first_match(row, aliases::SYLLABUS)),
        skill_badges: coerce_count(aliases::first_match(row, aliases::SKILL_BADGES)),
        arcade_games: coerce_count(aliases::first_match(row, aliases::ARCADE_GAMES)),
        trivia_games: coerce_count(aliases::first_match(row, aliases::TRIVIA_GAMES)),
        points: 0,
        verified: coerce_flag(aliases::first_match(row, aliases::VERIFIED)),
        modules: coerce_count(aliases::first_match(row, aliases::MODULES)),
        progress: coerce_count(aliases::first_match(row, aliases::PROGRESS)),
        rank: None,
    };

    // A usable points cell wins; a cell that is absent or holds
    // nothing numeric falls back to the weighted sum over the badge
    // and game counts.
    member.points = aliases::first_match(row, aliases::POINTS)
        .and_then(coerce::try_count)
        .unwrap_or_else(|| member.fallback_points());

    member
}

/// Id candidates in order: handle/profile URL, name, positional.
/// The result is never empty.
fn synthesize_id(handle: &str, name: &str, index: usize) -> String {
    if !handle.is_empty() {
        handle.to_string()
    } else if !name.is_empty() {
        name.to_string()
    } else {
        format!("row-{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jam_model::RawValue;

    fn text_row(pairs: &[(&str, &str)]) -> RawRow {
        let mut row = RawRow::new();
        for (column, value) in pairs {
            row.insert(column, RawValue::Text((*value).to_string()));
        }
        row
    }

    #[test]
    fn empty_row_defaults_everything() {
        let member = member_from_row(&RawRow::new(), 7);
        assert_eq!(member.id, "row-7");
        assert_eq!(member.name, "");
        assert_eq!(member.streak, 0);
        assert_eq!(member.skill_badges, 0);
        assert_eq!(member.points, 0);
        assert!(!member.verified);
    }

    #[test]
    fn historical_headers_map_like_modern_ones() {
        let legacy = member_from_row(
            &text_row(&[("Name", "A"), ("# of Skill Badges Completed", "5")]),
            0,
        );
        let modern = member_from_row(&text_row(&[("name", "A"), ("skillBadges", "5")]), 0);
        assert_eq!(legacy, modern);
        assert_eq!(legacy.skill_badges, 5);
    }

    #[test]
    fn points_fallback_is_weighted_sum() {
        let member = member_from_row(
            &text_row(&[
                ("name", "A"),
                ("skillBadges", "3"),
                ("arcadeGames", "2"),
                ("triviaGames", "1"),
            ]),
            0,
        );
        assert_eq!(member.points, 8);
    }

    #[test]
    fn explicit_points_column_wins_over_fallback() {
        let member = member_from_row(
            &text_row(&[("name", "A"), ("points", "100"), ("skillBadges", "3")]),
            0,
        );
        assert_eq!(member.points, 100);
    }

    #[test]
    fn unparsable_points_column_falls_back_like_absent() {
        // A malformed points cell carries no usable value, so it takes
        // the weighted fallback just as an absent column does.
        let member = member_from_row(
            &text_row(&[("name", "A"), ("points", "n/a"), ("skillBadges", "3")]),
            0,
        );
        assert_eq!(member.points, 3);
    }

    #[test]
    fn zero_points_cell_is_not_treated_as_absent() {
        let member = member_from_row(
            &text_row(&[("name", "A"), ("points", "0"), ("skillBadges", "3")]),
            0,
        );
        assert_eq!(member.points, 0);
    }

    #[test]
    fn extreme_counts_never_panic_the_fallback() {
        let member = member_from_row(
            &text_row(&[
                ("name", "A"),
                ("arcadeGames", "4294967295"),
                ("skillBadges", "3"),
            ]),
            0,
        );
        assert_eq!(member.arcade_games, u32::MAX);
        assert_eq!(member.points, u32::MAX);
    }

    #[test]
    fn id_prefers_handle_then_name() {
        let with_handle = member_from_row(
            &text_row(&[("name", "A"), ("Profile URL", "https://p/a")]),
            0,
        );
        assert_eq!(with_handle.id, "https://p/a");

        let name_only = member_from_row(&text_row(&[("name", "A")]), 0);
        assert_eq!(name_only.id, "A");
    }

    #[test]
    fn normalization_is_deterministic() {
        let rows = vec![
            text_row(&[("name", "A"), ("streak", "3")]),
            text_row(&[("user", "B")]),
        ];
        assert_eq!(normalize(&rows), normalize(&rows));
    }

    #[test]
    fn verified_yes_string() {
        let member = member_from_row(&text_row(&[("name", "A"), ("Verified", "Yes")]), 0);
        assert!(member.verified);
    }
}
