//! Terminal table rendering for the leaderboard surfaces.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jam_model::{Member, Stats, WeeklyPoint};
use jam_rank::TopPerformer;

/// Render the ranked leaderboard.
pub fn board_table(members: &[Member]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Name"),
        header_cell("Handle"),
        header_cell("Streak"),
        header_cell("Syllabus"),
        header_cell("Badges"),
        header_cell("Arcade"),
        header_cell("Trivia"),
        header_cell("Points"),
        header_cell("Verified"),
    ]);
    for column in [0, 3, 4, 5, 6, 7, 8] {
        align_column(&mut table, column, CellAlignment::Right);
    }
    align_column(&mut table, 9, CellAlignment::Center);
    for member in members {
        table.add_row(vec![
            rank_cell(member.rank),
            Cell::new(&member.name),
            Cell::new(&member.handle),
            Cell::new(member.streak),
            Cell::new(member.syllabus_completed),
            Cell::new(member.skill_badges),
            Cell::new(member.arcade_games),
            Cell::new(member.trivia_games),
            Cell::new(member.points),
            verified_cell(member.verified),
        ]);
    }
    table
}

/// Render the summary statistics as label/value pairs.
pub fn stats_table(stats: &Stats) -> Table {
    let mut table = new_table();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows: Vec<(&str, String)> = vec![
        ("Participants", stats.participants.to_string()),
        ("Active participants", stats.active_participants.to_string()),
        ("Total points", stats.total_points.to_string()),
        ("Avg modules", format!("{:.1}", stats.avg_modules)),
        ("Active streaks", stats.active_streaks.to_string()),
        ("Skill badges", stats.total_skill_badges.to_string()),
        ("Arcade games", stats.total_arcade_games.to_string()),
        ("Trivia games", stats.total_trivia_games.to_string()),
        ("Verified", stats.verified_count.to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

/// Render the podium.
pub fn top_table(top: &[TopPerformer]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Name"),
        header_cell("Badges"),
        header_cell("Arcade"),
        header_cell("Points"),
    ]);
    align_column(&mut table, 0, CellAlignment::Center);
    for column in [2, 3, 4] {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for entry in top {
        table.add_row(vec![
            rank_cell(Some(entry.position)),
            Cell::new(&entry.member.name),
            Cell::new(entry.member.skill_badges),
            Cell::new(entry.member.arcade_games),
            Cell::new(entry.member.points),
        ]);
    }
    table
}

/// Render the weekly points series.
pub fn weekly_table(series: &[WeeklyPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec![header_cell("Week"), header_cell("Points")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in series {
        table.add_row(vec![Cell::new(&point.week), Cell::new(point.points)]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rank_cell(rank: Option<u32>) -> Cell {
    match rank {
        Some(1) => Cell::new(1).fg(Color::Yellow).add_attribute(Attribute::Bold),
        Some(2) => Cell::new(2).fg(Color::White).add_attribute(Attribute::Bold),
        Some(3) => Cell::new(3).fg(Color::DarkYellow),
        Some(rank) => Cell::new(rank),
        None => Cell::new("-"),
    }
}

fn verified_cell(verified: bool) -> Cell {
    if verified {
        Cell::new("Yes").fg(Color::Green)
    } else {
        Cell::new("No").fg(Color::DarkGrey)
    }
}
