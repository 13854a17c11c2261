//! Command implementations over the core pipeline.

use std::path::Path;

use anyhow::Context;

use jam_model::{Criteria, LeaderboardQuery, Member};
use jam_report::DEFAULT_WEEKS;

use jam_cli::table;

use crate::cli::{BoardArgs, ExportArgs, StatsArgs, TopArgs};

pub fn run_board(data_dir: &Path, args: &BoardArgs) -> anyhow::Result<()> {
    let members = load(data_dir)?;
    let query = LeaderboardQuery {
        criteria: Criteria {
            search: args.search.clone(),
            track: args.track.clone(),
            week: args.week.clone(),
            verified_only: args.verified_only,
        },
        sort_field: args.sort.parse()?,
        direction: args.direction.parse()?,
        limit: args.limit,
    };
    let ranked = jam_rank::leaderboard(&members, &query);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else if ranked.is_empty() {
        println!("No members match the current filters.");
    } else {
        println!("{}", table::board_table(&ranked));
    }
    Ok(())
}

pub fn run_stats(data_dir: &Path, args: &StatsArgs) -> anyhow::Result<()> {
    let members = load(data_dir)?;
    let stats = jam_report::compute_stats(&members);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", table::stats_table(&stats));
    }
    Ok(())
}

pub fn run_top(data_dir: &Path, args: &TopArgs) -> anyhow::Result<()> {
    let members = load(data_dir)?;
    let top = jam_rank::top_performers(&members, args.count);
    if top.is_empty() {
        println!("No members to rank.");
    } else {
        println!("{}", table::top_table(&top));
    }
    Ok(())
}

pub fn run_weekly(data_dir: &Path) -> anyhow::Result<()> {
    let members = load(data_dir)?;
    let series = jam_report::weekly_series(&members, DEFAULT_WEEKS);
    println!("{}", table::weekly_table(&series));
    Ok(())
}

pub fn run_export(data_dir: &Path, args: &ExportArgs) -> anyhow::Result<()> {
    let members = load(data_dir)?;
    let document = jam_report::export_csv(&members);
    std::fs::write(&args.output, &document)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(
        rows = members.len(),
        path = %args.output.display(),
        "exported leaderboard CSV"
    );
    println!("Wrote {} rows to {}", members.len(), args.output.display());
    Ok(())
}

fn load(data_dir: &Path) -> anyhow::Result<Vec<Member>> {
    let members = jam_ingest::load_members(data_dir)
        .with_context(|| format!("failed to load data from {}", data_dir.display()))?;
    tracing::info!(members = members.len(), "loaded leaderboard data");
    Ok(members)
}
