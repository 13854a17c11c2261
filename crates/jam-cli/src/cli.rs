//! CLI argument definitions for the leaderboard tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jamboard",
    version,
    about = "Study-jam leaderboard - rank and report participant progress",
    long_about = "Rank study-jam participants from a spreadsheet export.\n\n\
                  Reads data/leaderboard.csv, normalizes inconsistent column\n\
                  headers, and produces ranked tables, summary statistics,\n\
                  and CSV exports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing the leaderboard data file.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the ranked leaderboard.
    Board(BoardArgs),

    /// Show summary statistics.
    Stats(StatsArgs),

    /// Show the top performers podium.
    Top(TopArgs),

    /// Show the weekly points series.
    Weekly,

    /// Write the leaderboard as CSV.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct BoardArgs {
    /// Case-insensitive search over name and handle.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Keep only members on this track ('all' disables).
    #[arg(long = "track", value_name = "TRACK")]
    pub track: Option<String>,

    /// Week filter ('all' disables). The current schema carries no
    /// week field, so this passes everything through.
    #[arg(long = "week", value_name = "WEEK")]
    pub week: Option<String>,

    /// Keep only verified members.
    #[arg(long = "verified-only")]
    pub verified_only: bool,

    /// Display sort field (points, modules, name, streak, skillBadges,
    /// arcadeGames, syllabusCompleted). Rank numbers are unaffected.
    #[arg(long = "sort", value_name = "FIELD", default_value = "points")]
    pub sort: String,

    /// Display sort direction (asc or desc).
    #[arg(long = "direction", value_name = "DIR", default_value = "desc")]
    pub direction: String,

    /// Show at most this many rows (ranks still reflect the full set).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TopArgs {
    /// Podium size.
    #[arg(short = 'n', long = "count", value_name = "N", default_value_t = 3)]
    pub count: usize,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output path for the CSV document.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "gdg-study-jam-leaderboard.csv"
    )]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
