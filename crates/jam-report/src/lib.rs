//! Reporting over normalized members: summary statistics, the weekly
//! chart series, and the fixed-contract CSV export.

pub mod export;
pub mod stats;
pub mod weekly;

pub use export::{CSV_HEADER, export_csv};
pub use stats::compute_stats;
pub use weekly::{DEFAULT_WEEKS, weekly_series};
