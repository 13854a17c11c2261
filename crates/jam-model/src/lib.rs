pub mod error;
pub mod member;
pub mod options;
pub mod raw;
pub mod stats;

pub use error::{LeaderboardError, Result};
pub use member::Member;
pub use options::{Criteria, LeaderboardQuery, SortDirection, SortField};
pub use raw::{RawRow, RawValue};
pub use stats::{Stats, WeeklyPoint};
