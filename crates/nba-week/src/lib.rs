//! # nba-week
//!
//! Resolve NBA week offsets to the Sunday that starts each week.
//!
//! A dashboard labels time periods by integer "NBA week" (week 0 starts
//! Sunday 2024-10-13). This crate maps those offsets back to calendar
//! dates and to the short labels shown in tooltips (`"Oct. 13"`), using an
//! embedded table validated at compile time.
//!
//! ## Modules
//!
//! - [`resolver`] — Week → label / date lookups and date → week
//! - [`table`] — The embedded week table and its compile-time checks
//! - [`error`] — Error types

pub mod error;
pub mod resolver;
pub mod table;

pub use error::WeekError;
pub use resolver::{
    format_sunday_label, get_sunday_by_nba_week, most_recent_sunday, ResolvedWeek,
    WeekToSundayResolver, MONTH_ABBREVIATIONS,
};
pub use table::{WeekRecord, SEASON_2024_25};
