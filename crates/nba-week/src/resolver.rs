//! Week offset → Sunday resolution.
//!
//! Pure lookups over an immutable week table. No function here reads the
//! system clock; callers that need "the current week" pass today's date to
//! [`WeekToSundayResolver::week_for_date`].
//!
//! # Functions
//!
//! - [`WeekToSundayResolver::resolve`] — Week offset → display label (`"Oct. 13"`)
//! - [`WeekToSundayResolver::sunday_for_week`] — Week offset → the Sunday's date
//! - [`WeekToSundayResolver::describe`] — Week offset → week, ISO date and label together
//! - [`WeekToSundayResolver::week_for_date`] — Any date → the NBA week containing it
//! - [`most_recent_sunday`] — Round a date down to its Sunday
//! - [`format_sunday_label`] — Format any date as a Sunday label

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::WeekError;
use crate::table::{WeekRecord, SEASON_2024_25};

/// Month abbreviations, indexed by zero-based month.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May.", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

// ── Resolver ────────────────────────────────────────────────────────────────

/// Maps NBA week offsets to the Sunday that starts each week.
///
/// Holds a reference to a `'static` table, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct WeekToSundayResolver {
    records: &'static [WeekRecord],
}

impl Default for WeekToSundayResolver {
    fn default() -> Self {
        Self::season_2024_25()
    }
}

/// A resolved week: the offset, its Sunday and the display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWeek {
    /// The NBA week offset that was looked up.
    pub week: i32,
    /// The Sunday starting the week, as `YYYY-MM-DD`.
    pub sunday: String,
    /// Short display label, e.g. `"Oct. 13"`.
    pub label: String,
}

impl WeekToSundayResolver {
    /// The resolver over the built-in 2024–25 season (weeks -16 through 30).
    pub fn season_2024_25() -> Self {
        Self {
            records: &SEASON_2024_25,
        }
    }

    /// The table this resolver reads, in week order.
    pub fn records(&self) -> &'static [WeekRecord] {
        self.records
    }

    /// Lowest week offset in the table.
    pub fn first_week(&self) -> Option<i32> {
        self.records.first().map(WeekRecord::week)
    }

    /// Highest week offset in the table.
    pub fn last_week(&self) -> Option<i32> {
        self.records.last().map(WeekRecord::week)
    }

    /// Resolve a week offset to the label of the Sunday that starts it.
    ///
    /// The label is `"<Mon.> <day>"` using [`MONTH_ABBREVIATIONS`], with no
    /// leading zero on the day.
    ///
    /// # Errors
    ///
    /// Returns [`WeekError::WeekNotFound`] if `week` is not in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use nba_week::WeekToSundayResolver;
    ///
    /// let resolver = WeekToSundayResolver::season_2024_25();
    /// assert_eq!(resolver.resolve(0).unwrap(), "Oct. 13");
    /// assert!(resolver.resolve(31).is_err());
    /// ```
    pub fn resolve(&self, week: i32) -> Result<String, WeekError> {
        let sunday = self.sunday_for_week(week)?;
        Ok(format_sunday_label(sunday))
    }

    /// The date of the Sunday that starts `week`.
    ///
    /// # Errors
    ///
    /// Returns [`WeekError::WeekNotFound`] if `week` is not in the table.
    pub fn sunday_for_week(&self, week: i32) -> Result<NaiveDate, WeekError> {
        self.records
            .iter()
            .find(|r| r.week() == week)
            .ok_or(WeekError::WeekNotFound(week))?
            .sunday()
    }

    /// Resolve `week` to its offset, ISO date and label in one value.
    ///
    /// # Errors
    ///
    /// Returns [`WeekError::WeekNotFound`] if `week` is not in the table.
    pub fn describe(&self, week: i32) -> Result<ResolvedWeek, WeekError> {
        let sunday = self.sunday_for_week(week)?;
        Ok(ResolvedWeek {
            week,
            sunday: sunday.format("%Y-%m-%d").to_string(),
            label: format_sunday_label(sunday),
        })
    }

    /// The NBA week containing `date`: the latest week whose Sunday is on or
    /// before `date`.
    ///
    /// Dates after the last table Sunday belong to the last week.
    ///
    /// # Errors
    ///
    /// Returns [`WeekError::DateBeforeSeason`] if `date` precedes the first
    /// Sunday in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nba_week::WeekToSundayResolver;
    ///
    /// let resolver = WeekToSundayResolver::season_2024_25();
    /// // Wednesday Oct 16 2024 is in the week starting Sunday Oct 13.
    /// let date = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
    /// assert_eq!(resolver.week_for_date(date).unwrap(), 0);
    /// ```
    pub fn week_for_date(&self, date: NaiveDate) -> Result<i32, WeekError> {
        let sunday = most_recent_sunday(date);
        let mut found = None;
        for record in self.records {
            if record.sunday()? > sunday {
                break;
            }
            found = Some(record.week());
        }
        found.ok_or(WeekError::DateBeforeSeason(date))
    }
}

// ── Free functions ──────────────────────────────────────────────────────────

/// Resolve `week` against the built-in season.
///
/// This is the function the dashboard tooltip calls.
///
/// # Errors
///
/// Returns [`WeekError::WeekNotFound`] if `week` is outside -16..=30.
pub fn get_sunday_by_nba_week(week: i32) -> Result<String, WeekError> {
    WeekToSundayResolver::season_2024_25().resolve(week)
}

/// Format a date as a Sunday label, e.g. `"Oct. 13"` or `"Sep. 1"`.
pub fn format_sunday_label(date: NaiveDate) -> String {
    let abbr = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{} {}", abbr, date.day())
}

/// `date` itself if it is a Sunday, otherwise the Sunday before it.
///
/// Near [`NaiveDate::MIN`], where the preceding Sunday is not representable,
/// `date` is returned unchanged.
pub fn most_recent_sunday(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}
