//! The embedded week table.
//!
//! Each [`WeekRecord`] pairs an NBA week offset with the Sunday that starts
//! that week. The built-in season is a `static` array checked at compile
//! time: weeks step by exactly one, dates step by exactly seven days, and
//! every date falls on a Sunday.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::WeekError;

/// One row of the week table: the Sunday (as calendar components) that
/// begins NBA week `week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRecord {
    year: i32,
    month: u32,
    day: u32,
    week: i32,
}

impl WeekRecord {
    pub const fn new(year: i32, month: u32, day: u32, week: i32) -> Self {
        Self {
            year,
            month,
            day,
            week,
        }
    }

    pub const fn week(&self) -> i32 {
        self.week
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// One-based month (January = 1).
    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Build the local calendar date for this record.
    ///
    /// # Errors
    ///
    /// Returns [`WeekError::InvalidDate`] if the components do not form a
    /// real date. The built-in table never does this; the compile-time
    /// check rejects it first.
    pub fn sunday(&self) -> Result<NaiveDate, WeekError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            WeekError::InvalidDate(format!(
                "{:04}-{:02}-{:02} (week {})",
                self.year, self.month, self.day, self.week
            ))
        })
    }
}

/// Number of weeks in the 2024–25 table.
pub const SEASON_2024_25_LEN: usize = 47;

/// NBA weeks -16 through 30: Sunday 2024-06-23 through Sunday 2025-05-11.
/// Week 0 starts on 2024-10-13.
pub static SEASON_2024_25: [WeekRecord; SEASON_2024_25_LEN] = SEASON_2024_25_TABLE;

const _: () = assert!(
    is_well_formed(&SEASON_2024_25_TABLE),
    "week table must step by one week and seven days, on Sundays"
);

const SEASON_2024_25_TABLE: [WeekRecord; SEASON_2024_25_LEN] = [
    WeekRecord::new(2024, 6, 23, -16),
    WeekRecord::new(2024, 6, 30, -15),
    WeekRecord::new(2024, 7, 7, -14),
    WeekRecord::new(2024, 7, 14, -13),
    WeekRecord::new(2024, 7, 21, -12),
    WeekRecord::new(2024, 7, 28, -11),
    WeekRecord::new(2024, 8, 4, -10),
    WeekRecord::new(2024, 8, 11, -9),
    WeekRecord::new(2024, 8, 18, -8),
    WeekRecord::new(2024, 8, 25, -7),
    WeekRecord::new(2024, 9, 1, -6),
    WeekRecord::new(2024, 9, 8, -5),
    WeekRecord::new(2024, 9, 15, -4),
    WeekRecord::new(2024, 9, 22, -3),
    WeekRecord::new(2024, 9, 29, -2),
    WeekRecord::new(2024, 10, 6, -1),
    WeekRecord::new(2024, 10, 13, 0),
    WeekRecord::new(2024, 10, 20, 1),
    WeekRecord::new(2024, 10, 27, 2),
    WeekRecord::new(2024, 11, 3, 3),
    WeekRecord::new(2024, 11, 10, 4),
    WeekRecord::new(2024, 11, 17, 5),
    WeekRecord::new(2024, 11, 24, 6),
    WeekRecord::new(2024, 12, 1, 7),
    WeekRecord::new(2024, 12, 8, 8),
    WeekRecord::new(2024, 12, 15, 9),
    WeekRecord::new(2024, 12, 22, 10),
    WeekRecord::new(2024, 12, 29, 11),
    WeekRecord::new(2025, 1, 5, 12),
    WeekRecord::new(2025, 1, 12, 13),
    WeekRecord::new(2025, 1, 19, 14),
    WeekRecord::new(2025, 1, 26, 15),
    WeekRecord::new(2025, 2, 2, 16),
    WeekRecord::new(2025, 2, 9, 17),
    WeekRecord::new(2025, 2, 16, 18),
    WeekRecord::new(2025, 2, 23, 19),
    WeekRecord::new(2025, 3, 2, 20),
    WeekRecord::new(2025, 3, 9, 21),
    WeekRecord::new(2025, 3, 16, 22),
    WeekRecord::new(2025, 3, 23, 23),
    WeekRecord::new(2025, 3, 30, 24),
    WeekRecord::new(2025, 4, 6, 25),
    WeekRecord::new(2025, 4, 13, 26),
    WeekRecord::new(2025, 4, 20, 27),
    WeekRecord::new(2025, 4, 27, 28),
    WeekRecord::new(2025, 5, 4, 29),
    WeekRecord::new(2025, 5, 11, 30),
];

// ── Compile-time validation ─────────────────────────────────────────────────

/// True when `table` is non-empty, every record is a valid Sunday, and each
/// record is exactly one week and seven days after the one before it.
pub const fn is_well_formed(table: &[WeekRecord]) -> bool {
    // 1970-01-04 was a Sunday.
    let reference_sunday = match NaiveDate::from_ymd_opt(1970, 1, 4) {
        Some(d) => d,
        None => return false,
    };
    if table.is_empty() {
        return false;
    }
    let mut prev: Option<(i32, NaiveDate)> = None;
    let mut i = 0;
    while i < table.len() {
        let r = &table[i];
        let date = match NaiveDate::from_ymd_opt(r.year, r.month, r.day) {
            Some(d) => d,
            None => return false,
        };
        if date.signed_duration_since(reference_sunday).num_days().rem_euclid(7) != 0 {
            return false;
        }
        if let Some((prev_week, prev_date)) = prev {
            if r.week != prev_week + 1 || date.signed_duration_since(prev_date).num_days() != 7 {
                return false;
            }
        }
        prev = Some((r.week, date));
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_builtin_table_is_well_formed() {
        assert!(is_well_formed(&SEASON_2024_25));
    }

    #[test]
    fn test_builtin_table_bounds() {
        let first = SEASON_2024_25.first().unwrap();
        let last = SEASON_2024_25.last().unwrap();
        assert_eq!(first.week(), -16);
        assert_eq!(first.sunday().unwrap(), NaiveDate::from_ymd_opt(2024, 6, 23).unwrap());
        assert_eq!(last.week(), 30);
        assert_eq!(last.sunday().unwrap(), NaiveDate::from_ymd_opt(2025, 5, 11).unwrap());
    }

    #[test]
    fn test_week_zero_is_october_13() {
        let zero = SEASON_2024_25.iter().find(|r| r.week() == 0).unwrap();
        assert_eq!((zero.year(), zero.month(), zero.day()), (2024, 10, 13));
    }

    #[test]
    fn test_every_record_is_a_chrono_sunday() {
        for record in &SEASON_2024_25 {
            assert_eq!(record.sunday().unwrap().weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_accepts_steps_across_leap_day() {
        // 2028-02-27 → 2028-03-05 spans Feb 29.
        let table = [
            WeekRecord::new(2028, 2, 20, 0),
            WeekRecord::new(2028, 2, 27, 1),
            WeekRecord::new(2028, 3, 5, 2),
        ];
        assert!(is_well_formed(&table));
    }

    #[test]
    fn test_accepts_sundays_before_1970() {
        assert!(is_well_formed(&[WeekRecord::new(1969, 12, 28, 0)]));
        assert!(!is_well_formed(&[WeekRecord::new(1969, 12, 27, 0)]));
    }

    #[test]
    fn test_well_formed_evaluates_in_const_context() {
        const OK: bool = is_well_formed(&[
            WeekRecord::new(2024, 12, 29, 11),
            WeekRecord::new(2025, 1, 5, 12),
        ]);
        const BAD: bool = is_well_formed(&[WeekRecord::new(2024, 12, 30, 11)]);
        assert!(OK);
        assert!(!BAD);
    }

    #[test]
    fn test_rejects_gap_in_weeks() {
        let table = [
            WeekRecord::new(2024, 10, 13, 0),
            WeekRecord::new(2024, 10, 20, 2),
        ];
        assert!(!is_well_formed(&table));
    }

    #[test]
    fn test_rejects_non_weekly_dates() {
        let table = [
            WeekRecord::new(2024, 10, 13, 0),
            WeekRecord::new(2024, 10, 27, 1),
        ];
        assert!(!is_well_formed(&table));
    }

    #[test]
    fn test_rejects_non_sunday() {
        assert!(!is_well_formed(&[WeekRecord::new(2024, 10, 14, 0)]));
    }

    #[test]
    fn test_rejects_impossible_date() {
        assert!(!is_well_formed(&[WeekRecord::new(2025, 2, 30, 0)]));
        assert!(WeekRecord::new(2025, 2, 30, 0).sunday().is_err());
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(!is_well_formed(&[]));
    }

    #[test]
    fn test_record_serializes_components() {
        let json = serde_json::to_value(WeekRecord::new(2024, 10, 13, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "year": 2024, "month": 10, "day": 13, "week": 0 })
        );
    }
}
