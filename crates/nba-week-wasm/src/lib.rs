//! WASM bindings for the dashboard tooltip layer.
//!
//! The tooltip's `transform` hook calls `getSundayByNBAWeek(week)` with the
//! row's NBA week and displays the returned label. A week outside the table
//! throws a JS `Error`.

use nba_week::WeekError;
use wasm_bindgen::prelude::*;

/// Label of the Sunday starting `week`, e.g. `0` → `"Oct. 13"`.
#[wasm_bindgen(js_name = getSundayByNBAWeek)]
pub fn get_sunday_by_nba_week(week: i32) -> Result<String, JsError> {
    sunday_label(week).map_err(|e| JsError::new(&e.to_string()))
}

/// First and last week offsets the table covers, as `[first, last]`.
#[wasm_bindgen(js_name = nbaWeekRange)]
pub fn nba_week_range() -> Vec<i32> {
    let resolver = nba_week::WeekToSundayResolver::season_2024_25();
    resolver
        .first_week()
        .into_iter()
        .chain(resolver.last_week())
        .collect()
}

fn sunday_label(week: i32) -> Result<String, WeekError> {
    nba_week::get_sunday_by_nba_week(week)
}
