//! Progress ticks along the observation window.
//!
//! The dashboard slider moves over `0..=100`; ten ticks make one day of the
//! ten-day window.

use chrono::{Duration, NaiveDate};

/// Lowest tick of the observation window.
pub const MIN_TICK: i64 = 0;

/// Highest tick of the observation window.
pub const MAX_TICK: i64 = 100;

/// Ticks per observation day.
pub const TICKS_PER_DAY: i64 = 10;

/// Round a slider position to the tick it selects.
///
/// Halves round up (`2.5 -> 3`, `-2.5 -> -2`), the way the dashboard rounds.
/// The fraction is compared directly since `progress + 0.5` can round up
/// before flooring. Non-finite input saturates through the float-to-int cast.
pub fn round_progress(progress: f64) -> i64 {
    let floor = progress.floor();
    let rounded = if progress - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}

/// Inclusive tick range of the trailing window of `len` ticks ending at
/// `progress`, clipped at tick 0.
pub fn trailing_window(progress: f64, len: i64) -> (i64, i64) {
    let end = round_progress(progress);
    let start = (end - (len - 1)).max(MIN_TICK);
    (start, end)
}

/// Observation day a tick belongs to.
pub fn day_index(progress: f64) -> i64 {
    (progress / TICKS_PER_DAY as f64).floor() as i64
}

/// Calendar date for a slider position, counted in days from `base`.
///
/// `None` when the date falls outside the range `NaiveDate` can hold.
pub fn route_date(base: NaiveDate, progress: f64) -> Option<NaiveDate> {
    let offset = Duration::try_days(day_index(progress))?;
    base.checked_add_signed(offset)
}
