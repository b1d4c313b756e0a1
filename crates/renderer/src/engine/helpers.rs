// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use chrono::{NaiveDate, TimeDelta};

/// The index of the day column containing pixel `px`.  Floors, so the
/// column to the left of day 0 is day -1 (not day 0 as truncation would give).
pub(crate) fn day_index_at_px(px: f64, day_width: f64) -> i64 {
    (px / day_width).floor() as i64
}

/// The date `days` after (or before, if negative) `date`.  `None` if that
/// falls outside the dates chrono can represent.
pub(crate) fn offset_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}
