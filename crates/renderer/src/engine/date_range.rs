// SPDX-License-Identifier: MIT

//!
//! Date range
//!

use crate::MAX_VISIBLE_DAYS;
use chrono::NaiveDate;
use maija_calendar_core::timeline_window;
use std::fmt::Debug;

/// The window of dates shown by the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimelineDateRange {
    /// The first day shown (the left-most column when not panned)
    pub start: NaiveDate,

    /// The last day of the window.  Usually `start` + 30 days.
    pub end: NaiveDate,
}

impl TimelineDateRange {
    /// A window anchored at `start`
    pub fn anchored_at(start: NaiveDate) -> Self {
        let (start, end) = timeline_window(start);
        Self { start, end }
    }

    /// The number of day columns drawn: the days from `start` to `end`
    /// inclusive, capped at [`MAX_VISIBLE_DAYS`].  Zero if `end` is before
    /// `start`.
    pub fn visible_day_count(&self) -> usize {
        let inclusive_days = (self.end - self.start).num_days() + 1;
        inclusive_days.clamp(0, MAX_VISIBLE_DAYS) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn visible_day_count() {
        let range = TimelineDateRange::anchored_at(date(2021, 2, 1));
        assert_eq!(range.visible_day_count(), 30);

        let range = TimelineDateRange {
            start: date(2021, 2, 1),
            end: date(2021, 2, 10),
        };
        assert_eq!(range.visible_day_count(), 10);

        let range = TimelineDateRange {
            start: date(2021, 2, 1),
            end: date(2021, 2, 1),
        };
        assert_eq!(range.visible_day_count(), 1);

        let range = TimelineDateRange {
            start: date(2021, 2, 10),
            end: date(2021, 2, 1),
        };
        assert_eq!(range.visible_day_count(), 0);
    }
}
