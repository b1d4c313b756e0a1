// SPDX-License-Identifier: MIT

//!
//! The year & month types used to select which month the calendar shows, and
//! the date window the timeline is anchored to
//!

use chrono::{Datelike, Days, Local, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The minimum year that can be selected
pub const MIN_YEAR: i64 = 1;

/// The maximum year that can be selected
pub const MAX_YEAR: i64 = 9999;

/// The number of days after the anchor date at which a timeline window ends
pub const TIMELINE_WINDOW_DAYS: u64 = 30;

/// Errors that can arise in relation to a [`Year`], [`Month`], or
/// [`SelectedMonth`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The year input is empty
    #[error("Enter a year")]
    EmptyYear,

    /// The month input is empty
    #[error("Enter a month")]
    EmptyMonth,

    /// The year input is not a whole number
    #[error("Year `{0}` is not a number")]
    YearNotANumber(String),

    /// The month input is not a whole number
    #[error("Month `{0}` is not a number")]
    MonthNotANumber(String),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed (must be 1 to 9999)")]
    InvalidYear(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed (must be 1 to 12)")]
    InvalidMonth(i64),

    /// The day does not exist in the month
    #[error("Day `{day}` does not exist in {month}/{year}")]
    InvalidDay { day: u32, month: u32, year: i32 },
}

/// A calendar year
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

/// A calendar month (1 = January)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// e.g. "February"
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u32))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// The year & month the calendar is showing
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct SelectedMonth {
    year: Year,
    month: Month,
}

impl SelectedMonth {
    /// Create a new [`SelectedMonth`] if the result will be valid
    pub fn from(year: i64, month: i64) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::try_from(year)?,
            month: Month::try_from(month)?,
        })
    }

    /// Parse the text a user typed into the year & month inputs
    pub fn parse(year: &str, month: &str) -> Result<Self, DateError> {
        let year = year.trim();
        let month = month.trim();
        if year.is_empty() {
            return Err(DateError::EmptyYear);
        }
        if month.is_empty() {
            return Err(DateError::EmptyMonth);
        }
        let year = year
            .parse::<i64>()
            .map_err(|_| DateError::YearNotANumber(year.to_string()))?;
        let month = month
            .parse::<i64>()
            .map_err(|_| DateError::MonthNotANumber(month.to_string()))?;
        Self::from(year, month)
    }

    /// The month containing today's (local) date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The month containing the given date.  Dates outside the allowed year
    /// range are clamped to it.
    pub fn containing(date: NaiveDate) -> Self {
        let year = (date.year() as i64).clamp(MIN_YEAR, MAX_YEAR);
        Self {
            year: Year(year as i32),
            month: Month(date.month()),
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// The date of the given day of this month
    pub fn date_of(&self, day: u32) -> Result<NaiveDate, DateError> {
        NaiveDate::from_ymd_opt(self.year.0, self.month.0, day).ok_or(DateError::InvalidDay {
            day,
            month: self.month.0,
            year: self.year.0,
        })
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        // Every valid year/month has a 1st
        NaiveDate::from_ymd_opt(self.year.0, self.month.0, 1).unwrap_or_default()
    }

    /// The number of days in this month
    pub fn day_count(&self) -> u32 {
        let first_of_next = self.next().first_day();
        if first_of_next > self.first_day() {
            (first_of_next - self.first_day()).num_days() as u32
        } else {
            // December of the final allowed year
            31
        }
    }

    /// The month after this one (stays put at the end of the allowed range)
    pub fn next(&self) -> Self {
        match (self.month.0, self.year.0 as i64) {
            (12, year) if year >= MAX_YEAR => *self,
            (12, year) => Self {
                year: Year(year as i32 + 1),
                month: Month(1),
            },
            (month, _) => Self {
                year: self.year,
                month: Month(month + 1),
            },
        }
    }

    /// The month before this one (stays put at the start of the allowed range)
    pub fn previous(&self) -> Self {
        match (self.month.0, self.year.0 as i64) {
            (1, year) if year <= MIN_YEAR => *self,
            (1, year) => Self {
                year: Year(year as i32 - 1),
                month: Month(12),
            },
            (month, _) => Self {
                year: self.year,
                month: Month(month - 1),
            },
        }
    }

    /// e.g. "February 2021"
    pub fn as_long_format(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

/// The timeline window anchored at `start`: `(start, start + 30 days)`.  If
/// the end would overflow the calendar the window collapses to `start`.
pub fn timeline_window(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = match start.checked_add_days(Days::new(TIMELINE_WINDOW_DAYS)) {
        Some(end) => end,
        None => {
            warn!("timeline window from {start} overflows, collapsing it");
            start
        }
    };
    debug!("timeline window {start} -> {end}");
    (start, end)
}
