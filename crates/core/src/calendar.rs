// SPDX-License-Identifier: MIT

//!
//! The month grid shown by the calendar: 7 columns, one row per week, with
//! blank cells for days outside the month
//!

use crate::{DateError, SelectedMonth};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The number of columns in the grid
pub const DAYS_IN_WEEK: usize = 7;

/// One row of the grid.  `None` cells are blank.
pub type Week = [Option<u32>; DAYS_IN_WEEK];

/// Which day a week starts on (i.e. the left-most column)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// The weekday shown in the left-most column
    pub fn first_weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// The column (0 to 6) the weekday is shown in
    pub fn column_of(&self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
        }
    }

    /// The column headings, e.g. `["Mon", "Tue", ...]`
    pub fn weekday_abbreviations(&self) -> [&'static str; DAYS_IN_WEEK] {
        let mut headings = [""; DAYS_IN_WEEK];
        let mut weekday = self.first_weekday();
        for heading in headings.iter_mut() {
            *heading = weekday_abbreviation(weekday);
            weekday = weekday.succ();
        }
        headings
    }
}

fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// The days of one month laid out week by week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: SelectedMonth,
    week_start: WeekStart,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay out the given month
    pub fn new(month: SelectedMonth, week_start: WeekStart) -> Self {
        let leading_blanks = week_start.column_of(month.first_day().weekday());
        let mut weeks = Vec::new();
        let mut week: Week = [None; DAYS_IN_WEEK];
        let mut column = leading_blanks;
        for day in 1..=month.day_count() {
            week[column] = Some(day);
            column += 1;
            if column == DAYS_IN_WEEK {
                weeks.push(week);
                week = [None; DAYS_IN_WEEK];
                column = 0;
            }
        }
        if column != 0 {
            weeks.push(week);
        }
        Self {
            month,
            week_start,
            weeks,
        }
    }

    /// The month shown
    pub fn month(&self) -> SelectedMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// The rows of the grid
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// The number of non-blank cells
    pub fn day_count(&self) -> usize {
        self.weeks.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// The number of blank cells before the 1st
    pub fn leading_blanks(&self) -> usize {
        self.weeks
            .first()
            .map_or(0, |week| week.iter().take_while(|cell| cell.is_none()).count())
    }

    /// The concrete date of a day cell
    pub fn date_of(&self, day: u32) -> Result<NaiveDate, DateError> {
        self.month.date_of(day)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid(year: i64, month: i64, week_start: WeekStart) -> MonthGrid {
        MonthGrid::new(SelectedMonth::from(year, month).unwrap(), week_start)
    }

    #[test]
    fn february_2021() {
        // 2021-02-01 is a Monday
        let grid = grid(2021, 2, WeekStart::Monday);
        assert_eq!(grid.day_count(), 28);
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.weeks().len(), 4);
        assert_eq!(grid.weeks()[0][0], Some(1));
        assert_eq!(grid.weeks()[3][6], Some(28));

        let grid = MonthGrid::new(grid.month(), WeekStart::Sunday);
        assert_eq!(grid.leading_blanks(), 1);
        assert_eq!(grid.weeks().len(), 5);
    }

    #[test]
    fn every_month_has_the_right_cells() {
        for year in [1, 1900, 2000, 2021, 2024, 9999] {
            for month in 1..=12 {
                for week_start in [WeekStart::Monday, WeekStart::Sunday] {
                    let grid = grid(year, month, week_start);
                    let selected = grid.month();
                    assert_eq!(grid.day_count() as u32, selected.day_count());
                    assert_eq!(
                        grid.leading_blanks(),
                        week_start.column_of(selected.first_day().weekday())
                    );

                    // Days appear in order with no gaps
                    let days: Vec<u32> = grid.weeks().iter().flatten().flatten().copied().collect();
                    let expected: Vec<u32> = (1..=selected.day_count()).collect();
                    assert_eq!(days, expected);
                }
            }
        }
    }

    #[test]
    fn headings() {
        assert_eq!(WeekStart::Monday.weekday_abbreviations()[0], "Mon");
        assert_eq!(WeekStart::Monday.weekday_abbreviations()[6], "Sun");
        assert_eq!(WeekStart::Sunday.weekday_abbreviations()[0], "Sun");
        assert_eq!(WeekStart::Sunday.weekday_abbreviations()[6], "Sat");
    }

    #[test]
    fn date_of_cell() {
        let grid = grid(2021, 2, WeekStart::Monday);
        assert_eq!(
            grid.date_of(14),
            Ok(NaiveDate::from_ymd_opt(2021, 2, 14).unwrap())
        );
        assert!(grid.date_of(30).is_err());
    }
}
