// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The month grid widget
//!

use crate::consts::{CALENDAR_CELL_HEIGHT, CALENDAR_CELL_WIDTH};
use chrono::NaiveDate;
use eframe::egui::{Button, Context, Grid, RichText, Ui};
use maija_calendar_core::{MonthGrid, SelectedMonth, WeekStart};
use maija_calendar_gui_core::{Draw, Label};

/// Draws a month as a 7 column grid of clickable days
pub struct CalendarGridGui {
    grid: MonthGrid,

    /// Today's date (its cell is emphasised)
    today: NaiveDate,

    /// The timeline's anchor date (its cell is shown selected)
    anchor_date: Option<NaiveDate>,

    /// The day clicked during the last draw, waiting to be taken
    clicked_day: Option<u32>,
}

impl CalendarGridGui {
    pub fn new(month: SelectedMonth, week_start: WeekStart, today: NaiveDate) -> Self {
        Self {
            grid: MonthGrid::new(month, week_start),
            today,
            anchor_date: None,
            clicked_day: None,
        }
    }

    /// Rebuild the grid if the month has changed
    pub fn set_month(&mut self, month: SelectedMonth) {
        if self.grid.month() != month {
            debug!("rebuild calendar grid for {}", month.as_long_format());
            self.grid = MonthGrid::new(month, self.grid.week_start());
        }
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn set_anchor_date(&mut self, anchor_date: Option<NaiveDate>) {
        self.anchor_date = anchor_date;
    }

    /// The day clicked (if any) since this was last called
    pub fn take_clicked_day(&mut self) -> Option<u32> {
        self.clicked_day.take()
    }

    fn draw_day(&mut self, ui: &mut Ui, day: u32) {
        let date = self.grid.date_of(day).ok();
        let mut text = RichText::new(day.to_string());
        if date.is_some() && date == Some(self.today) {
            text = text.strong().underline();
        }
        let is_anchor = date.is_some() && date == self.anchor_date;
        let button = Button::selectable(is_anchor, text);
        if ui
            .add_sized([CALENDAR_CELL_WIDTH, CALENDAR_CELL_HEIGHT], button)
            .clicked()
        {
            self.clicked_day = Some(day);
        }
    }
}

impl Draw for CalendarGridGui {
    fn draw(&mut self, _ctx: &Context, ui: &mut Ui) {
        let weeks = self.grid.weeks().to_vec();
        let headings = self.grid.week_start().weekday_abbreviations();
        Grid::new("calendar_grid")
            .num_columns(headings.len())
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                for heading in headings {
                    ui.vertical_centered(|ui| Label::strong(ui, heading));
                }
                ui.end_row();
                for week in weeks {
                    for cell in week {
                        match cell {
                            Some(day) => self.draw_day(ui, day),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
