// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The date selection state of the app
//!

use chrono::{Local, NaiveDate};
use eframe::egui::{Response, Ui};
use maija_calendar_core::{DateError, MAX_YEAR, MIN_YEAR, SelectedMonth, timeline_window};
use maija_calendar_gui_core::{
    DisplayStatus, ErrorStyle, Label, ValidSynchronous, ValidityStatus, ValiditySynchronous,
    conform_string_input_to_int_in_range,
};

/// Which month is shown and which day the timeline is anchored to.  Owned by
/// the app and mutated only through its methods.
#[derive(Debug)]
pub struct AppState {
    /// The text in the year input
    year_input: String,

    /// The text in the month input
    month_input: String,

    /// The month the calendar grid shows
    selected: SelectedMonth,

    /// The validity of the year & month inputs
    validity: ValidityStatus<SelectedMonth>,

    /// The day the timeline was last anchored to
    anchor_date: Option<NaiveDate>,
}

impl AppState {
    pub fn new(selected: SelectedMonth) -> Self {
        let mut state = Self {
            year_input: String::new(),
            month_input: String::new(),
            selected,
            validity: ValidityStatus::default(),
            anchor_date: None,
        };
        state.reset_inputs();
        state
    }

    /// The month the calendar grid shows
    pub fn selected(&self) -> SelectedMonth {
        self.selected
    }

    /// The day the timeline was last anchored to
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_date
    }

    pub fn year_input(&self) -> &str {
        &self.year_input
    }

    pub fn month_input(&self) -> &str {
        &self.month_input
    }

    pub fn year_input_mut(&mut self) -> &mut String {
        &mut self.year_input
    }

    pub fn month_input_mut(&mut self) -> &mut String {
        &mut self.month_input
    }

    /// Keep the inputs to digits in their allowed ranges (call after each
    /// edit)
    pub fn conform_inputs(&mut self) {
        conform_string_input_to_int_in_range(
            &mut self.year_input,
            (MIN_YEAR as isize)..=(MAX_YEAR as isize),
        );
        conform_string_input_to_int_in_range(&mut self.month_input, 1..=12);
        self.update_validity_synchronous();
    }

    /// Show the month typed into the inputs.  On error nothing changes.
    pub fn change_month(&mut self) -> Result<SelectedMonth, DateError> {
        let parsed = SelectedMonth::parse(&self.year_input, &self.month_input);
        self.validity
            .set_synchronous(ValiditySynchronous::from(&parsed));
        let selected = parsed?;
        self.show_month(selected);
        Ok(selected)
    }

    pub fn next_month(&mut self) -> SelectedMonth {
        self.show_month(self.selected.next());
        self.selected
    }

    pub fn previous_month(&mut self) -> SelectedMonth {
        self.show_month(self.selected.previous());
        self.selected
    }

    /// Show the current month and anchor the timeline to today.  Returns the
    /// timeline window.
    pub fn today(&mut self) -> (NaiveDate, NaiveDate) {
        let today = Local::now().date_naive();
        self.show_month(SelectedMonth::containing(today));
        self.anchor_at(today)
    }

    /// A day of the shown month was clicked.  Returns the timeline window
    /// anchored at that day.
    pub fn select_day(&mut self, day: u32) -> Result<(NaiveDate, NaiveDate), DateError> {
        let date = self.selected.date_of(day)?;
        Ok(self.anchor_at(date))
    }

    fn anchor_at(&mut self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        debug!("anchor timeline at {date}");
        self.anchor_date = Some(date);
        timeline_window(date)
    }

    fn show_month(&mut self, selected: SelectedMonth) {
        if selected != self.selected {
            debug!("show {}", selected.as_long_format());
        }
        self.selected = selected;
        self.reset_inputs();
    }

    /// Make the inputs show the selected month
    fn reset_inputs(&mut self) {
        self.year_input = self.selected.year().to_string();
        self.month_input = self.selected.month().to_string();
        self.validity.set_synchronous(ValiditySynchronous::Valid);
    }
}

impl ValidSynchronous for AppState {
    fn update_validity_synchronous(&mut self) {
        let validity = self.validity_synchronous();
        self.validity.set_synchronous(validity);
    }

    fn validity_synchronous(&self) -> ValiditySynchronous {
        ValiditySynchronous::from(&SelectedMonth::parse(&self.year_input, &self.month_input))
    }
}

impl ErrorStyle for AppState {}

impl DisplayStatus for AppState {
    fn status_display(&self, ui: &mut Ui) -> Response {
        match self.validity.synchronous().invalid_msg() {
            Some(error) => Label::error(ui, error),
            None => ui.label(self.selected.as_long_format()),
        }
    }
}
