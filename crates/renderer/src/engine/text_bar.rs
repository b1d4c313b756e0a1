// SPDX-License-Identifier: MIT

//!
//! Text bars: coloured, labelled notes anchored to a day of the timeline
//!

use crate::{Colour, DEFAULT_TEXT_BAR_TOPIC, FilledBox, TextOut};
use chrono::NaiveDate;
use maija_calendar_core::TextBarId;
use serde::Serialize;
use std::fmt::Debug;

/// A note attached to a date.  Owned by the engine; edited through the
/// engine's methods.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBar {
    id: TextBarId,

    /// The day the text bar is anchored to
    start_date: NaiveDate,

    /// Short label drawn on the bar
    topic: String,

    /// Longer free text (only shown in the editor)
    message: String,

    /// Fill colour
    colour: Colour,

    /// The stacking slot among text bars sharing `start_date` (0-based)
    column_num: usize,
}

impl TextBar {
    pub(crate) fn new(start_date: NaiveDate, column_num: usize, colour: Colour) -> Self {
        Self {
            id: TextBarId::new(),
            start_date,
            topic: String::from(DEFAULT_TEXT_BAR_TOPIC),
            message: String::new(),
            colour,
            column_num,
        }
    }

    pub fn id(&self) -> TextBarId {
        self.id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn column_num(&self) -> usize {
        self.column_num
    }

    pub(crate) fn set_text(&mut self, topic: String, message: String) {
        self.topic = topic;
        self.message = message;
    }

    pub(crate) fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    /// Re-anchor to another day, taking the given stacking slot there
    pub(crate) fn move_to(&mut self, start_date: NaiveDate, column_num: usize) {
        self.start_date = start_date;
        self.column_num = column_num;
    }

    /// The number of days from `timeline_start` to this bar's date (negative
    /// if the bar is before it)
    pub fn days_from(&self, timeline_start: NaiveDate) -> i64 {
        (self.start_date - timeline_start).num_days()
    }

    /// The vertical placement of this bar's stacking slot:
    /// `(column_num mod max_boxes_per_date) * row_spacing + y_offset`
    pub fn slot_y(&self, max_boxes_per_date: usize, row_spacing: f64, y_offset: f64) -> f64 {
        let slot = self.column_num % max_boxes_per_date.max(1);
        (slot as f64 * row_spacing) + y_offset
    }
}

/// Information needed to draw a [`TextBar`] (for use outside of the engine)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBarOut {
    pub id: TextBarId,
    pub start_date: NaiveDate,
    pub column_num: usize,
    pub rect: FilledBox,
    pub topic: TextOut,
    pub is_hovered_over: bool,
}
