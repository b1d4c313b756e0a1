// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{DEFAULT_DAY_WIDTH, DEFAULT_MAX_BOXES_PER_DATE, Point};
use serde::Serialize;
use std::fmt::Debug;

/// Layout parameters.  These are fixed for the lifetime of a timeline unless
/// set directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// The width of one day column (px)
    pub day_width: f64,

    /// The height of the row of day columns at the top of the timeline
    pub header_height: f64,

    /// The y position (before panning) of the first stacking slot
    pub text_bar_area_top: f64,

    /// The height of a text bar
    pub text_bar_height: f64,

    /// The vertical distance between consecutive stacking slots
    pub text_bar_row_spacing: f64,

    /// A text bar is this fraction of a day wide
    pub text_bar_width_fraction: f64,

    /// The number of stacking slots per date before placement wraps
    pub max_boxes_per_date: usize,

    /// The length of the dashed separators
    pub separator_length: f64,

    /// The font size for day labels & text bar topics
    pub font_size_px: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            day_width: DEFAULT_DAY_WIDTH,
            header_height: 30.0,
            text_bar_area_top: 40.0,
            text_bar_height: 30.0,
            text_bar_row_spacing: 40.0,
            text_bar_width_fraction: 0.25,
            max_boxes_per_date: DEFAULT_MAX_BOXES_PER_DATE,
            separator_length: 1000.0,
            font_size_px: 12.0,
        }
    }
}

/// A box that specifies the location and size of something (e.g. the location
/// and size of a text bar)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Point,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }

    /// The centre of the box
    pub fn centre(&self) -> Point {
        Point {
            x: self.position.x + (self.width / 2.0),
            y: self.position.y + (self.height / 2.0),
        }
    }

    /// Whether the point lies within the box (edges included)
    pub fn contains(&self, point: Point) -> bool {
        (self.position.x..=self.max_x()).contains(&point.x)
            && (self.position.y..=self.max_y()).contains(&point.y)
    }
}
