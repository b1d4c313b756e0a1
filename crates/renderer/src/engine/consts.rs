// SPDX-License-Identifier: MIT

//!
//! Engine constants
//!

/// The default width of a day (px)
pub const DEFAULT_DAY_WIDTH: f64 = 100.0;

/// The most days the timeline shows at once
pub const MAX_VISIBLE_DAYS: i64 = 30;

/// The number of stacking slots per date before placement wraps back to the
/// top
pub const DEFAULT_MAX_BOXES_PER_DATE: usize = 15;

/// Dashed separators are drawn every this many days
pub const SEPARATOR_EVERY_N_DAYS: usize = 4;

/// The wheel delta is multiplied by this before being added to the vertical
/// offset
pub const WHEEL_SCROLL_MULTIPLIER: f64 = 2.0;

/// The topic given to newly created text bars
pub const DEFAULT_TEXT_BAR_TOPIC: &str = "New Box";
