// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{LineStyle, Point, PositionAndSize, colour::Colour};
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw text.  The text is centred on `centre`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub centre: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,
    pub border_style: Option<LineStyle>,
}

/// Information needed to draw the timeline's dashed day separators.  The line
/// runs from `top` down `length` px.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerticalLine {
    pub x: f64,
    pub top: f64,
    pub length: f64,
    pub style: LineStyle,
}
