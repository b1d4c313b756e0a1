// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub fill_colour: Colour,
    pub border: Option<LineStyle>,
}

/// Styling for text bars.  Each text bar has its own fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextBarStyle {
    pub border: LineStyle,
    pub text_colour: Colour,

    /// The outline drawn where a dragged text bar would be dropped
    pub drop_target: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineColours {
    pub background: Colour,
    pub day_column: BoxStyle,
    pub day_label_colour: Colour,
    pub separator: LineStyle,
    pub text_bar: TextBarStyle,
}

impl TimelineColours {
    /// Timeline colours suited to a dark GUI
    pub fn dark() -> Self {
        let mut colours = Self::default();
        colours.background = Colour::from_rgb(30, 30, 30);
        colours.day_column.fill_colour = Colour::from_rgb(38, 70, 96);
        colours.day_column.border = Some(LineStyle {
            colour: Colour::from_rgb(90, 140, 200),
            thickness: 1.0,
        });
        colours.day_label_colour = Colour::from_rgb(220, 220, 220);
        colours.separator.colour = Colour::from_rgb(100, 100, 100);
        colours.text_bar.drop_target.colour = Colour::from_rgb(220, 220, 220);
        colours
    }
}

impl Default for TimelineColours {
    fn default() -> Self {
        Self {
            background: Colour::WHITE,
            day_column: BoxStyle {
                fill_colour: Colour::LIGHT_BLUE,
                border: Some(LineStyle {
                    colour: Colour::BLUE,
                    thickness: 1.0,
                }),
            },
            day_label_colour: Colour::BLACK,
            separator: LineStyle {
                colour: Colour::GREY,
                thickness: 1.0,
            },
            text_bar: TextBarStyle {
                border: LineStyle {
                    colour: Colour::BLUE,
                    thickness: 1.0,
                },
                text_colour: Colour::BLACK,
                drop_target: LineStyle {
                    colour: Colour::BLACK,
                    thickness: 1.0,
                },
            },
        }
    }
}
