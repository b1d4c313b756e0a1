// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Standard buttons
//!

use crate::{
    CLEAR_BUTTON_WIDTH, CLEAR_SYMBOL, NAV_BUTTON_WIDTH, NEXT_SYMBOL, PREVIOUS_SYMBOL,
    SAVE_BUTTON_WIDTH, SAVE_SYMBOL, body_text_height,
};
use eframe::egui::{self, Response, RichText, Ui, Vec2};

/// Helpers for button drawing to an `egui` context
pub struct Button {}

impl Button {
    /// Draw the "go back one" button and return the response
    pub fn previous(ui: &mut Ui) -> Response {
        let button_height = body_text_height(ui);
        ui.add_sized(
            [NAV_BUTTON_WIDTH, button_height],
            egui::Button::new(PREVIOUS_SYMBOL),
        )
    }

    /// Draw the "go forward one" button and return the response
    pub fn next(ui: &mut Ui) -> Response {
        let button_height = body_text_height(ui);
        ui.add_sized(
            [NAV_BUTTON_WIDTH, button_height],
            egui::Button::new(NEXT_SYMBOL),
        )
    }

    /// Draw the save button and return the response
    pub fn save(ui: &mut Ui) -> Response {
        let button_height = body_text_height(ui);
        ui.add_sized(
            [SAVE_BUTTON_WIDTH, button_height],
            egui::Button::new(SAVE_SYMBOL),
        )
    }

    /// Draw the clear button and return the response
    pub fn clear(ui: &mut Ui) -> Response {
        let button_height = body_text_height(ui);
        ui.add_sized(
            [CLEAR_BUTTON_WIDTH, button_height],
            egui::Button::new(CLEAR_SYMBOL),
        )
    }

    /// Helper to draw a tall button that fills the available GUI width
    pub fn tall_full_width(ui: &mut Ui, text: impl Into<RichText>) -> Response {
        ui.add_sized(
            Vec2::new(ui.available_width(), ui.spacing().interact_size.y * 2.0),
            egui::Button::new(text.into()),
        )
    }
}
