// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Styling invalid input
//!

use crate::ValidSynchronous;
use eframe::egui::{Color32, Context, Ui};

/// Implementing types can display the validity of the data they hold.
///
/// Implementing types need only declare that they implement it; the default
/// implementation colours text inputs red while the data is invalid.
pub trait ErrorStyle: ValidSynchronous {
    fn set_validity_styling(&self, _ctx: &Context, ui: &mut Ui) {
        if !self.is_valid_synchronous() {
            let visuals = ui.visuals_mut();
            visuals.override_text_color = Some(Color32::WHITE);
            visuals.extreme_bg_color = Color32::LIGHT_RED;
            visuals.text_edit_bg_color = Some(Color32::LIGHT_RED);
        }
    }
}
