// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Drawing
//!

use eframe::egui::{Context, Ui};

/// Implementing types can be drawn into an egui `Ui` (panels, widgets, the
/// collection of break-out windows).
pub trait Draw {
    fn draw(&mut self, ctx: &Context, ui: &mut Ui);
}
