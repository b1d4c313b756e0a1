// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Break-out windows
//!

use eframe::egui::{Context, Vec2, ViewportId};

/// Implementing types are GUI windows shown in their own viewport
pub trait BreakOutWindow {
    fn draw(&mut self, ctx: &Context);
    fn default_size(&self) -> Vec2;

    /// Must be stable for the thing the window is showing, so that asking to
    /// open it again focuses the existing window
    fn viewport_id(&self) -> ViewportId;
    fn title(&self) -> String;

    /// Implementing types can request their closure (e.g. after `cmd` + `w`)
    fn wants_to_be_closed(&mut self) -> bool;
}
