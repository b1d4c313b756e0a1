// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Layout & platform helpers
//!

use eframe::egui::{Context, Ui};

/// Whether the system is using Wayland or not (window positions can't be
/// read under Wayland)
pub fn using_wayland() -> bool {
    std::env::var("WAYLAND_DISPLAY").is_ok()
}

/// Whether the viewport being drawn has keyboard focus
pub fn window_has_focus(ctx: &Context) -> bool {
    ctx.input(|i| i.focused)
}

/// Layout helper function (shortcut for `ui.spacing().interact_size.y`)
pub fn body_text_height(ui: &mut Ui) -> f32 {
    ui.spacing().interact_size.y
}

/// Layout helper function (shortcut for `ui.spacing().item_spacing.y`)
pub fn widget_y_spacing(ui: &mut Ui) -> f32 {
    ui.spacing().item_spacing.y
}
