// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Keyboard shortcuts
//!

use eframe::egui::{Context, Key};

/// Helpers for handling keyboard shortcuts
pub struct Shortcut {}

impl Shortcut {
    pub fn save(ctx: &Context) -> bool {
        keyboard_input_cmd_and(ctx, Key::S)
    }

    pub fn close_window(ctx: &Context) -> bool {
        keyboard_input_cmd_and(ctx, Key::W)
    }
}

/// Has the user pressed `cmd` + `key`
fn keyboard_input_cmd_and(ctx: &Context, key: Key) -> bool {
    ctx.input(|i| i.key_pressed(key) && (i.modifiers.mac_cmd || i.modifiers.command))
}
