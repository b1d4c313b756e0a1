// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Keyboard shortcuts
//!

use eframe::egui::{Context, Key, KeyboardShortcut, Modifiers};

/// The app-wide actions that have shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    Today,
}

/// Helpers for handling calendar-specific keyboard shortcuts
pub struct CalendarShortcut {}

impl CalendarShortcut {
    /// Show the previous month (Cmd + Left)
    pub fn previous_month(ctx: &Context) -> bool {
        consume(ctx, Key::ArrowLeft, "Previous month shortcut")
    }

    /// Show the next month (Cmd + Right)
    pub fn next_month(ctx: &Context) -> bool {
        consume(ctx, Key::ArrowRight, "Next month shortcut")
    }

    /// Show today (Cmd + Shift + T)
    pub fn today(ctx: &Context) -> bool {
        let shortcut = KeyboardShortcut::new(command_modifier() | Modifiers::SHIFT, Key::T);
        let shortcut_used = ctx.input_mut(|i| i.consume_shortcut(&shortcut));
        if shortcut_used {
            debug!("Today shortcut");
        }
        shortcut_used
    }
}

fn command_modifier() -> Modifiers {
    if cfg!(target_os = "macos") {
        Modifiers::MAC_CMD
    } else {
        Modifiers::CTRL
    }
}

fn consume(ctx: &Context, key: Key, log_msg: &str) -> bool {
    let shortcut = KeyboardShortcut::new(command_modifier(), key);
    let shortcut_used = ctx.input_mut(|i| i.consume_shortcut(&shortcut));
    if shortcut_used {
        debug!("{log_msg}");
    }
    shortcut_used
}

/// Check for use of a global shortcut
pub fn global_shortcuts(ctx: &Context) -> Option<CalendarAction> {
    if CalendarShortcut::previous_month(ctx) {
        Some(CalendarAction::PreviousMonth)
    } else if CalendarShortcut::next_month(ctx) {
        Some(CalendarAction::NextMonth)
    } else if CalendarShortcut::today(ctx) {
        Some(CalendarAction::Today)
    } else {
        None
    }
}
