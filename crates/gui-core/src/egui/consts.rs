// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub static NAV_BUTTON_WIDTH: f32 = 30.0;
pub static SAVE_BUTTON_WIDTH: f32 = 50.0;
pub static CLEAR_BUTTON_WIDTH: f32 = 50.0;

pub static PREVIOUS_SYMBOL: &str = "⏴";
pub static NEXT_SYMBOL: &str = "⏵";
pub static SAVE_SYMBOL: &str = "💾";
pub static CLEAR_SYMBOL: &str = "🗑";
