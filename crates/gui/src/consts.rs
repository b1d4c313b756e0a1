// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSizes {
    pub main_window: WindowSize,
    pub text_bar_edit: WindowSize,
}

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

pub const DEFAULT_WINDOW_SIZES: WindowSizes = WindowSizes {
    main_window: WindowSize {
        width: 1200.0,
        height: 750.0,
    },
    text_bar_edit: WindowSize {
        width: 350.0,
        height: 320.0,
    },
};

pub const DEFAULT_NEW_WINDOW_X_OFFSET_FROM_MAIN_WINDOW: f32 = 40.0;
pub const DEFAULT_NEW_WINDOW_Y_OFFSET_FROM_MAIN_WINDOW: f32 = 30.0;

pub const DESIRED_INPUT_TEXT_NUMBER_MONTH_WIDTH: f32 = 30.0;
pub const DESIRED_INPUT_TEXT_NUMBER_YEAR_WIDTH: f32 = 50.0;

/// The size of one day cell in the calendar grid
pub const CALENDAR_CELL_WIDTH: f32 = 36.0;
pub const CALENDAR_CELL_HEIGHT: f32 = 28.0;

pub const SIDE_PANEL_WIDTH: f32 = 300.0;
