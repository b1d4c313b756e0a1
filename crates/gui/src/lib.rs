// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Maija Calendar project*
//!
//! This library crate provides the GUI parts of the desktop application: the
//! month grid, the timeline panel, and the text bar editor windows.
//!

mod app;
mod app_colours;
mod calendar_grid;
mod config;
mod consts;
mod shortcuts;
mod state;
mod windows;

pub use app::CalendarApp;
pub use app_colours::ColourTheme;
pub use config::{Config, ConfigError};
pub use consts::DEFAULT_WINDOW_SIZES;

#[macro_use]
extern crate log;
