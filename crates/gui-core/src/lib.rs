// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Maija Calendar project*
//!
//! This library crate includes the egui helpers that the Maija Calendar
//! desktop application uses and that other projects may also wish to use.
//!

mod egui;
mod helpers;
mod validity;

pub use egui::*;
pub use helpers::*;
pub use validity::*;

#[macro_use]
extern crate log;
