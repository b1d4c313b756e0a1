// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Maija Calendar project*
//!
//! This crate defines the basic datatypes used across the Maija Calendar
//! project (timeline renderer, desktop application).
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.  Nothing in here
//! depends on a GUI toolkit.
//!

mod calendar;
mod date;
mod id;

pub use calendar::*;
pub use date::*;
pub use id::*;
