// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Maija Calendar project*
//!
//! This crate facilitates the drawing of the calendar's timeline: a window of
//! up to 30 days laid out left to right, with coloured text bars stacked on
//! the days they are anchored to.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Managing the text bars that are to be drawn (creating, moving, editing)
//! - Managing the date window and the pan offsets
//! - Handling and emitting interaction events
//! - Producing a complete scene of shapes for frontends to paint
//!
//! The rest of the crate holds the frontend.  There is currently only one:
//!
//! - `egui` for native desktop rendering
//!

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
pub use frontends::desktop_egui::TimelineRendererEgui;
