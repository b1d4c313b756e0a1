// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! `egui` parts
//!

mod button;
mod consts;
mod draw;
mod error_style;
mod helpers;
mod label;
mod shortcuts;
mod status;
mod window;

pub use button::*;
pub use consts::*;
pub use draw::*;
pub use error_style::*;
pub use helpers::*;
pub use label::*;
pub use shortcuts::*;
pub use status::*;
pub use window::*;
