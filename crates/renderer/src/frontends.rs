// SPDX-License-Identifier: MIT

//!
//! Frontends that paint the engine's scenes
//!

pub mod desktop_egui;
