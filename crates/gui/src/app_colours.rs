// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Themes and colours for the Maija Calendar desktop app
//!

use eframe::egui::{Context, Theme, Visuals};
use maija_calendar_renderer::TimelineColours;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColourTheme {
    #[default]
    System,
    Light,
    Dark,
}

impl ColourTheme {
    /// Apply the theme to the egui context
    pub fn use_theme(&self, ctx: &Context) {
        if self.is_dark(ctx) {
            ctx.style_mut(|style| style.visuals = Visuals::dark());
        } else {
            ctx.style_mut(|style| style.visuals = Visuals::light());
        }
    }

    /// The timeline colours that go with the theme
    pub fn timeline_colours(&self, ctx: &Context) -> TimelineColours {
        if self.is_dark(ctx) {
            TimelineColours::dark()
        } else {
            TimelineColours::default()
        }
    }

    /// Whether the theme is dark.  The system theme defaults to light when
    /// it can't be determined.
    fn is_dark(&self, ctx: &Context) -> bool {
        match self {
            ColourTheme::Light => false,
            ColourTheme::Dark => true,
            ColourTheme::System => matches!(ctx.system_theme(), Some(Theme::Dark)),
        }
    }
}
