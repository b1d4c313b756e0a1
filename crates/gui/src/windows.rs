// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All of the pop-out/new Maija Calendar GUI windows
//!

mod text_bar_edit;

pub use text_bar_edit::*;

use crate::consts::{
    DEFAULT_NEW_WINDOW_X_OFFSET_FROM_MAIN_WINDOW, DEFAULT_NEW_WINDOW_Y_OFFSET_FROM_MAIN_WINDOW,
};
use eframe::egui::{Context, Pos2, Ui, Vec2, ViewportBuilder, ViewportCommand, ViewportId};
use maija_calendar_gui_core::{BreakOutWindow, Draw};
use std::collections::HashMap;

/// Holds information about a window (currently just its position)
#[derive(Default, Debug, Clone)]
pub struct WindowInfo {
    pub offset: Pos2,
}

impl WindowInfo {
    pub fn new_with_offset(offset: Pos2) -> Self {
        debug!("New WindowInfo with offset: {offset:?}");
        WindowInfo {
            offset: offset
                + Vec2::new(
                    DEFAULT_NEW_WINDOW_X_OFFSET_FROM_MAIN_WINDOW,
                    DEFAULT_NEW_WINDOW_Y_OFFSET_FROM_MAIN_WINDOW,
                ),
        }
    }
}

/// All "break out" windows (those windows that are not the main window)
#[derive(Default)]
pub struct BreakOutWindows {
    windows: HashMap<ViewportId, (Box<dyn BreakOutWindow>, WindowInfo)>,
}

impl BreakOutWindows {
    /// Open the window, or bring it to the fore if one with the same viewport
    /// ID is already open
    pub fn insert(
        &mut self,
        ctx: &Context,
        main_window_pos: Option<Pos2>,
        window: Box<dyn BreakOutWindow>,
    ) {
        let window_id = window.viewport_id();
        if self.windows.contains_key(&window_id) {
            debug!("Focusing breakout window (title = '{}')", window.title());
            ctx.send_viewport_cmd_to(window_id, ViewportCommand::Focus);
        } else {
            debug!("Adding new breakout window (title = '{}')", window.title());
            let offset = main_window_pos.unwrap_or(Pos2::new(250.0, 150.0));
            self.windows
                .insert(window_id, (window, WindowInfo::new_with_offset(offset)));
        }
    }

    /// Close every window
    pub fn close_all(&mut self) {
        debug!("Closing {} breakout windows", self.windows.len());
        self.windows.clear();
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Draw for BreakOutWindows {
    fn draw(&mut self, ctx: &Context, _ui: &mut Ui) {
        let mut window_ids_to_close = Vec::new();
        for (id, (window, window_info)) in self.windows.iter_mut() {
            let viewport = ViewportBuilder::default()
                .with_title(window.title())
                .with_position(window_info.offset)
                .with_inner_size(window.default_size());
            ctx.show_viewport_immediate(*id, viewport, |ctx, _| {
                if ctx.input(|i| i.viewport().close_requested()) || window.wants_to_be_closed() {
                    window_ids_to_close.push(*id);
                }
                if let Some(outer_rect) = ctx.input(|i| i.viewport().outer_rect) {
                    window_info.offset = outer_rect.min;
                };
                window.draw(ctx);
            });
        }
        for id in window_ids_to_close {
            self.windows.remove(&id);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::{TextBarUpdate, UnboundedChannel};
    use chrono::NaiveDate;
    use maija_calendar_renderer::Engine;

    #[test]
    fn inserting_the_same_text_bar_twice_keeps_one_window() {
        let ctx = Context::default();
        let mut engine = Engine::new(NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
        let a = engine.add_box(10.0).unwrap();
        let b = engine.add_box(110.0).unwrap();
        let channel: UnboundedChannel<TextBarUpdate> =
            tokio::sync::mpsc::unbounded_channel().into();

        let mut windows = BreakOutWindows::default();
        for id in [a, a, b] {
            let window = TextBarEditGui::new(engine.text_bar(id).unwrap(), channel.tx.clone());
            windows.insert(&ctx, None, Box::new(window));
        }
        assert_eq!(windows.len(), 2);

        windows.close_all();
        assert!(windows.is_empty());
    }
}
