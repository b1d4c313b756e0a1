// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The text bar editor window
//!

use crate::app::TextBarUpdate;
use crate::consts::DEFAULT_WINDOW_SIZES;
use chrono::NaiveDate;
use eframe::egui::{CentralPanel, Context, Id, Response, TextEdit, Ui, Vec2, ViewportId};
use maija_calendar_core::TextBarId;
use maija_calendar_gui_core::{
    BreakOutWindow, Button, DisplayStatus, GuiStatus, Label, Shortcut, window_has_focus,
};
use maija_calendar_renderer::{Colour, TextBar};
use tokio::sync::mpsc::UnboundedSender;

/// Where the editor is in its life.  Typing moves it to `Editing`; saving
/// moves it to `Saved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Unchanged,
    Editing,
    Saved,
}

impl DisplayStatus for Status {
    fn status_display(&self, ui: &mut Ui) -> Response {
        match self {
            Status::Unchanged => Label::weak(ui, "Unchanged"),
            Status::Editing => ui.label("Unsaved changes"),
            Status::Saved => ui.label("Saved"),
        }
    }
}

/// Edit one text bar's topic, message, and colour.  Topic & message edits are
/// staged until saved; colour changes are sent straight away.
pub struct TextBarEditGui {
    id: TextBarId,

    /// The day the text bar is anchored to (shown, not edited)
    start_date: NaiveDate,

    /// Staged topic
    topic: String,

    /// Staged message
    message: String,

    /// The colour picker's value
    colour: [u8; 3],

    status: Status,

    /// Send edits to the app
    tx_text_bar_update: UnboundedSender<TextBarUpdate>,

    /// Whether this window should be closed or not
    wants_to_be_closed: bool,
}

impl TextBarEditGui {
    /// Open an editor pre-filled with the text bar's current values
    pub fn new(text_bar: &TextBar, tx_text_bar_update: UnboundedSender<TextBarUpdate>) -> Self {
        Self {
            id: text_bar.id(),
            start_date: text_bar.start_date(),
            topic: text_bar.topic().to_string(),
            message: text_bar.message().to_string(),
            colour: text_bar.colour().into(),
            status: Status::Unchanged,
            tx_text_bar_update,
            wants_to_be_closed: false,
        }
    }

    pub fn text_bar_id(&self) -> TextBarId {
        self.id
    }

    /// Apply a new colour immediately
    fn set_colour(&mut self, colour: [u8; 3]) {
        self.colour = colour;
        let colour = Colour::from(colour);
        debug!("text bar {} colour -> {}", self.id, colour.to_hex());
        self.send(TextBarUpdate::ColourChanged(self.id, colour));
    }

    /// Commit the staged topic & message
    fn save(&mut self) {
        debug!("save text bar {} (topic = '{}')", self.id, self.topic);
        self.send(TextBarUpdate::TextSaved {
            id: self.id,
            topic: self.topic.clone(),
            message: self.message.clone(),
        });
        self.status = Status::Saved;
    }

    fn send(&mut self, update: TextBarUpdate) {
        if self.tx_text_bar_update.send(update).is_err() {
            warn!("text bar updates channel closed, closing editor");
            self.wants_to_be_closed = true;
        }
    }

    fn draw_toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if Button::save(ui).on_hover_text("Save").clicked() {
                self.save();
            }
            if ui.button("Close").clicked() {
                self.wants_to_be_closed = true;
            }
        });
    }

    fn draw_fields(&mut self, ui: &mut Ui) {
        Label::sub_heading(ui, "Topic");
        let topic = ui.add(TextEdit::singleline(&mut self.topic).desired_width(f32::INFINITY));
        ui.add_space(4.0);

        Label::sub_heading(ui, "Message");
        let message = ui.add(
            TextEdit::multiline(&mut self.message)
                .desired_width(f32::INFINITY)
                .desired_rows(5),
        );
        if topic.changed() || message.changed() {
            self.status = Status::Editing;
        }
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            Label::sub_heading(ui, "Colour");
            let mut colour = self.colour;
            if ui.color_edit_button_srgb(&mut colour).changed() {
                self.set_colour(colour);
            }
        });
    }
}

impl BreakOutWindow for TextBarEditGui {
    fn draw(&mut self, ctx: &Context) {
        // Handle shortcuts
        if window_has_focus(ctx) {
            if Shortcut::save(ctx) {
                self.save();
            }
            if Shortcut::close_window(ctx) {
                self.wants_to_be_closed = true;
            }
        }

        CentralPanel::default().show(ctx, |ui| {
            Label::heading(ui, "Text Bar");
            ui.label(self.start_date.format("%A %-d %B %Y").to_string());
            ui.separator();

            GuiStatus::display(ui, &self.status);
            ui.separator();

            self.draw_toolbar(ui);
            ui.separator();

            self.draw_fields(ui);
        });
    }

    fn default_size(&self) -> Vec2 {
        Vec2::new(
            DEFAULT_WINDOW_SIZES.text_bar_edit.width,
            DEFAULT_WINDOW_SIZES.text_bar_edit.height,
        )
    }

    fn viewport_id(&self) -> ViewportId {
        ViewportId(Id::new(("text_bar_edit", self.id)))
    }

    fn title(&self) -> String {
        format!("Edit Text Bar • {}", self.topic)
    }

    fn wants_to_be_closed(&mut self) -> bool {
        self.wants_to_be_closed
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::UnboundedChannel;
    use maija_calendar_renderer::Engine;

    fn editor() -> (TextBarEditGui, UnboundedChannel<TextBarUpdate>) {
        let mut engine = Engine::new(NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
        let id = engine.add_box(10.0).unwrap();
        let channel: UnboundedChannel<TextBarUpdate> =
            tokio::sync::mpsc::unbounded_channel().into();
        let editor = TextBarEditGui::new(engine.text_bar(id).unwrap(), channel.tx.clone());
        (editor, channel)
    }

    #[test]
    fn prefilled_from_the_text_bar() {
        let (editor, _channel) = editor();
        assert_eq!(editor.topic, "New Box");
        assert_eq!(editor.message, "");
        assert_eq!(editor.colour, [0, 128, 0]);
        assert_eq!(editor.status, Status::Unchanged);
    }

    #[test]
    fn colour_is_sent_immediately() {
        let (mut editor, mut channel) = editor();
        editor.set_colour([0, 0, 255]);
        assert_eq!(
            channel.rx.try_recv().unwrap(),
            TextBarUpdate::ColourChanged(editor.text_bar_id(), Colour::BLUE)
        );
        assert!(channel.rx.try_recv().is_err());
    }

    #[test]
    fn text_is_only_sent_on_save() {
        let (mut editor, mut channel) = editor();
        editor.topic = String::from("Dentist");
        editor.message = String::from("Bring forms");
        assert!(channel.rx.try_recv().is_err());

        editor.save();
        assert_eq!(editor.status, Status::Saved);
        assert_eq!(
            channel.rx.try_recv().unwrap(),
            TextBarUpdate::TextSaved {
                id: editor.text_bar_id(),
                topic: String::from("Dentist"),
                message: String::from("Bring forms"),
            }
        );
    }

    #[test]
    fn closed_channel_closes_the_window() {
        let (mut editor, channel) = editor();
        drop(channel);
        editor.save();
        assert!(editor.wants_to_be_closed());
    }

    #[test]
    fn one_viewport_per_text_bar() {
        let (a, _) = editor();
        let (b, _) = editor();
        assert_eq!(a.viewport_id(), a.viewport_id());
        assert_ne!(a.viewport_id(), b.viewport_id());
    }
}
