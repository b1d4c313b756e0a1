// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Maija Calendar egui desktop app
//!

use crate::Config;
use crate::calendar_grid::CalendarGridGui;
use crate::consts::{
    DESIRED_INPUT_TEXT_NUMBER_MONTH_WIDTH, DESIRED_INPUT_TEXT_NUMBER_YEAR_WIDTH, SIDE_PANEL_WIDTH,
};
use crate::shortcuts::{CalendarAction, global_shortcuts};
use crate::state::AppState;
use crate::windows::{BreakOutWindows, TextBarEditGui};
use chrono::{Local, NaiveDate};
use eframe::App;
use eframe::egui::{CentralPanel, Context, Key, Pos2, SidePanel, TextEdit, Ui};
use maija_calendar_core::{SelectedMonth, TextBarId, timeline_window};
use maija_calendar_gui_core::{
    Button, Draw, ErrorStyle, GuiStatus, Label, using_wayland, widget_y_spacing,
};
use maija_calendar_renderer::{Colour, TimelineInteractionEvent, TimelineRendererEgui};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Edits sent from text bar editor windows to the app
#[derive(Debug, Clone, PartialEq)]
pub enum TextBarUpdate {
    /// Applied immediately (no save needed)
    ColourChanged(TextBarId, Colour),

    /// The staged topic & message were saved
    TextSaved {
        id: TextBarId,
        topic: String,
        message: String,
    },
}

/// Holds both the `tx` and `rx` ends of an unbounded channel.
#[derive(Debug)]
pub struct UnboundedChannel<T> {
    pub tx: UnboundedSender<T>,
    pub rx: UnboundedReceiver<T>,
}

impl<T> From<(UnboundedSender<T>, UnboundedReceiver<T>)> for UnboundedChannel<T> {
    fn from(value: (UnboundedSender<T>, UnboundedReceiver<T>)) -> Self {
        UnboundedChannel {
            tx: value.0,
            rx: value.1,
        }
    }
}

/// All data needed for the Maija Calendar (egui) desktop app
pub struct CalendarApp {
    /// The position of the main window (if it can be read)
    position: Option<Pos2>,

    /// The config loaded at start up
    config: Config,

    /// Which month is shown and which day the timeline is anchored to
    state: AppState,

    /// The month grid in the side panel
    calendar_grid: CalendarGridGui,

    /// The renderer (engine frontend) that draws the timeline
    timeline_renderer: TimelineRendererEgui,

    /// All pop-out windows
    windows: BreakOutWindows,

    /// Unbounded channel on which editor windows send text bar edits
    channel_text_bar_update: UnboundedChannel<TextBarUpdate>,
}

impl CalendarApp {
    /// Create a new `CalendarApp` showing `initial_month`, with the timeline
    /// anchored at its 1st
    pub fn new(config: Config, initial_month: SelectedMonth) -> Self {
        info!("Creating app ({})", initial_month.as_long_format());
        let today = Local::now().date_naive();
        let mut state = AppState::new(initial_month);
        let (start, end) = state
            .select_day(1)
            .unwrap_or_else(|_| timeline_window(initial_month.first_day()));

        let mut timeline_renderer = TimelineRendererEgui::new(start);
        timeline_renderer.set_date_range(start, end);
        timeline_renderer.set_layout_params(config.layout_params());
        timeline_renderer.set_default_text_bar_colour(config.default_bar_colour);

        let mut calendar_grid = CalendarGridGui::new(initial_month, config.week_start, today);
        calendar_grid.set_anchor_date(state.anchor_date());

        Self {
            position: None,
            config,
            state,
            calendar_grid,
            timeline_renderer,
            windows: BreakOutWindows::default(),
            channel_text_bar_update: tokio::sync::mpsc::unbounded_channel().into(),
        }
    }

    /// Point the timeline at a new window of dates
    fn set_timeline_window(&mut self, (start, end): (NaiveDate, NaiveDate)) {
        self.timeline_renderer.set_date_range(start, end);
        self.calendar_grid.set_anchor_date(self.state.anchor_date());
    }

    /// Show the month now held by the state
    fn sync_calendar_grid(&mut self) {
        self.calendar_grid.set_month(self.state.selected());
    }

    /// Anchor the timeline at the 1st of the shown month
    fn anchor_at_first_of_month(&mut self) {
        match self.state.select_day(1) {
            Ok(window) => self.set_timeline_window(window),
            Err(error) => warn!("{error}"),
        }
    }

    fn apply_action(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::PreviousMonth => {
                self.state.previous_month();
                self.anchor_at_first_of_month();
            }
            CalendarAction::NextMonth => {
                self.state.next_month();
                self.anchor_at_first_of_month();
            }
            CalendarAction::Today => {
                let window = self.state.today();
                self.set_timeline_window(window);
            }
        }
        self.sync_calendar_grid();
    }

    fn change_month(&mut self) {
        match self.state.change_month() {
            Ok(_) => {
                self.sync_calendar_grid();
                self.anchor_at_first_of_month();
            }
            Err(error) => debug!("Change month rejected: {error}"),
        }
    }

    /// Apply any edits sent by editor windows
    fn receive_text_bar_updates(&mut self) {
        while let Ok(update) = self.channel_text_bar_update.rx.try_recv() {
            let applied = match update {
                TextBarUpdate::ColourChanged(id, colour) => {
                    self.timeline_renderer.set_text_bar_colour(id, colour)
                }
                TextBarUpdate::TextSaved { id, topic, message } => {
                    self.timeline_renderer.set_text_bar_text(id, topic, message)
                }
            };
            if !applied {
                warn!("Text bar update for a text bar that no longer exists");
            }
        }
    }

    /// Handle clicks etc. reported by the timeline
    fn handle_timeline_events(&mut self, ctx: &Context) {
        let events: Vec<TimelineInteractionEvent> =
            self.timeline_renderer.drain_interaction_events().collect();
        for event in events {
            match event {
                TimelineInteractionEvent::TextBarClicked(id) => self.open_text_bar_editor(ctx, id),
                TimelineInteractionEvent::TextBarCreated(id) => {
                    debug!("Text bar {id} created");
                }
                TimelineInteractionEvent::TextBarMoved(id, date) => {
                    debug!("Text bar {id} moved to {date}");
                }
            }
        }
    }

    fn open_text_bar_editor(&mut self, ctx: &Context, id: TextBarId) {
        let Some(text_bar) = self.timeline_renderer.text_bar(id) else {
            warn!("Clicked text bar {id} not found");
            return;
        };
        let window = TextBarEditGui::new(text_bar, self.channel_text_bar_update.tx.clone());
        self.windows.insert(ctx, self.position, Box::new(window));
    }

    fn clear_text_bars(&mut self) {
        info!("Clearing all text bars");
        self.windows.close_all();
        self.timeline_renderer.clear_text_bars();
    }

    fn draw_month_inputs(&mut self, ctx: &Context, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.state.set_validity_styling(ctx, ui);
            ui.label("Year");
            let year = ui.add(
                TextEdit::singleline(self.state.year_input_mut())
                    .desired_width(DESIRED_INPUT_TEXT_NUMBER_YEAR_WIDTH),
            );
            ui.label("Month");
            let month = ui.add(
                TextEdit::singleline(self.state.month_input_mut())
                    .desired_width(DESIRED_INPUT_TEXT_NUMBER_MONTH_WIDTH),
            );
            if year.changed() || month.changed() {
                self.state.conform_inputs();
            }
            let enter_pressed = (year.lost_focus() || month.lost_focus())
                && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.button("Change Month").clicked() || enter_pressed {
                self.change_month();
            }
        });
    }

    fn draw_month_navigation(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if Button::previous(ui).on_hover_text("Previous month").clicked() {
                self.apply_action(CalendarAction::PreviousMonth);
            }
            Label::strong(ui, &self.state.selected().as_long_format());
            if Button::next(ui).on_hover_text("Next month").clicked() {
                self.apply_action(CalendarAction::NextMonth);
            }
        });
    }

    fn draw_side_panel(&mut self, ctx: &Context, ui: &mut Ui) {
        let space = widget_y_spacing(ui);
        ui.add_space(space * 2.0);
        Label::heading(ui, "Maija Calendar");
        ui.separator();

        self.draw_month_inputs(ctx, ui);
        GuiStatus::display(ui, &self.state);
        ui.separator();

        self.draw_month_navigation(ui);
        ui.add_space(space);

        self.calendar_grid.draw(ctx, ui);
        if let Some(day) = self.calendar_grid.take_clicked_day() {
            match self.state.select_day(day) {
                Ok(window) => self.set_timeline_window(window),
                Err(error) => warn!("{error}"),
            }
        }
        ui.add_space(space);

        if Button::tall_full_width(ui, "Today").clicked() {
            self.apply_action(CalendarAction::Today);
        }
    }

    fn draw_central_panel(&mut self, ctx: &Context, ui: &mut Ui) {
        let (start, end) = self.timeline_renderer.date_range();
        ui.horizontal(|ui| {
            Label::heading(ui, "Timeline");
            Label::weak(ui, &format!("{start} to {end}"));
            Label::weak(
                ui,
                &format!("({} text bars)", self.timeline_renderer.text_bar_count()),
            );
            if Button::clear(ui).on_hover_text("Clear all text bars").clicked() {
                self.clear_text_bars();
            }
        });
        ui.separator();

        // Editor windows send their edits on the channel as they're drawn
        self.windows.draw(ctx, ui);
        self.receive_text_bar_updates();

        self.timeline_renderer.draw(ctx, ui);
        self.handle_timeline_events(ctx);
    }
}

impl App for CalendarApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Update the colour theme
        let theme = self.config.colour_theme;
        theme.use_theme(ctx);
        self.timeline_renderer.set_colours(theme.timeline_colours(ctx));

        // Get window position if we can (can't if using Wayland)
        self.position = match using_wayland() {
            false => ctx.input(|i| i.viewport().outer_rect).map(|rect| rect.min),
            true => None,
        };
        self.calendar_grid.set_today(Local::now().date_naive());

        // Check for global shortcuts
        if let Some(action) = global_shortcuts(ctx) {
            self.apply_action(action);
        }

        SidePanel::left("calendar")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.draw_side_panel(ctx, ui);
            });

        CentralPanel::default().show(ctx, |ui| {
            self.draw_central_panel(ctx, ui);
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn app() -> CalendarApp {
        CalendarApp::new(Config::default(), SelectedMonth::from(2021, 2).unwrap())
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn starts_anchored_at_the_first() {
        let app = app();
        assert_eq!(
            app.timeline_renderer.date_range(),
            (date(2021, 2, 1), date(2021, 3, 3))
        );
        assert_eq!(app.state.anchor_date(), Some(date(2021, 2, 1)));
    }

    #[test]
    fn updates_from_editors_are_applied() {
        let mut app = app();
        let id = app.timeline_renderer.add_box(250.0).unwrap();
        let tx = app.channel_text_bar_update.tx.clone();
        tx.send(TextBarUpdate::ColourChanged(id, Colour::BLUE)).unwrap();
        tx.send(TextBarUpdate::TextSaved {
            id,
            topic: String::from("Dentist"),
            message: String::from("9am"),
        })
        .unwrap();

        // Unknown IDs are ignored
        tx.send(TextBarUpdate::ColourChanged(TextBarId::new(), Colour::BLACK))
            .unwrap();

        app.receive_text_bar_updates();
        let text_bar = app.timeline_renderer.text_bar(id).unwrap();
        assert_eq!(text_bar.colour(), Colour::BLUE);
        assert_eq!(text_bar.topic(), "Dentist");
        assert_eq!(text_bar.message(), "9am");
        assert_eq!(text_bar.start_date(), date(2021, 2, 3));
    }

    #[test]
    fn editors_open_once_and_close_on_clear() {
        let mut app = app();
        let ctx = Context::default();
        let id = app.timeline_renderer.add_box(10.0).unwrap();
        app.handle_timeline_events(&ctx);
        assert!(app.windows.is_empty());

        app.open_text_bar_editor(&ctx, id);
        app.open_text_bar_editor(&ctx, id);
        assert_eq!(app.windows.len(), 1);

        app.clear_text_bars();
        assert!(app.windows.is_empty());
        assert_eq!(app.timeline_renderer.text_bar_count(), 0);

        // The text bar is gone so no editor opens
        app.open_text_bar_editor(&ctx, id);
        assert!(app.windows.is_empty());
    }

    #[test]
    fn month_actions_reanchor_at_the_first() {
        let mut app = app();
        app.apply_action(CalendarAction::NextMonth);
        assert_eq!(app.state.selected(), SelectedMonth::from(2021, 3).unwrap());
        assert_eq!(
            app.timeline_renderer.date_range(),
            (date(2021, 3, 1), date(2021, 3, 31))
        );

        app.apply_action(CalendarAction::PreviousMonth);
        app.apply_action(CalendarAction::PreviousMonth);
        assert_eq!(app.state.selected(), SelectedMonth::from(2021, 1).unwrap());
        assert_eq!(app.timeline_renderer.date_range().0, date(2021, 1, 1));
        assert_eq!(app.state.anchor_date(), Some(date(2021, 1, 1)));

        app.apply_action(CalendarAction::Today);
        let today = Local::now().date_naive();
        assert_eq!(app.timeline_renderer.date_range().0, today);
        assert_eq!(app.state.anchor_date(), Some(today));
    }

    #[test]
    fn change_month_reanchors_at_the_first() {
        let mut app = app();
        let id = app.timeline_renderer.add_box(10.0).unwrap();
        *app.state.year_input_mut() = String::from("2024");
        *app.state.month_input_mut() = String::from("12");
        app.change_month();
        assert_eq!(app.state.selected(), SelectedMonth::from(2024, 12).unwrap());
        assert_eq!(
            app.timeline_renderer.date_range(),
            (date(2024, 12, 1), date(2024, 12, 31))
        );

        // Text bars keep their dates
        assert_eq!(
            app.timeline_renderer.text_bar(id).unwrap().start_date(),
            date(2021, 2, 1)
        );

        // Invalid input leaves the month and timeline alone
        *app.state.month_input_mut() = String::new();
        app.change_month();
        assert_eq!(app.state.selected(), SelectedMonth::from(2024, 12).unwrap());
        assert_eq!(app.timeline_renderer.date_range().0, date(2024, 12, 1));
    }
}
