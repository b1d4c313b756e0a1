// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{
    Colour, Engine, FilledBox, LayoutParams, Point, PositionAndSize, TextBar, TimelineColours,
    TimelineInteractionEvent, TimelineScene,
};
use chrono::NaiveDate;
use eframe::egui::{
    Align2, Color32, Context, FontId, Id, Painter, PointerButton, Pos2, Rect, Sense, Shape, Stroke,
    StrokeKind, Ui, Vec2,
};
use log::*;
use maija_calendar_core::TextBarId;

/// Dash & gap length of the day separators (px)
const SEPARATOR_DASH_LENGTH: f32 = 2.0;

/// The egui timeline renderer for use in the desktop app
pub struct TimelineRendererEgui {
    /// The underlying timeline [`Engine`].
    engine: Engine,

    /// The text bar currently being dragged to another day (if any)
    moving_text_bar: Option<TextBarId>,
}

impl TimelineRendererEgui {
    /// Create a new egui renderer whose window is anchored at `start`
    pub fn new(start: NaiveDate) -> Self {
        info!("constructing a new egui timeline renderer (start = {start})");
        Self {
            engine: Engine::new(start),
            moving_text_bar: None,
        }
    }

    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.engine.set_date_range(start, end);
    }

    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        self.engine.date_range()
    }

    /// Create a text bar on the day under canvas x position `x` (as a double
    /// click there would)
    pub fn add_box(&mut self, x: f64) -> Option<TextBarId> {
        self.engine.add_box(x)
    }

    pub fn text_bar(&self, id: TextBarId) -> Option<&TextBar> {
        self.engine.text_bar(id)
    }

    pub fn text_bar_count(&self) -> usize {
        self.engine.text_bar_count()
    }

    pub fn set_text_bar_text(&mut self, id: TextBarId, topic: String, message: String) -> bool {
        self.engine.set_text_bar_text(id, topic, message)
    }

    pub fn set_text_bar_colour(&mut self, id: TextBarId, colour: Colour) -> bool {
        self.engine.set_text_bar_colour(id, colour)
    }

    pub fn clear_text_bars(&mut self) {
        self.moving_text_bar = None;
        self.engine.clear_text_bars();
    }

    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, TimelineInteractionEvent> {
        self.engine.drain_interaction_events()
    }

    pub fn set_layout_params(&mut self, layout_params: LayoutParams) {
        self.engine.set_layout_params(layout_params);
    }

    pub fn set_default_text_bar_colour(&mut self, colour: Colour) {
        self.engine.set_default_text_bar_colour(colour);
    }

    pub fn colours(&self) -> TimelineColours {
        self.engine.colours()
    }

    /// Called every frame, so only logs on change
    pub fn set_colours(&mut self, colours: TimelineColours) {
        if colours != self.engine.colours() {
            debug!("egui renderer set colours");
            self.engine.set_colours(colours)
        }
    }

    pub fn draw(&mut self, ctx: &Context, ui: &mut Ui) {
        draw_timeline(ctx, ui, &mut self.engine, &mut self.moving_text_bar);
    }
}

/// Draw the timeline in an `egui` application & feed it the pointer input
fn draw_timeline(
    _ctx: &Context,
    ui: &mut Ui,
    engine: &mut Engine,
    moving_text_bar: &mut Option<TextBarId>,
) {
    let size = Vec2::new(ui.available_width(), ui.available_height());
    let (painter_response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
    let canvas_rect = painter_response.rect;
    let canvas_min = canvas_rect.min.to_vec2();

    // Canvas-local pointer position
    let local_pointer = |pos: Pos2| -> Point {
        let local = pos - canvas_min;
        Point::new(local.x.into(), local.y.into())
    };

    // Pan with the secondary button
    if painter_response.drag_started_by(PointerButton::Secondary) {
        if let Some(pos) = painter_response.interact_pointer_pos() {
            let point = local_pointer(pos);
            engine.start_drag(point.x, point.y);
        }
    }
    if painter_response.dragged_by(PointerButton::Secondary) {
        if let Some(pos) = painter_response.interact_pointer_pos() {
            let point = local_pointer(pos);
            engine.drag_to(point.x, point.y);
        }
    }
    if painter_response.drag_stopped_by(PointerButton::Secondary) {
        engine.stop_drag();
    }

    // Double click on empty canvas creates a text bar
    if painter_response.double_clicked() {
        if let Some(pos) = painter_response.interact_pointer_pos() {
            create_text_bar_at(engine, local_pointer(pos));
        }
    }

    // Wheel scrolls the text bars vertically
    if painter_response.hovered() {
        let y_scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if y_scroll != 0.0 {
            engine.scroll_vertically(y_scroll.into());
        }
    }

    let scene = engine.scene();
    paint_scene(&painter, canvas_rect, &scene);

    // Text bar interaction
    let mut hovered = None;
    for text_bar in &scene.text_bars {
        let rect = to_egui_rect(&text_bar.rect.position_and_size, canvas_min);

        // Don't sense things outside of the canvas
        let visible_rect = canvas_rect.intersect(rect);
        if !visible_rect.is_positive() {
            continue;
        }
        let response = ui.interact(
            visible_rect,
            Id::new(("text_bar", text_bar.id)),
            Sense::click_and_drag(),
        );
        if response.hovered() {
            hovered = Some(text_bar.id);
        }
        if response.clicked() {
            engine.click_on_text_bar(text_bar.id);
        }
        if response.drag_started_by(PointerButton::Primary) {
            trace!("start moving text bar {}", text_bar.id);
            *moving_text_bar = Some(text_bar.id);
        }
        if response.drag_stopped_by(PointerButton::Primary) && *moving_text_bar == Some(text_bar.id)
        {
            if let Some(pos) = response.interact_pointer_pos() {
                drop_text_bar_at(engine, text_bar.id, local_pointer(pos));
            }
            *moving_text_bar = None;
        }
    }
    engine.hover_over_text_bar(hovered);

    // Outline where the text bar being moved would land
    if let (Some(_), Some(pos)) = (*moving_text_bar, ui.input(|i| i.pointer.hover_pos())) {
        let point = local_pointer(pos);
        let params = engine.layout_params();
        let day_index = engine.day_index_at(point.x);
        let target = PositionAndSize {
            position: Point::new(engine.day_left_x(day_index), point.y - params.text_bar_height / 2.0),
            width: params.day_width * params.text_bar_width_fraction,
            height: params.text_bar_height,
        };
        let style = engine.colours().text_bar.drop_target;
        painter.rect_stroke(
            to_egui_rect(&target, canvas_min),
            0.0,
            Stroke::new(style.thickness as f32, Color32::from(style.colour)),
            StrokeKind::Inside,
        );
    }
}

/// Create a text bar where a double click landed, unless it landed on a text
/// bar
fn create_text_bar_at(engine: &mut Engine, point: Point) -> Option<TextBarId> {
    match engine.text_bar_at(point) {
        Some(_) => None,
        None => engine.add_box(point.x),
    }
}

/// Move a dragged text bar to the day under `point`
fn drop_text_bar_at(engine: &mut Engine, id: TextBarId, point: Point) -> bool {
    engine
        .date_at(point.x)
        .is_some_and(|date| engine.move_text_bar(id, date))
}

/// Paint a full frame: background, text bars, day columns, separators
fn paint_scene(painter: &Painter, canvas_rect: Rect, scene: &TimelineScene) {
    let canvas_min = canvas_rect.min.to_vec2();
    painter.rect_filled(canvas_rect, 0.0, Color32::from(scene.background));

    for text_bar in &scene.text_bars {
        paint_filled_box(painter, canvas_min, &text_bar.rect);
        let topic = &text_bar.topic;
        painter.text(
            to_egui_pos(topic.centre, canvas_min),
            Align2::CENTER_CENTER,
            &topic.text,
            FontId::proportional(topic.font_size as f32),
            Color32::from(topic.colour),
        );
    }

    // The header row is drawn over the text bars so they scroll beneath it
    for day_column in &scene.day_columns {
        paint_filled_box(painter, canvas_min, &day_column.rect);
        let label = &day_column.label;
        painter.text(
            to_egui_pos(label.centre, canvas_min),
            Align2::CENTER_CENTER,
            &label.text,
            FontId::proportional(label.font_size as f32),
            Color32::from(label.colour),
        );
    }

    for separator in &scene.separators {
        let top = Pos2::new(separator.x as f32, separator.top as f32) + canvas_min;
        let bottom = top + Vec2::new(0.0, separator.length as f32);
        let stroke = Stroke::new(
            separator.style.thickness as f32,
            Color32::from(separator.style.colour),
        );
        painter.extend(Shape::dashed_line(
            &[top, bottom],
            stroke,
            SEPARATOR_DASH_LENGTH,
            SEPARATOR_DASH_LENGTH,
        ));
    }
}

fn paint_filled_box(painter: &Painter, canvas_min: Vec2, filled_box: &FilledBox) {
    let stroke = match filled_box.border_style {
        Some(border) => Stroke::new(border.thickness as f32, Color32::from(border.colour)),
        None => Stroke::NONE,
    };
    painter.rect(
        to_egui_rect(&filled_box.position_and_size, canvas_min),
        0.0,
        Color32::from(filled_box.fill_colour),
        stroke,
        StrokeKind::Inside,
    );
}

fn to_egui_pos(point: Point, canvas_min: Vec2) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32) + canvas_min
}

/// Convert a [`PositionAndSize`] into a screen [`Rect`]
fn to_egui_rect(position_and_size: &PositionAndSize, canvas_min: Vec2) -> Rect {
    let min = to_egui_pos(position_and_size.position, canvas_min);
    let size = Vec2::new(
        position_and_size.width as f32,
        position_and_size.height as f32,
    );
    Rect::from_min_size(min, size)
}

#[cfg(test)]
mod test {
    use super::*;
    use eframe::egui::{CentralPanel, RawInput};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn double_click_on_empty_canvas_creates_a_text_bar() {
        let mut engine = Engine::new(date(2021, 2, 1));
        let id = create_text_bar_at(&mut engine, Point::new(150.0, 200.0)).unwrap();
        assert_eq!(engine.text_bar(id).unwrap().start_date(), date(2021, 2, 2));
        assert_eq!(engine.text_bar_count(), 1);
    }

    #[test]
    fn double_click_on_a_text_bar_creates_nothing() {
        let mut engine = Engine::new(date(2021, 2, 1));
        engine.add_box(10.0);
        let _ = engine.drain_interaction_events().count();

        assert_eq!(create_text_bar_at(&mut engine, Point::new(5.0, 45.0)), None);
        assert_eq!(engine.text_bar_count(), 1);
        assert_eq!(engine.drain_interaction_events().count(), 0);

        // Just beside the bar is empty canvas
        assert!(create_text_bar_at(&mut engine, Point::new(50.0, 45.0)).is_some());
        assert_eq!(engine.text_bar_count(), 2);
    }

    #[test]
    fn dropping_a_text_bar_reschedules_it() {
        let mut engine = Engine::new(date(2021, 2, 1));
        let id = engine.add_box(10.0).unwrap();
        engine.add_to_global_offset(-100.0, 0.0);
        assert!(drop_text_bar_at(&mut engine, id, Point::new(250.0, 45.0)));
        assert_eq!(engine.text_bar(id).unwrap().start_date(), date(2021, 2, 4));
        assert!(!drop_text_bar_at(&mut engine, TextBarId::new(), Point::new(250.0, 45.0)));
    }

    #[test]
    fn draws_a_frame_without_input() {
        let mut renderer = TimelineRendererEgui::new(date(2021, 2, 1));
        renderer.add_box(10.0);
        renderer.add_box(510.0);
        let _ = renderer.drain_interaction_events().count();

        let ctx = Context::default();
        let output = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| renderer.draw(ctx, ui));
        });
        assert!(!output.shapes.is_empty());

        // No pointer input means no events and no changes
        assert_eq!(renderer.drain_interaction_events().count(), 0);
        assert_eq!(renderer.text_bar_count(), 2);
        assert_eq!(renderer.date_range(), (date(2021, 2, 1), date(2021, 3, 3)));
    }

    #[test]
    fn clearing_stops_a_move() {
        let mut renderer = TimelineRendererEgui::new(date(2021, 2, 1));
        let id = renderer.add_box(10.0).unwrap();
        renderer.moving_text_bar = Some(id);
        renderer.clear_text_bars();
        assert_eq!(renderer.moving_text_bar, None);
        assert_eq!(renderer.text_bar_count(), 0);
    }
}
