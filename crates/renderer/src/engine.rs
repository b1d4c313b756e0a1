// SPDX-License-Identifier: MIT

//!
//! The `maija-calendar-renderer` engine
//!

mod colours;
mod consts;
mod date_range;
mod day_column;
mod drag;
mod events;
mod helpers;
mod layout_params;
mod point;
mod primitives;
mod text_bar;

pub(crate) use date_range::*;
pub(crate) use helpers::*;

pub use colours::*;
pub use consts::*;
pub use day_column::*;
pub use drag::*;
pub use events::*;
pub use layout_params::*;
pub use point::*;
pub use primitives::*;
pub use text_bar::*;

use crate::colour::Colour;
use chrono::{Datelike, NaiveDate};
use log::{debug, trace};
use maija_calendar_core::TextBarId;
use std::collections::HashSet;

/// Everything a frontend needs to paint one frame of the timeline.  Produced
/// from scratch by [`Engine::scene`] every time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineScene {
    pub background: Colour,
    pub day_columns: Vec<DayColumn>,
    pub separators: Vec<VerticalLine>,
    pub text_bars: Vec<TextBarOut>,
}

/// The core `maija-calendar-renderer` engine.  This manages the text bars,
/// the date window, the pan offsets and all calculations common to every
/// frontend.
pub struct Engine {
    /// The window of dates shown
    date_range: TimelineDateRange,

    /// All text bars, in creation order
    text_bars: Vec<TextBar>,

    /// The timeline's global offset: `x` is the horizontal scroll offset and
    /// `y` the vertical one
    offset: TimelineOffset,

    /// Whether the timeline is being panned
    drag: DragState,

    /// Sizes & spacing
    layout_params: LayoutParams,

    /// The timeline's colours
    colours: TimelineColours,

    /// The fill colour given to new text bars
    default_text_bar_colour: Colour,

    /// The text bar under the pointer (if any)
    hovered_text_bar: Option<TextBarId>,

    /// All interaction events that an external programme might be interested in
    interaction_events: Vec<TimelineInteractionEvent>,
}

impl Engine {
    /// Create a new engine whose window is anchored at `start`
    pub fn new(start: NaiveDate) -> Self {
        Self {
            date_range: TimelineDateRange::anchored_at(start),
            text_bars: Vec::new(),
            offset: TimelineOffset::default(),
            drag: DragState::default(),
            layout_params: LayoutParams::default(),
            colours: TimelineColours::default(),
            default_text_bar_colour: Colour::GREEN,
            hovered_text_bar: None,
            interaction_events: Vec::new(),
        }
    }

    /// Get the timeline colours
    pub fn colours(&self) -> TimelineColours {
        self.colours
    }

    pub fn set_colours(&mut self, colours: TimelineColours) {
        debug!("engine set colours");
        self.colours = colours;
    }

    pub fn layout_params(&self) -> LayoutParams {
        self.layout_params
    }

    pub fn set_layout_params(&mut self, layout_params: LayoutParams) {
        debug!("engine set layout params: {layout_params:?}");
        self.layout_params = layout_params;
    }

    pub fn default_text_bar_colour(&self) -> Colour {
        self.default_text_bar_colour
    }

    pub fn set_default_text_bar_colour(&mut self, colour: Colour) {
        self.default_text_bar_colour = colour;
    }

    //--------------------------------------------------------------------------
    // Date window
    //--------------------------------------------------------------------------

    /// Replace the window's bounds
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        debug!("engine set date range {start} -> {end}");
        self.date_range = TimelineDateRange { start, end };
    }

    /// The window's bounds `(start, end)`
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.date_range.start, self.date_range.end)
    }

    /// The number of day columns drawn
    pub fn visible_day_count(&self) -> usize {
        self.date_range.visible_day_count()
    }

    /// The index (relative to the window start) of the day column under the
    /// canvas x position, accounting for panning.  Negative to the left of
    /// the window start.
    pub fn day_index_at(&self, x: f64) -> i64 {
        day_index_at_px(x - self.offset.x, self.layout_params.day_width)
    }

    /// The date of the day column under the canvas x position.  Dates before
    /// the window start are allowed.
    pub fn date_at(&self, x: f64) -> Option<NaiveDate> {
        offset_date(self.date_range.start, self.day_index_at(x))
    }

    /// The canvas x position of the left edge of a day column
    pub fn day_left_x(&self, day_index: i64) -> f64 {
        (day_index as f64 * self.layout_params.day_width) + self.offset.x
    }

    //--------------------------------------------------------------------------
    // Panning & scrolling
    //--------------------------------------------------------------------------

    /// The horizontal pan offset
    pub fn scroll_offset(&self) -> f64 {
        self.offset.x
    }

    /// The vertical pan offset
    pub fn y_offset(&self) -> f64 {
        self.offset.y
    }

    /// Adjust the global offset by some delta
    pub fn add_to_global_offset(&mut self, x_delta: f64, y_delta: f64) {
        trace!("add_to_global_offset {x_delta}, {y_delta}");
        self.offset.x += x_delta;
        self.offset.y += y_delta;
    }

    /// Begin panning with the pointer at `(x, y)`
    pub fn start_drag(&mut self, x: f64, y: f64) {
        trace!("start drag at {x}, {y}");
        self.drag = DragState::Dragging {
            last: Point::new(x, y),
        };
    }

    /// The pointer moved to `(x, y)`.  If panning, the offset moves by the
    /// distance since the previous pointer position.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let DragState::Dragging { last } = self.drag {
            let current = Point::new(x, y);
            let delta = current.delta_from(last);
            self.add_to_global_offset(delta.x, delta.y);
            self.drag = DragState::Dragging { last: current };
        }
    }

    /// Stop panning
    pub fn stop_drag(&mut self) {
        trace!("stop drag");
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The number of stacking rows in use: the largest `column_num` plus one
    /// (one if there are no text bars)
    fn stacked_row_count(&self) -> usize {
        self.text_bars
            .iter()
            .map(|text_bar| text_bar.column_num() + 1)
            .max()
            .unwrap_or(1)
    }

    /// The range the vertical offset is clamped to by wheel scrolling.  The
    /// lower bound lets the last stacked row scroll into view; it is never
    /// above 0.
    pub fn y_offset_limits(&self) -> (f64, f64) {
        let rows = self.stacked_row_count() as f64;
        let visible_rows = self.layout_params.max_boxes_per_date as f64;
        let min = -(rows - visible_rows) * self.layout_params.text_bar_row_spacing;
        (min.min(0.0), 0.0)
    }

    /// Scroll vertically by a wheel delta
    pub fn scroll_vertically(&mut self, wheel_delta: f64) {
        let (min, max) = self.y_offset_limits();
        self.offset.y += wheel_delta * WHEEL_SCROLL_MULTIPLIER;
        self.offset.y = self.offset.y.min(max);
        self.offset.y = self.offset.y.max(min);
        trace!("scrolled vertically to {}", self.offset.y);
    }

    //--------------------------------------------------------------------------
    // Text bars
    //--------------------------------------------------------------------------

    /// All text bars in creation order
    pub fn text_bars(&self) -> &[TextBar] {
        &self.text_bars
    }

    pub fn text_bar(&self, id: TextBarId) -> Option<&TextBar> {
        self.text_bars.iter().find(|text_bar| text_bar.id() == id)
    }

    fn text_bar_mut(&mut self, id: TextBarId) -> Option<&mut TextBar> {
        self.text_bars.iter_mut().find(|text_bar| text_bar.id() == id)
    }

    /// The number of text bars (on any date)
    pub fn text_bar_count(&self) -> usize {
        self.text_bars.len()
    }

    /// The number of text bars anchored to `date`
    pub fn text_bar_count_on(&self, date: NaiveDate) -> usize {
        self.text_bars
            .iter()
            .filter(|text_bar| text_bar.start_date() == date)
            .count()
    }

    /// The lowest stacking slot not taken by a text bar anchored to `date`.
    /// This is the count of text bars on `date` unless a move left a gap.
    fn next_free_slot(&self, date: NaiveDate) -> usize {
        let taken: HashSet<usize> = self
            .text_bars
            .iter()
            .filter(|text_bar| text_bar.start_date() == date)
            .map(TextBar::column_num)
            .collect();
        (0..=taken.len())
            .find(|slot| !taken.contains(slot))
            .unwrap_or(taken.len())
    }

    /// Create a text bar on the day under canvas x position `x`.  It takes the
    /// lowest free stacking slot on that day.  Returns `None` only if the day can't be
    /// represented as a date.
    pub fn add_box(&mut self, x: f64) -> Option<TextBarId> {
        let date = self.date_at(x)?;
        let column_num = self.next_free_slot(date);
        let text_bar = TextBar::new(date, column_num, self.default_text_bar_colour);
        let id = text_bar.id();
        debug!("add text bar {id} on {date} in slot {column_num}");
        self.text_bars.push(text_bar);
        self.interaction_events
            .push(TimelineInteractionEvent::TextBarCreated(id));
        Some(id)
    }

    /// Commit edited text.  Returns whether the text bar exists.
    pub fn set_text_bar_text(&mut self, id: TextBarId, topic: String, message: String) -> bool {
        match self.text_bar_mut(id) {
            Some(text_bar) => {
                debug!("set text of text bar {id} (topic = '{topic}')");
                text_bar.set_text(topic, message);
                true
            }
            None => false,
        }
    }

    /// Change a text bar's colour.  Returns whether the text bar exists.
    pub fn set_text_bar_colour(&mut self, id: TextBarId, colour: Colour) -> bool {
        match self.text_bar_mut(id) {
            Some(text_bar) => {
                debug!("set colour of text bar {id} to {}", colour.to_hex());
                text_bar.set_colour(colour);
                true
            }
            None => false,
        }
    }

    /// Re-anchor a text bar to another date.  It takes the lowest free
    /// stacking slot on that date.  Returns whether the text bar exists.
    pub fn move_text_bar(&mut self, id: TextBarId, new_start_date: NaiveDate) -> bool {
        let Some(current_date) = self.text_bar(id).map(TextBar::start_date) else {
            return false;
        };
        if current_date == new_start_date {
            return true;
        }
        let column_num = self.next_free_slot(new_start_date);
        if let Some(text_bar) = self.text_bar_mut(id) {
            debug!("move text bar {id} from {current_date} to {new_start_date}");
            text_bar.move_to(new_start_date, column_num);
        }
        self.interaction_events
            .push(TimelineInteractionEvent::TextBarMoved(id, new_start_date));
        true
    }

    /// Remove every text bar
    pub fn clear_text_bars(&mut self) {
        debug!("clear {} text bars", self.text_bars.len());
        self.text_bars.clear();
        self.hovered_text_bar = None;
    }

    //--------------------------------------------------------------------------
    // Interaction
    //--------------------------------------------------------------------------

    /// Get all events for dispatching & handling
    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, TimelineInteractionEvent> {
        self.interaction_events.drain(..)
    }

    pub fn click_on_text_bar(&mut self, id: TextBarId) {
        self.interaction_events
            .push(TimelineInteractionEvent::TextBarClicked(id));
    }

    pub fn hover_over_text_bar(&mut self, id: Option<TextBarId>) {
        self.hovered_text_bar = id;
    }

    /// The topmost text bar at the canvas position (if any)
    pub fn text_bar_at(&self, point: Point) -> Option<TextBarId> {
        self.text_bar_boxes()
            .into_iter()
            .rev()
            .find(|(_, position_and_size)| position_and_size.contains(point))
            .map(|(text_bar, _)| text_bar.id())
    }

    //--------------------------------------------------------------------------
    // Drawing
    //--------------------------------------------------------------------------

    /// Where each text bar is drawn (offsets applied)
    fn text_bar_boxes(&self) -> Vec<(&TextBar, PositionAndSize)> {
        let params = &self.layout_params;
        self.text_bars
            .iter()
            .map(|text_bar| {
                let days_from_start = text_bar.days_from(self.date_range.start);
                let x = self.day_left_x(days_from_start);
                let y = params.text_bar_area_top
                    + text_bar.slot_y(
                        params.max_boxes_per_date,
                        params.text_bar_row_spacing,
                        self.offset.y,
                    );
                let position_and_size = PositionAndSize {
                    position: Point { x, y },
                    width: params.day_width * params.text_bar_width_fraction,
                    height: params.text_bar_height,
                };
                (text_bar, position_and_size)
            })
            .collect()
    }

    /// Get all information needed to draw the day columns
    pub fn day_columns_for_drawing(&self) -> Vec<DayColumn> {
        let params = &self.layout_params;
        (0..self.visible_day_count())
            .filter_map(|day_number| {
                let day_number = day_number as i64;
                let date = offset_date(self.date_range.start, day_number)?;
                let position_and_size = PositionAndSize {
                    position: Point {
                        x: self.day_left_x(day_number),
                        y: 0.0,
                    },
                    width: params.day_width,
                    height: params.header_height,
                };
                Some(DayColumn {
                    date,
                    label: TextOut {
                        centre: position_and_size.centre(),
                        text: format!("{:02}", date.day()),
                        colour: self.colours.day_label_colour,
                        font_size: params.font_size_px,
                    },
                    rect: FilledBox {
                        position_and_size,
                        fill_colour: self.colours.day_column.fill_colour,
                        border_style: self.colours.day_column.border,
                    },
                })
            })
            .collect()
    }

    /// Get all information needed to draw the dashed separators (every 4th
    /// day)
    pub fn separators_for_drawing(&self) -> Vec<VerticalLine> {
        (SEPARATOR_EVERY_N_DAYS..self.visible_day_count())
            .step_by(SEPARATOR_EVERY_N_DAYS)
            .map(|day_number| VerticalLine {
                x: self.day_left_x(day_number as i64),
                top: 0.0,
                length: self.layout_params.separator_length,
                style: self.colours.separator,
            })
            .collect()
    }

    /// Get all information needed to draw the text bars
    pub fn text_bars_for_drawing(&self) -> Vec<TextBarOut> {
        self.text_bar_boxes()
            .into_iter()
            .map(|(text_bar, position_and_size)| {
                let is_hovered_over = self.hovered_text_bar == Some(text_bar.id());
                let fill_colour = if is_hovered_over {
                    Colour::lightened_colour(text_bar.colour())
                } else {
                    text_bar.colour()
                };
                TextBarOut {
                    id: text_bar.id(),
                    start_date: text_bar.start_date(),
                    column_num: text_bar.column_num(),
                    rect: FilledBox {
                        position_and_size,
                        fill_colour,
                        border_style: Some(self.colours.text_bar.border),
                    },
                    topic: TextOut {
                        centre: position_and_size.centre(),
                        text: text_bar.topic().to_string(),
                        colour: self.colours.text_bar.text_colour,
                        font_size: self.layout_params.font_size_px,
                    },
                    is_hovered_over,
                }
            })
            .collect()
    }

    /// Full redraw: every shape of the timeline, recomputed from the current
    /// state
    pub fn scene(&self) -> TimelineScene {
        TimelineScene {
            background: self.colours.background,
            day_columns: self.day_columns_for_drawing(),
            separators: self.separators_for_drawing(),
            text_bars: self.text_bars_for_drawing(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn engine() -> Engine {
        Engine::new(date(2021, 2, 1))
    }

    #[test]
    fn new_engine_shows_thirty_days() {
        let engine = engine();
        assert_eq!(engine.date_range(), (date(2021, 2, 1), date(2021, 3, 3)));
        assert_eq!(engine.scene().day_columns.len(), 30);
    }

    #[test]
    fn day_columns_are_capped_at_thirty() {
        let mut engine = engine();
        engine.set_date_range(date(2021, 2, 1), date(2021, 2, 5));
        assert_eq!(engine.scene().day_columns.len(), 5);

        engine.set_date_range(date(2021, 2, 1), date(2021, 6, 1));
        assert_eq!(engine.scene().day_columns.len(), 30);

        engine.set_date_range(date(2021, 2, 1), date(2021, 1, 1));
        assert!(engine.scene().day_columns.is_empty());
    }

    #[test]
    fn day_columns_are_laid_out_left_to_right() {
        let engine = engine();
        let columns = engine.day_columns_for_drawing();
        assert_eq!(columns[0].date, date(2021, 2, 1));
        assert_eq!(columns[0].label.text, "01");
        assert_eq!(columns[27].label.text, "28");
        assert_eq!(columns[28].date, date(2021, 3, 1));
        assert_eq!(columns[3].rect.position_and_size.position.x, 300.0);
        assert_eq!(columns[3].rect.position_and_size.width, 100.0);
        assert_eq!(columns[3].rect.position_and_size.height, 30.0);
    }

    #[test]
    fn separators_every_fourth_day() {
        let engine = engine();
        let xs: Vec<f64> = engine
            .separators_for_drawing()
            .iter()
            .map(|line| line.x)
            .collect();
        assert_eq!(
            xs,
            vec![400.0, 800.0, 1200.0, 1600.0, 2000.0, 2400.0, 2800.0]
        );
    }

    #[test]
    fn add_box_uses_the_day_under_the_pointer() {
        let mut engine = engine();
        let id = engine.add_box(250.0).unwrap();
        let text_bar = engine.text_bar(id).unwrap();
        assert_eq!(text_bar.start_date(), date(2021, 2, 3));
        assert_eq!(text_bar.topic(), DEFAULT_TEXT_BAR_TOPIC);
        assert_eq!(text_bar.message(), "");
        assert_eq!(text_bar.colour(), Colour::GREEN);
        assert_eq!(text_bar.column_num(), 0);
        assert_eq!(
            engine.drain_interaction_events().collect::<Vec<_>>(),
            vec![TimelineInteractionEvent::TextBarCreated(id)]
        );
    }

    #[test]
    fn add_box_accounts_for_panning() {
        let mut engine = engine();
        engine.add_to_global_offset(-150.0, 0.0);
        let id = engine.add_box(10.0).unwrap();
        assert_eq!(engine.text_bar(id).unwrap().start_date(), date(2021, 2, 2));
    }

    #[test]
    fn add_box_left_of_the_window_gives_an_earlier_date() {
        let mut engine = engine();
        engine.add_to_global_offset(250.0, 0.0);
        let id = engine.add_box(10.0).unwrap();
        assert_eq!(engine.text_bar(id).unwrap().start_date(), date(2021, 1, 29));
    }

    #[test]
    fn same_date_text_bars_stack() {
        let mut engine = engine();
        let first = engine.add_box(10.0).unwrap();
        let second = engine.add_box(20.0).unwrap();
        let other_day = engine.add_box(110.0).unwrap();
        assert_eq!(engine.text_bar(first).unwrap().column_num(), 0);
        assert_eq!(engine.text_bar(second).unwrap().column_num(), 1);
        assert_eq!(engine.text_bar(other_day).unwrap().column_num(), 0);

        let bars = engine.text_bars_for_drawing();
        let first_y = bars[0].rect.position_and_size.position.y;
        let second_y = bars[1].rect.position_and_size.position.y;
        assert_eq!(second_y - first_y, 40.0);
        assert_eq!(bars[0].rect.position_and_size.position.x, 0.0);
        assert_eq!(bars[0].rect.position_and_size.width, 25.0);
        assert_eq!(bars[0].rect.position_and_size.height, 30.0);
        assert_eq!(bars[2].rect.position_and_size.position.x, 100.0);
    }

    #[test]
    fn stacking_wraps_after_max_boxes_per_date() {
        let mut engine = engine();
        let ids: Vec<TextBarId> = (0..16).map(|_| engine.add_box(10.0).unwrap()).collect();
        for (slot, id) in ids.iter().enumerate() {
            assert_eq!(engine.text_bar(*id).unwrap().column_num(), slot);
        }
        let bars = engine.text_bars_for_drawing();
        assert_eq!(
            bars[15].rect.position_and_size.position.y,
            bars[0].rect.position_and_size.position.y
        );
    }

    #[test]
    fn panning_moves_every_shape_by_the_delta() {
        let mut engine = engine();
        engine.add_box(10.0);
        engine.add_box(20.0);
        engine.add_box(520.0);
        let before = engine.scene();

        engine.start_drag(100.0, 100.0);
        engine.drag_to(130.0, 90.0);
        engine.drag_to(137.0, 95.0);
        engine.stop_drag();
        assert!(!engine.is_dragging());
        let after = engine.scene();

        for (before, after) in before.text_bars.iter().zip(after.text_bars.iter()) {
            let before_pos = before.rect.position_and_size.position;
            let after_pos = after.rect.position_and_size.position;
            assert_eq!(after_pos.x - before_pos.x, 37.0);
            assert_eq!(after_pos.y - before_pos.y, -5.0);
            assert_eq!(before.start_date, after.start_date);
        }
        for (before, after) in before.day_columns.iter().zip(after.day_columns.iter()) {
            let before_pos = before.rect.position_and_size.position;
            let after_pos = after.rect.position_and_size.position;
            assert_eq!(after_pos.x - before_pos.x, 37.0);
            assert_eq!(before.date, after.date);
        }
        for (before, after) in before.separators.iter().zip(after.separators.iter()) {
            assert_eq!(after.x - before.x, 37.0);
        }
    }

    #[test]
    fn drag_to_without_start_does_nothing() {
        let mut engine = engine();
        engine.drag_to(50.0, 50.0);
        assert_eq!(engine.scroll_offset(), 0.0);
        assert_eq!(engine.y_offset(), 0.0);
    }

    #[test]
    fn separate_engines_track_drags_separately() {
        let mut a = engine();
        let mut b = engine();
        a.start_drag(0.0, 0.0);
        b.drag_to(10.0, 10.0);
        assert!(!b.is_dragging());
        a.drag_to(10.0, 0.0);
        assert_eq!(a.scroll_offset(), 10.0);
        assert_eq!(b.scroll_offset(), 0.0);
    }

    #[test]
    fn wheel_scrolling_is_clamped() {
        let mut engine = engine();

        // Fewer rows than fit: pinned at 0
        engine.add_box(10.0);
        engine.scroll_vertically(-100.0);
        assert_eq!(engine.y_offset(), 0.0);
        engine.scroll_vertically(100.0);
        assert_eq!(engine.y_offset(), 0.0);

        // 20 rows: can scroll up by 5 rows at most
        for _ in 0..19 {
            engine.add_box(10.0);
        }
        let (min, max) = engine.y_offset_limits();
        assert_eq!((min, max), (-200.0, 0.0));
        engine.scroll_vertically(-30.0);
        assert_eq!(engine.y_offset(), -60.0);
        engine.scroll_vertically(-1000.0);
        assert_eq!(engine.y_offset(), -200.0);
        engine.scroll_vertically(1000.0);
        assert_eq!(engine.y_offset(), 0.0);
    }

    #[test]
    fn wheel_scrolling_reclamps_a_panned_offset() {
        let mut engine = engine();
        engine.add_to_global_offset(0.0, 300.0);
        engine.scroll_vertically(0.0);
        assert_eq!(engine.y_offset(), 0.0);
    }

    #[test]
    fn move_text_bar_reanchors_and_restacks() {
        let mut engine = engine();
        let a = engine.add_box(10.0).unwrap();
        let b = engine.add_box(110.0).unwrap();
        let _ = engine.drain_interaction_events().count();

        assert!(engine.move_text_bar(b, date(2021, 2, 1)));
        let moved = engine.text_bar(b).unwrap();
        assert_eq!(moved.start_date(), date(2021, 2, 1));
        assert_eq!(moved.column_num(), 1);
        assert_eq!(engine.text_bar(a).unwrap().column_num(), 0);
        assert_eq!(
            engine.drain_interaction_events().collect::<Vec<_>>(),
            vec![TimelineInteractionEvent::TextBarMoved(b, date(2021, 2, 1))]
        );

        // Moving to the same date changes nothing
        assert!(engine.move_text_bar(b, date(2021, 2, 1)));
        assert_eq!(engine.text_bar(b).unwrap().column_num(), 1);
        assert_eq!(engine.drain_interaction_events().count(), 0);

        assert!(!engine.move_text_bar(TextBarId::new(), date(2021, 2, 1)));
    }

    #[test]
    fn slots_freed_by_a_move_are_reused() {
        let mut engine = engine();
        let a = engine.add_box(10.0).unwrap();
        let b = engine.add_box(20.0).unwrap();
        assert!(engine.move_text_bar(a, date(2021, 2, 2)));
        assert_eq!(engine.text_bar(a).unwrap().column_num(), 0);

        // Slot 0 on the 1st is free again; slot 1 is still taken
        let c = engine.add_box(30.0).unwrap();
        assert_eq!(engine.text_bar(b).unwrap().column_num(), 1);
        assert_eq!(engine.text_bar(c).unwrap().column_num(), 0);

        let bars = engine.text_bars_for_drawing();
        let y_of = |id| {
            bars.iter()
                .find(|bar| bar.id == id)
                .map(|bar| bar.rect.position_and_size.position.y)
                .unwrap()
        };
        assert_ne!(y_of(b), y_of(c));
        assert_eq!(engine.text_bar_at(Point::new(5.0, 45.0)), Some(c));
        assert_eq!(engine.text_bar_at(Point::new(5.0, 85.0)), Some(b));

        // Moving onto a date fills its lowest gap too
        assert!(engine.move_text_bar(b, date(2021, 2, 2)));
        assert_eq!(engine.text_bar(b).unwrap().column_num(), 1);
        assert!(engine.move_text_bar(a, date(2021, 2, 1)));
        assert_eq!(engine.text_bar(a).unwrap().column_num(), 1);
        assert!(engine.move_text_bar(c, date(2021, 2, 2)));
        assert_eq!(engine.text_bar(c).unwrap().column_num(), 0);
        assert_eq!(engine.text_bar_count_on(date(2021, 2, 1)), 1);
        assert_eq!(engine.text_bar_count_on(date(2021, 2, 2)), 2);
    }

    #[test]
    fn editing_text_and_colour() {
        let mut engine = engine();
        let id = engine.add_box(10.0).unwrap();
        assert!(engine.set_text_bar_text(id, String::from("Dentist"), String::from("9am")));
        assert!(engine.set_text_bar_colour(id, Colour::BLUE));
        let text_bar = engine.text_bar(id).unwrap();
        assert_eq!(text_bar.topic(), "Dentist");
        assert_eq!(text_bar.message(), "9am");
        assert_eq!(text_bar.colour(), Colour::BLUE);
        assert_eq!(engine.text_bars_for_drawing()[0].topic.text, "Dentist");
        assert_eq!(engine.text_bars_for_drawing()[0].rect.fill_colour, Colour::BLUE);

        let unknown = TextBarId::new();
        assert!(!engine.set_text_bar_text(unknown, String::new(), String::new()));
        assert!(!engine.set_text_bar_colour(unknown, Colour::BLUE));
    }

    #[test]
    fn hovered_text_bar_is_lightened() {
        let mut engine = engine();
        let id = engine.add_box(10.0).unwrap();
        engine.hover_over_text_bar(Some(id));
        let bar = &engine.text_bars_for_drawing()[0];
        assert!(bar.is_hovered_over);
        assert_eq!(bar.rect.fill_colour, Colour::lightened_colour(Colour::GREEN));
    }

    #[test]
    fn text_bar_at_finds_the_bar_under_the_pointer() {
        let mut engine = engine();
        let id = engine.add_box(10.0).unwrap();
        assert_eq!(engine.text_bar_at(Point::new(5.0, 45.0)), Some(id));
        assert_eq!(engine.text_bar_at(Point::new(50.0, 45.0)), None);
        assert_eq!(engine.text_bar_at(Point::new(5.0, 10.0)), None);
    }

    #[test]
    fn set_date_range_keeps_text_bars() {
        let mut engine = engine();
        let id = engine.add_box(10.0).unwrap();
        engine.set_date_range(date(2021, 1, 30), date(2021, 3, 1));
        let bars = engine.text_bars_for_drawing();
        assert_eq!(bars[0].id, id);
        assert_eq!(bars[0].rect.position_and_size.position.x, 200.0);
    }

    #[test]
    fn clear_text_bars() {
        let mut engine = engine();
        engine.add_box(10.0);
        engine.add_box(10.0);
        engine.clear_text_bars();
        assert_eq!(engine.text_bar_count(), 0);
        assert!(engine.scene().text_bars.is_empty());
        assert_eq!(engine.y_offset_limits(), (0.0, 0.0));
    }
}
