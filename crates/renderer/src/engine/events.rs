// SPDX-License-Identifier: MIT

//!
//! Events
//!

use chrono::NaiveDate;
use maija_calendar_core::TextBarId;
use std::fmt::Debug;

/// Interaction events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineInteractionEvent {
    /// A text bar was clicked (open its editor)
    TextBarClicked(TextBarId),

    /// A text bar was created by double clicking the timeline
    TextBarCreated(TextBarId),

    /// A text bar was dragged onto another day
    TextBarMoved(TextBarId, NaiveDate),
}
