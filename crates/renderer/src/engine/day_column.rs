// SPDX-License-Identifier: MIT

//!
//! Day columns
//!

use crate::{FilledBox, TextOut};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw one day of the timeline's header row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub label: TextOut,
    pub rect: FilledBox,
}
