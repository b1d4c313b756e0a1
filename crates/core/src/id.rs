// SPDX-License-Identifier: MIT

//!
//! Functions for ID management (create a globally unique one)
//!

use uuid::Uuid;

/// The ID of a text bar placed on the timeline.  A UUIDv4.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TextBarId(Uuid);

impl TextBarId {
    /// Create a new `TextBarId`
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from a string if the string is a valid ID
    pub fn from<S: ToString>(string: S) -> Result<Self, uuid::Error> {
        let string = string.to_string();
        Ok(Self(Uuid::parse_str(&string)?))
    }
}

impl Default for TextBarId {
    fn default() -> Self {
        Self::new()
    }
}
