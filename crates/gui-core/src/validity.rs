// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Validity
//!

use std::{any::type_name, fmt::Debug};

/// Used to indicate the synchronous validity of something (i.e. the aspects of
/// validity that can be checked straight away, such as its structure)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValiditySynchronous {
    Valid,
    Invalid(String),
}

impl ValiditySynchronous {
    /// The message explaining why it's invalid (`None` if valid)
    pub fn invalid_msg(&self) -> Option<&str> {
        match &self {
            ValiditySynchronous::Invalid(invalid_msg) => Some(invalid_msg),
            ValiditySynchronous::Valid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValiditySynchronous::Valid)
    }
}

impl<T, E: ToString> From<&Result<T, E>> for ValiditySynchronous {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ValiditySynchronous::Valid,
            Err(error) => ValiditySynchronous::Invalid(error.to_string()),
        }
    }
}

/// Holds the validity of some `T` and logs when it changes
#[derive(Debug)]
pub struct ValidityStatus<T> {
    synchronous: ValiditySynchronous,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for ValidityStatus<T> {
    fn default() -> Self {
        Self {
            synchronous: ValiditySynchronous::Valid,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> ValidityStatus<T> {
    /// Set the value of the synchronous validity
    pub fn set_synchronous(&mut self, validity: ValiditySynchronous) {
        // If the new value isn't the same as the current value, log the change
        if self.synchronous != validity {
            debug!(
                "{} sync validity changed: {:?} -> {:?}",
                type_name::<T>(),
                self.synchronous,
                validity
            );
            self.synchronous = validity
        }
    }

    /// Get the value of the synchronous validity
    pub fn synchronous(&self) -> &ValiditySynchronous {
        &self.synchronous
    }
}

/// Implementing types can be validated in their structure/format/etc.
pub trait ValidSynchronous {
    /// Is the target data valid
    fn is_valid_synchronous(&self) -> bool {
        self.validity_synchronous().is_valid()
    }

    /// Re-run the validation checks
    fn update_validity_synchronous(&mut self);

    /// Get the synchronous validity ([`ValiditySynchronous`])
    fn validity_synchronous(&self) -> ValiditySynchronous;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_result() {
        let ok: Result<(), String> = Ok(());
        assert_eq!(ValiditySynchronous::from(&ok), ValiditySynchronous::Valid);

        let err: Result<(), String> = Err(String::from("bad month"));
        let validity = ValiditySynchronous::from(&err);
        assert!(!validity.is_valid());
        assert_eq!(validity.invalid_msg(), Some("bad month"));
    }

    #[test]
    fn status_tracks_latest() {
        let mut status = ValidityStatus::<u32>::default();
        assert!(status.synchronous().is_valid());
        status.set_synchronous(ValiditySynchronous::Invalid(String::from("x")));
        assert_eq!(status.synchronous().invalid_msg(), Some("x"));
        status.set_synchronous(ValiditySynchronous::Valid);
        assert_eq!(status.synchronous().invalid_msg(), None);
    }
}
