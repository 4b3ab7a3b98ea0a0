//! Errors raised by misuse of unions, options and matchers.
//!
//! All of these signal a broken assumption in the calling code rather than an
//! external failure, so they carry just enough to say which case was wrong.

use thiserror::Error;

use crate::tag::Variant;

/// A slot was read while another slot was active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot read {requested} of a union holding {actual}")]
pub struct InvalidCaseError {
    requested: Variant,
    actual: Variant,
}

impl InvalidCaseError {
    pub const fn new(requested: Variant, actual: Variant) -> Self {
        InvalidCaseError { requested, actual }
    }

    pub const fn requested(&self) -> Variant {
        self.requested
    }

    pub const fn actual(&self) -> Variant {
        self.actual
    }
}

/// The terminal call of a matcher could not run a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MatchError {
    /// Nothing handles the active case and no default was registered.
    #[error("no handler for {0} and no default was registered")]
    NoMatch(Variant),

    #[error("a handler for {0} was registered more than once")]
    DuplicateCase(Variant),

    #[error("a default handler was registered more than once")]
    DuplicateDefault,
}

/// The value of an absent option was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("option contains no value")]
pub struct EmptyOptionError;

impl From<InvalidCaseError> for EmptyOptionError {
    fn from(_: InvalidCaseError) -> Self {
        EmptyOptionError
    }
}
