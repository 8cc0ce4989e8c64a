//! Failure carrier for throw-style validation.

use crate::core::ValidationOutcome;
use thiserror::Error;

/// A value that failed validation, together with the failing outcome.
///
/// Only created by the `validate` entry points, so the outcome is always a
/// failure with a non-empty message.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{outcome}")]
pub struct ValidationFailure<T> {
    outcome: ValidationOutcome,
    value: T,
}

impl<T> ValidationFailure<T> {
    pub(crate) fn new(outcome: ValidationOutcome, value: T) -> Self {
        debug_assert!(outcome.is_failure());
        Self { outcome, value }
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// The candidate value that was rejected.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn message(&self) -> &str {
        self.outcome.error_message().unwrap_or_default()
    }

    pub fn member_names(&self) -> &[String] {
        self.outcome.member_names()
    }

    pub fn into_parts(self) -> (ValidationOutcome, T) {
        (self.outcome, self.value)
    }
}
