//! Rule configuration errors and the error returned by throw-style validation.

use crate::message::Visibility;
use crate::rule::failure::ValidationFailure;
use thiserror::Error;

/// Programming or configuration errors surfaced by a rule.
///
/// These indicate a misconfigured rule or a misuse of the API, never a value
/// that failed validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("Rule has neither a predicate nor an evaluator. Call .predicate(f) or .evaluator(f)")]
    Unimplemented,

    #[error("A validation context is required but none was supplied")]
    MissingContext,

    #[error("Either an error message or a message resource may be set, not both")]
    AmbiguousMessageSource,

    #[error("Message resource '{resource_name}' has no resource type")]
    MissingResourceType { resource_name: String },

    #[error("Resource type '{type_name}' is set but no resource name was given")]
    MissingResourceName { type_name: String },

    #[error("Resource type '{type_name}' has no member named '{name}'")]
    ResourceNotFound { type_name: String, name: String },

    #[error("Member '{name}' on resource type '{type_name}' is not static")]
    ResourceNotStatic { type_name: String, name: String },

    #[error("Member '{name}' on resource type '{type_name}' is not public ({visibility:?})")]
    ResourceNotPublic {
        type_name: String,
        name: String,
        visibility: Visibility,
    },

    #[error("Member '{name}' on resource type '{type_name}' is not readable")]
    ResourceNotReadable { type_name: String, name: String },

    #[error("Member '{name}' on resource type '{type_name}' does not hold text")]
    ResourceNotText { type_name: String, name: String },

    #[error("Rule has no error message. Set an error message or a message resource")]
    MissingErrorMessage,

    #[error("Invalid message template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },
}

/// Error returned by the `validate` entry points.
#[derive(Debug, Error)]
pub enum ValidateError<T> {
    /// The rule itself is misconfigured or was misused
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The value failed validation
    #[error("{0}")]
    Failed(ValidationFailure<T>),
}

impl<T> ValidateError<T> {
    /// The validation failure, if this is one.
    pub fn failure(&self) -> Option<&ValidationFailure<T>> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Rule(_) => None,
        }
    }

    /// The configuration error, if this is one.
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            Self::Rule(error) => Some(error),
            Self::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationOutcome;
    use std::error::Error as _;

    fn check(fail: bool) -> Result<(), ValidateError<u8>> {
        if fail {
            Err::<(), _>(RuleError::MissingContext)?;
        }
        Err(ValidateError::Failed(ValidationFailure::new(
            ValidationOutcome::failure("Age is out of range"),
            200,
        )))
    }

    #[test]
    fn rule_errors_convert_and_display_transparently() {
        let error = check(true).unwrap_err();
        assert_eq!(error.rule_error(), Some(&RuleError::MissingContext));
        assert_eq!(error.to_string(), RuleError::MissingContext.to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn failed_values_display_their_message() {
        let error = check(false).unwrap_err();
        assert_eq!(error.to_string(), "Age is out of range");
        assert_eq!(error.failure().map(|f| *f.value()), Some(200));

        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert_eq!(boxed.to_string(), "Age is out of range");
    }
}
