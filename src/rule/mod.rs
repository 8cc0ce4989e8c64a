//! Validation rules: evaluator dispatch and the public entry points.
//!
//! A rule is built from at most two evaluation forms:
//!
//! - a **predicate** `Fn(&T) -> bool` that only sees the value
//! - an **evaluator** `Fn(&T, &ValidationContext) -> ValidationOutcome` that
//!   may inspect the context and supply its own message
//!
//! The form is resolved once when the rule is built. The evaluator always
//! wins over the predicate; a rule with neither is a programming error that
//! every entry point reports as [`RuleError::Unimplemented`].
//!
//! # Example
//!
//! ```rust
//! use annotate::rule::{RuleBuilder, ValidateError};
//!
//! let rule = RuleBuilder::new()
//!     .predicate(|value: &String| !value.trim().is_empty())
//!     .error_message("{0} must not be blank")
//!     .build();
//!
//! assert!(rule.validate(&"Ada".to_string(), "Name").is_ok());
//!
//! match rule.validate(&"  ".to_string(), "Name") {
//!     Err(ValidateError::Failed(failure)) => {
//!         assert_eq!(failure.message(), "Name must not be blank");
//!         assert_eq!(failure.value(), "  ");
//!     }
//!     other => panic!("expected a validation failure, got {other:?}"),
//! }
//! ```

pub mod builder;
pub mod error;
pub mod failure;

pub use builder::RuleBuilder;
pub use error::{RuleError, ValidateError};
pub use failure::ValidationFailure;

use crate::core::{ValidationContext, ValidationOutcome};
use crate::message::{default_error_message, ErrorMessageTemplate, ResourceType};

/// Form A: context-free predicate.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Form B: context-aware evaluator.
pub type Evaluator<T> =
    Box<dyn for<'a> Fn(&T, &ValidationContext<'a>) -> ValidationOutcome + Send + Sync>;

/// Evaluation form a rule resolved to when it was built.
pub enum Dispatch<T> {
    OneArg(Predicate<T>),
    TwoArg(Evaluator<T>),
    Unimplemented,
}

impl<T> Dispatch<T> {
    /// Resolve the supplied forms, preferring the evaluator.
    pub fn resolve(predicate: Option<Predicate<T>>, evaluator: Option<Evaluator<T>>) -> Self {
        match (evaluator, predicate) {
            (Some(evaluator), _) => Dispatch::TwoArg(evaluator),
            (None, Some(predicate)) => Dispatch::OneArg(predicate),
            (None, None) => Dispatch::Unimplemented,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Dispatch::OneArg(_) => "predicate",
            Dispatch::TwoArg(_) => "evaluator",
            Dispatch::Unimplemented => "unimplemented",
        }
    }
}

/// A single validation rule over values of type `T`.
///
/// Rules are configured before use and never mutated by evaluation, so a
/// shared `&ValidationRule<T>` may be evaluated from several threads.
pub struct ValidationRule<T> {
    dispatch: Dispatch<T>,
    message: ErrorMessageTemplate,
    requires_validation_context: bool,
}

impl<T> ValidationRule<T> {
    pub(crate) fn from_parts(
        dispatch: Dispatch<T>,
        message: ErrorMessageTemplate,
        requires_validation_context: bool,
    ) -> Self {
        Self {
            dispatch,
            message,
            requires_validation_context,
        }
    }

    /// Whether evaluation depends on a full validation context.
    pub fn requires_validation_context(&self) -> bool {
        self.requires_validation_context
    }

    pub fn dispatch(&self) -> &Dispatch<T> {
        &self.dispatch
    }

    pub fn error_message(&self) -> Option<&str> {
        self.message.error_message()
    }

    pub fn set_error_message<S: Into<String>>(&mut self, message: Option<S>) {
        self.message.set_error_message(message);
    }

    pub fn error_message_resource_name(&self) -> Option<&str> {
        self.message.resource_name()
    }

    pub fn set_error_message_resource_name<S: Into<String>>(&mut self, name: Option<S>) {
        self.message.set_resource_name(name);
    }

    pub fn error_message_resource_type(&self) -> Option<&ResourceType> {
        self.message.resource_type()
    }

    pub fn set_error_message_resource_type(&mut self, resource_type: Option<ResourceType>) {
        self.message.set_resource_type(resource_type);
    }

    /// Resolve the configured template and substitute `name` for `{0}`.
    pub fn format_error_message(&self, name: &str) -> Result<String, RuleError> {
        self.message.format(name)
    }

    /// Check a value without any context.
    ///
    /// An evaluator-based rule is given an empty context.
    pub fn is_valid(&self, value: &T) -> Result<bool, RuleError> {
        match &self.dispatch {
            Dispatch::OneArg(predicate) => Ok(predicate(value)),
            Dispatch::TwoArg(evaluator) => {
                Ok(evaluator(value, &ValidationContext::default()).is_success())
            }
            Dispatch::Unimplemented => Err(RuleError::Unimplemented),
        }
    }

    /// Evaluate the rule, returning the evaluator's outcome verbatim.
    ///
    /// A failing predicate yields a failure whose message is the formatted
    /// template and whose member names hold the context's member, if any.
    pub fn evaluate(
        &self,
        value: &T,
        context: &ValidationContext<'_>,
    ) -> Result<ValidationOutcome, RuleError> {
        match &self.dispatch {
            Dispatch::TwoArg(evaluator) => Ok(evaluator(value, context)),
            Dispatch::OneArg(predicate) => {
                if predicate(value) {
                    return Ok(ValidationOutcome::Success);
                }
                let message = self.failure_message(context.display_name())?;
                Ok(ValidationOutcome::Failure {
                    message: Some(message),
                    member_names: context
                        .member_name()
                        .map(str::to_string)
                        .into_iter()
                        .collect(),
                })
            }
            Dispatch::Unimplemented => {
                tracing::debug!("evaluated a rule with no predicate or evaluator");
                Err(RuleError::Unimplemented)
            }
        }
    }

    /// Evaluate the rule for callers that aggregate outcomes.
    ///
    /// Never reports a failing value as an error. Failures always carry a
    /// non-empty message.
    pub fn get_validation_result(
        &self,
        value: &T,
        context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationOutcome, RuleError> {
        let context = context.ok_or(RuleError::MissingContext)?;
        let outcome = self.evaluate(value, context)?;
        Ok(self.ensure_message(outcome, context.display_name()))
    }

    /// Validate an ad-hoc value identified only by a display name.
    pub fn validate(&self, value: &T, name: &str) -> Result<(), ValidateError<T>>
    where
        T: Clone,
    {
        let context = ValidationContext::for_display_name(name);
        self.validate_with_context(value, Some(&context))
    }

    /// Validate a value, converting a failure into [`ValidateError::Failed`].
    pub fn validate_with_context(
        &self,
        value: &T,
        context: Option<&ValidationContext<'_>>,
    ) -> Result<(), ValidateError<T>>
    where
        T: Clone,
    {
        match self.get_validation_result(value, context)? {
            ValidationOutcome::Success => Ok(()),
            outcome => Err(ValidateError::Failed(ValidationFailure::new(
                outcome,
                value.clone(),
            ))),
        }
    }

    /// Formatted message for a failed value, never empty.
    fn failure_message(&self, name: &str) -> Result<String, RuleError> {
        let message = self.format_error_message(name)?;
        if message.is_empty() {
            tracing::warn!(name, "error message template produced empty text");
            return Ok(default_error_message(name));
        }
        Ok(message)
    }

    fn ensure_message(&self, outcome: ValidationOutcome, name: &str) -> ValidationOutcome {
        if !outcome.lacks_message() {
            return outcome;
        }

        let message = self.failure_message(name).unwrap_or_else(|error| {
            tracing::warn!(%error, name, "falling back to generic validation message");
            default_error_message(name)
        });

        ValidationOutcome::Failure {
            message: Some(message),
            member_names: outcome.member_names().to_vec(),
        }
    }
}
