//! Rule sets that accumulate every failure for one member.
//!
//! A [`RuleSet`] runs all of its rules against the same value and collects
//! every failure with Stillwater's `Validation`, instead of stopping at the
//! first one. Configuration errors still abort immediately: a misconfigured
//! rule is a bug, not a validation result.
//!
//! # Example
//!
//! ```rust
//! use annotate::core::ValidationContext;
//! use annotate::rule::RuleBuilder;
//! use annotate::ruleset::RuleSet;
//! use stillwater::validation::Validation;
//!
//! let rules = RuleSet::new()
//!     .with_rule(
//!         RuleBuilder::new()
//!             .predicate(|name: &String| !name.is_empty())
//!             .error_message("{0} is required")
//!             .build(),
//!     )
//!     .with_rule(
//!         RuleBuilder::new()
//!             .predicate(|name: &String| name.len() <= 3)
//!             .error_message("{0} is too long")
//!             .build(),
//!     );
//!
//! let context = ValidationContext::for_display_name("Code");
//! match rules.validate_all(&"ABCD".to_string(), &context).unwrap() {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 1),
//!     Validation::Success(_) => panic!("expected a failure"),
//! }
//! ```

use crate::core::{ValidationContext, ValidationOutcome};
use crate::rule::{RuleError, ValidationRule};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Accumulated result of running a rule set.
pub type RuleSetResult = Validation<(), NonEmptyVec<ValidationOutcome>>;

/// Ordered rules applied to a single member.
pub struct RuleSet<T> {
    rules: Vec<ValidationRule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: ValidationRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: ValidationRule<T>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True if any rule needs a full validation context.
    pub fn requires_validation_context(&self) -> bool {
        self.rules.iter().any(ValidationRule::requires_validation_context)
    }

    /// Run every rule, accumulating ALL failures.
    ///
    /// Returns `Validation::Success(())` if all rules pass, otherwise a
    /// `Validation::Failure` holding each failing outcome in rule order.
    pub fn validate_all(
        &self,
        value: &T,
        context: &ValidationContext<'_>,
    ) -> Result<RuleSetResult, RuleError> {
        let mut checks: Vec<RuleSetResult> = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let check = match rule.get_validation_result(value, Some(context))? {
                ValidationOutcome::Success => Validation::success(()),
                failure => Validation::fail(failure),
            };
            checks.push(check);
        }

        let result = Validation::all_vec(checks).map(|_| ());
        if let Validation::Failure(errors) = &result {
            tracing::debug!(
                member = context.display_name(),
                failures = errors.len(),
                "rule set rejected value"
            );
        }
        Ok(result)
    }

    /// Run every rule against an ad-hoc value identified by a display name.
    pub fn validate_value(&self, value: &T, name: &str) -> Result<RuleSetResult, RuleError> {
        self.validate_all(value, &ValidationContext::for_display_name(name))
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
