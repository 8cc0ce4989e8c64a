//! Annotate: an extensible validation rule primitive
//!
//! Annotate lets a caller attach a rule to a data member or an ad-hoc value,
//! evaluate it, and turn a failure into a human-readable message. Concrete
//! checks are supplied as closures; the crate owns the protocol around them:
//! which evaluation form runs, how the error message is resolved, and which
//! misconfigurations are reported as errors rather than validation failures.
//!
//! # Core Concepts
//!
//! - **Outcome**: `ValidationOutcome`, success or a failure with a message
//! - **Context**: `ValidationContext`, the object and member under validation
//! - **Rule**: `ValidationRule`, a predicate or evaluator plus its message template
//! - **Resources**: `MessageResources`, named message templates looked up by type
//!
//! # Example
//!
//! ```rust
//! use annotate::{RuleBuilder, ValidateError, ValidationContext, ValidationOutcome};
//!
//! struct Signup {
//!     password: String,
//!     confirmation: String,
//! }
//!
//! let matches_password = RuleBuilder::new()
//!     .evaluator(|value: &String, ctx: &ValidationContext<'_>| {
//!         match ctx.instance_as::<Signup>() {
//!             Some(signup) if signup.password == *value => ValidationOutcome::Success,
//!             _ => ValidationOutcome::failure_for("Passwords do not match", ["Confirmation"]),
//!         }
//!     })
//!     .requires_context(true)
//!     .build();
//!
//! let signup = Signup {
//!     password: "hunter2".to_string(),
//!     confirmation: "hunter3".to_string(),
//! };
//! let context = ValidationContext::new(&signup).with_member_name("Confirmation");
//!
//! let outcome = matches_password
//!     .get_validation_result(&signup.confirmation, Some(&context))
//!     .unwrap();
//! assert_eq!(outcome.error_message(), Some("Passwords do not match"));
//!
//! let required = RuleBuilder::new()
//!     .predicate(|value: &String| !value.is_empty())
//!     .error_message("{0} is required")
//!     .build();
//!
//! match required.validate(&String::new(), "Email") {
//!     Err(ValidateError::Failed(failure)) => assert_eq!(failure.message(), "Email is required"),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

pub mod config;
pub mod core;
pub mod message;
pub mod rule;
pub mod ruleset;

// Re-export commonly used types
pub use crate::core::{ValidationContext, ValidationOutcome};
pub use message::{MessageResources, ResourceTable, ResourceType};
pub use rule::{RuleBuilder, RuleError, ValidateError, ValidationFailure, ValidationRule};
pub use ruleset::RuleSet;
