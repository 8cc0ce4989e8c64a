//! Outcome of a single rule evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one rule against one value.
///
/// `Success` is a distinguished variant, never a failure with no message.
///
/// # Example
///
/// ```rust
/// use annotate::core::ValidationOutcome;
///
/// let ok = ValidationOutcome::Success;
/// assert!(ok.is_success());
///
/// let failed = ValidationOutcome::failure_for("Name is required", ["Name"]);
/// assert_eq!(failed.error_message(), Some("Name is required"));
/// assert_eq!(failed.member_names(), ["Name".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The value satisfied the rule
    Success,

    /// The value violated the rule
    Failure {
        message: Option<String>,
        member_names: Vec<String>,
    },
}

impl ValidationOutcome {
    /// Failure with a message and no member names.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
            member_names: Vec::new(),
        }
    }

    /// Failure with a message attributed to the given members.
    pub fn failure_for<I, N>(message: impl Into<String>, member_names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::Failure {
            message: Some(message.into()),
            member_names: member_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Failure that leaves the message to the caller.
    ///
    /// Entry points that hand outcomes back to callers replace the missing
    /// message before returning it.
    pub fn failure_without_message() -> Self {
        Self::Failure {
            message: None,
            member_names: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Message of a failure, `None` for success or a failure without text.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message, .. } => message.as_deref(),
        }
    }

    /// Members a failure is attributed to, empty for success.
    pub fn member_names(&self) -> &[String] {
        match self {
            Self::Success => &[],
            Self::Failure { member_names, .. } => member_names,
        }
    }

    /// True for a failure whose message is missing or empty.
    pub(crate) fn lacks_message(&self) -> bool {
        match self {
            Self::Success => false,
            Self::Failure { message, .. } => message.as_deref().map_or(true, str::is_empty),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure { message, .. } => f.write_str(message.as_deref().unwrap_or("")),
        }
    }
}
