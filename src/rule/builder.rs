//! Builder API for creating validation rules.

use crate::config::{ConfigError, MessageConfig, ResourceRegistry};
use crate::core::{ValidationContext, ValidationOutcome};
use crate::message::{ErrorMessageTemplate, ResourceType};
use crate::rule::{Dispatch, Evaluator, Predicate, ValidationRule};

/// Builder for creating validation rules
pub struct RuleBuilder<T> {
    predicate: Option<Predicate<T>>,
    evaluator: Option<Evaluator<T>>,
    message: ErrorMessageTemplate,
    requires_context: bool,
}

impl<T> RuleBuilder<T> {
    pub fn new() -> Self {
        Self {
            predicate: None,
            evaluator: None,
            message: ErrorMessageTemplate::default(),
            requires_context: false,
        }
    }

    /// Set the context-free predicate
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Set the context-aware evaluator. Takes precedence over the predicate.
    pub fn evaluator<F>(mut self, evaluator: F) -> Self
    where
        F: Fn(&T, &ValidationContext<'_>) -> ValidationOutcome + Send + Sync + 'static,
    {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    /// Set the literal message template
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.message.set_error_message(Some(message));
        self
    }

    /// Resolve the message from a member of a resource type
    pub fn error_message_resource(
        mut self,
        resource_type: ResourceType,
        name: impl Into<String>,
    ) -> Self {
        self.message.set_resource_type(Some(resource_type));
        self.message.set_resource_name(Some(name));
        self
    }

    /// Declare that the evaluator depends on a full validation context
    pub fn requires_context(mut self, requires: bool) -> Self {
        self.requires_context = requires;
        self
    }

    /// Apply message settings loaded from configuration.
    ///
    /// Only the fields present in `config` are applied; resource type names
    /// are looked up in `registry`.
    pub fn with_config(
        mut self,
        config: &MessageConfig,
        registry: &ResourceRegistry,
    ) -> Result<Self, ConfigError> {
        if let Some(message) = &config.error_message {
            self.message.set_error_message(Some(message.as_str()));
        }
        if let Some(name) = &config.error_message_resource_name {
            self.message.set_resource_name(Some(name.as_str()));
        }
        if let Some(type_name) = &config.error_message_resource_type {
            let resource_type = registry.get(type_name).ok_or_else(|| {
                ConfigError::UnknownResourceType {
                    type_name: type_name.clone(),
                }
            })?;
            self.message.set_resource_type(Some(resource_type));
        }
        if let Some(requires) = config.requires_context {
            self.requires_context = requires;
        }
        Ok(self)
    }

    /// Build the validation rule
    pub fn build(self) -> ValidationRule<T> {
        let dispatch = Dispatch::resolve(self.predicate, self.evaluator);
        tracing::debug!(dispatch = dispatch.kind(), "built validation rule");
        ValidationRule::from_parts(dispatch, self.message, self.requires_context)
    }
}

impl<T> Default for RuleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
