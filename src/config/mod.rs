//! Loading rule message settings from configuration.
//!
//! Message templates are often kept outside the code that defines a rule.
//! [`MessageConfig`] is the serializable form of a rule's message settings,
//! and [`ResourceRegistry`] maps the resource type names it mentions to
//! registered [`MessageResources`].
//!
//! # Example
//!
//! ```rust
//! use annotate::config::{MessageConfig, ResourceRegistry};
//! use annotate::message::ResourceTable;
//! use annotate::rule::RuleBuilder;
//!
//! let registry = ResourceRegistry::new()
//!     .register(ResourceTable::new("Messages").public_static("Required", "{0} is required"));
//!
//! let config = MessageConfig::from_json(
//!     r#"{ "error_message_resource_name": "Required", "error_message_resource_type": "Messages" }"#,
//! )
//! .unwrap();
//!
//! let rule = RuleBuilder::new()
//!     .predicate(|value: &String| !value.is_empty())
//!     .with_config(&config, &registry)
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(rule.format_error_message("Email").unwrap(), "Email is required");
//! ```

pub mod error;

pub use error::ConfigError;

use crate::message::{MessageResources, ResourceType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Serializable message settings of a rule
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageConfig {
    /// Literal message template
    pub error_message: Option<String>,

    /// Member name looked up on the resource type
    pub error_message_resource_name: Option<String>,

    /// Registered name of the resource type
    pub error_message_resource_type: Option<String>,

    /// Whether the rule needs a full validation context
    pub requires_context: Option<bool>,
}

impl MessageConfig {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Resource types available to configuration, keyed by type name
#[derive(Clone, Default)]
pub struct ResourceRegistry {
    types: HashMap<String, Arc<dyn MessageResources>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register resources under their own type name
    pub fn register<R: MessageResources + 'static>(mut self, resources: R) -> Self {
        let name = resources.type_name().to_string();
        self.types.insert(name, Arc::new(resources));
        self
    }

    pub fn get(&self, type_name: &str) -> Option<ResourceType> {
        self.types.get(type_name).cloned().map(ResourceType::from_arc)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }
}
