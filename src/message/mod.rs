//! Error-message resolution for validation rules.
//!
//! A rule's message comes from exactly one of two sources:
//!
//! - a literal template set with `error_message`
//! - a resource reference: a member name looked up on a [`ResourceType`]
//!
//! The resolved template is a composite format string in which `{0}` is
//! replaced by the display name of the member being validated. `{{` and `}}`
//! produce literal braces.
//!
//! # Example
//!
//! ```rust
//! use annotate::message::{ErrorMessageTemplate, ResourceTable, ResourceType};
//!
//! let mut template = ErrorMessageTemplate::default();
//! template.set_error_message(Some("{0} is required"));
//! assert_eq!(template.format("Email").unwrap(), "Email is required");
//!
//! let mut template = ErrorMessageTemplate::default();
//! template.set_resource_name(Some("TooShort"));
//! template.set_resource_type(Some(ResourceType::new(
//!     ResourceTable::new("Messages").public_static("TooShort", "{0} is too short"),
//! )));
//! assert_eq!(template.format("Password").unwrap(), "Password is too short");
//! ```

mod resources;

pub use resources::{MessageResources, ResourceTable, ResourceType, StaticMember, Visibility};

use crate::rule::RuleError;
use serde_json::Value;

/// Template used by a rule whose message was never configured.
pub const DEFAULT_ERROR_MESSAGE: &str = "The field {0} is invalid.";

/// Built-in message when there is no name to put in the default template.
pub const UNNAMED_ERROR_MESSAGE: &str = "The value is invalid.";

/// Built-in message for `name`, never empty.
pub fn default_error_message(name: &str) -> String {
    if name.is_empty() {
        UNNAMED_ERROR_MESSAGE.to_string()
    } else {
        DEFAULT_ERROR_MESSAGE.replace("{0}", name)
    }
}

/// Message configuration of a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessageTemplate {
    error_message: Option<String>,
    resource_name: Option<String>,
    resource_type: Option<ResourceType>,
    use_default: bool,
}

impl Default for ErrorMessageTemplate {
    fn default() -> Self {
        Self {
            error_message: None,
            resource_name: None,
            resource_type: None,
            use_default: true,
        }
    }
}

impl ErrorMessageTemplate {
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Set the literal template.
    ///
    /// Any explicit assignment replaces the built-in default, so clearing the
    /// message leaves the rule without a literal template.
    pub fn set_error_message<S: Into<String>>(&mut self, message: Option<S>) {
        self.error_message = message.map(Into::into);
        self.use_default = false;
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn set_resource_name<S: Into<String>>(&mut self, name: Option<S>) {
        self.resource_name = name.map(Into::into);
    }

    pub fn resource_type(&self) -> Option<&ResourceType> {
        self.resource_type.as_ref()
    }

    pub fn set_resource_type(&mut self, resource_type: Option<ResourceType>) {
        self.resource_type = resource_type;
    }

    /// Resolve the template and substitute `name` for `{0}`.
    pub fn format(&self, name: &str) -> Result<String, RuleError> {
        let template = self.resolve()?;
        if self.uses_default() {
            return Ok(default_error_message(name));
        }
        format_template(&template, name)
    }

    fn uses_default(&self) -> bool {
        self.use_default
            && non_empty(self.resource_name.as_deref()).is_none()
            && self.resource_type.is_none()
    }

    /// Resolve the raw template without substitution.
    pub fn resolve(&self) -> Result<String, RuleError> {
        let literal = non_empty(self.error_message.as_deref());
        let resource_name = non_empty(self.resource_name.as_deref());

        if literal.is_some() && (resource_name.is_some() || self.resource_type.is_some()) {
            tracing::debug!(
                resource_name = ?self.resource_name,
                "error message and message resource both configured"
            );
            return Err(RuleError::AmbiguousMessageSource);
        }

        if resource_name.is_some() || self.resource_type.is_some() {
            return self.resolve_resource(resource_name);
        }

        literal
            .or(self.use_default.then_some(DEFAULT_ERROR_MESSAGE))
            .map(str::to_string)
            .ok_or(RuleError::MissingErrorMessage)
    }

    fn resolve_resource(&self, resource_name: Option<&str>) -> Result<String, RuleError> {
        let resource_type = self.resource_type.as_ref().ok_or_else(|| {
            RuleError::MissingResourceType {
                resource_name: resource_name.unwrap_or_default().to_string(),
            }
        })?;
        let type_name = resource_type.type_name().to_string();
        let name = resource_name.ok_or_else(|| RuleError::MissingResourceName {
            type_name: type_name.clone(),
        })?;

        let member = resource_type.lookup_static_member(name).ok_or_else(|| {
            RuleError::ResourceNotFound {
                type_name: type_name.clone(),
                name: name.to_string(),
            }
        })?;

        if !member.is_static {
            return Err(RuleError::ResourceNotStatic {
                type_name,
                name: name.to_string(),
            });
        }
        if member.visibility != Visibility::Public {
            return Err(RuleError::ResourceNotPublic {
                type_name,
                name: name.to_string(),
                visibility: member.visibility,
            });
        }
        if !member.readable {
            return Err(RuleError::ResourceNotReadable {
                type_name,
                name: name.to_string(),
            });
        }

        match member.value {
            Some(Value::String(text)) => Ok(text),
            _ => Err(RuleError::ResourceNotText {
                type_name,
                name: name.to_string(),
            }),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Substitute `name` for every `{0}` in a composite format template.
///
/// A template without placeholders is returned unchanged.
pub fn format_template(template: &str, name: &str) -> Result<String, RuleError> {
    let invalid = |reason: &str| RuleError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    };

    let mut out = String::with_capacity(template.len() + name.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut index = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => index.push(c),
                        None => return Err(invalid("unterminated placeholder")),
                    }
                }
                if index.trim() != "0" {
                    return Err(invalid("only placeholder {0} is supported"));
                }
                out.push_str(name);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(invalid("unmatched closing brace")),
            c => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> ResourceType {
        ResourceType::new(
            ResourceTable::new("TestResources")
                .public_static("Plain", "Error Message from Plain")
                .public_static("WithName", "Error Message With Name <{0}>")
                .static_member("Internal", Visibility::Internal, "ErrorMessage")
                .static_member("Private", Visibility::Private, "ErrorMessage")
                .static_member("Protected", Visibility::Protected, "ErrorMessage")
                .static_member(
                    "ProtectedInternal",
                    Visibility::ProtectedInternal,
                    "ErrorMessage",
                )
                .member(
                    "Instance",
                    StaticMember {
                        is_static: false,
                        ..StaticMember::public_text("instance")
                    },
                )
                .member(
                    "WriteOnly",
                    StaticMember {
                        readable: false,
                        value: None,
                        ..StaticMember::public_text("")
                    },
                )
                .member(
                    "Number",
                    StaticMember {
                        value: Some(Value::from(42)),
                        ..StaticMember::public_text("")
                    },
                ),
        )
    }

    fn resource_template(
        name: Option<&str>,
        resource_type: Option<ResourceType>,
    ) -> ErrorMessageTemplate {
        let mut template = ErrorMessageTemplate::default();
        template.set_error_message(Some(""));
        template.set_resource_name(name);
        template.set_resource_type(resource_type);
        template
    }

    #[test]
    fn default_template_names_the_field() {
        let template = ErrorMessageTemplate::default();
        assert_eq!(template.error_message(), None);
        assert_eq!(template.format("Age").unwrap(), "The field Age is invalid.");
    }

    #[test]
    fn default_template_without_name_reads_cleanly() {
        let template = ErrorMessageTemplate::default();
        assert_eq!(template.format("").unwrap(), "The value is invalid.");
        assert_eq!(default_error_message(""), UNNAMED_ERROR_MESSAGE);
        assert_eq!(default_error_message("Age"), "The field Age is invalid.");
    }

    #[test]
    fn literal_message_is_formatted() {
        let mut template = ErrorMessageTemplate::default();
        template.set_error_message(Some("SomeErrorMessage with name <{0}>"));
        assert_eq!(
            template.format("name").unwrap(),
            "SomeErrorMessage with name <name>"
        );
    }

    #[test]
    fn literal_without_placeholder_ignores_name() {
        let mut template = ErrorMessageTemplate::default();
        template.set_error_message(Some("msg"));
        assert_eq!(template.format("n").unwrap(), "msg");
    }

    #[test]
    fn cleared_message_without_resource_is_an_error() {
        for value in [None, Some("")] {
            let mut template = ErrorMessageTemplate::default();
            template.set_error_message(value);
            template.set_resource_name(value);
            assert_eq!(template.format("name"), Err(RuleError::MissingErrorMessage));
        }
    }

    #[test]
    fn message_and_resource_name_are_ambiguous() {
        let mut template = ErrorMessageTemplate::default();
        template.set_error_message(Some("SomeErrorMessage"));
        template.set_resource_name(Some("Plain"));
        template.set_resource_type(Some(resources()));
        assert_eq!(template.format("x"), Err(RuleError::AmbiguousMessageSource));
    }

    #[test]
    fn message_and_resource_type_are_ambiguous() {
        let mut template = ErrorMessageTemplate::default();
        template.set_error_message(Some("SomeErrorMessage"));
        template.set_resource_type(Some(resources()));
        assert_eq!(template.format("x"), Err(RuleError::AmbiguousMessageSource));
    }

    #[test]
    fn ambiguity_is_reported_before_failed_lookup() {
        let mut template = ErrorMessageTemplate::default();
        template.set_error_message(Some("SomeErrorMessage"));
        template.set_resource_name(Some("NoSuchMember"));
        assert_eq!(template.format("x"), Err(RuleError::AmbiguousMessageSource));
    }

    #[test]
    fn public_static_resources_resolve() {
        let template = resource_template(Some("Plain"), Some(resources()));
        assert_eq!(template.format("name").unwrap(), "Error Message from Plain");

        let template = resource_template(Some("WithName"), Some(resources()));
        assert_eq!(
            template.format("name").unwrap(),
            "Error Message With Name <name>"
        );
    }

    #[test]
    fn resource_name_without_type_fails() {
        let template = resource_template(Some("Plain"), None);
        assert!(matches!(
            template.format("x"),
            Err(RuleError::MissingResourceType { .. })
        ));
    }

    #[test]
    fn resource_type_without_name_fails() {
        for name in [None, Some("")] {
            let template = resource_template(name, Some(resources()));
            assert!(matches!(
                template.format("x"),
                Err(RuleError::MissingResourceName { .. })
            ));
        }
    }

    #[test]
    fn unusable_members_are_configuration_errors() {
        let cases = [
            "NoSuchMember",
            "Internal",
            "Private",
            "Protected",
            "ProtectedInternal",
            "Instance",
            "WriteOnly",
            "Number",
        ];

        for name in cases {
            let template = resource_template(Some(name), Some(resources()));
            assert!(template.format("x").is_err(), "member {name} should be rejected");
        }
    }

    #[test]
    fn member_errors_identify_the_problem() {
        let check = |name: &str| resource_template(Some(name), Some(resources())).format("x");

        assert!(matches!(check("Missing"), Err(RuleError::ResourceNotFound { .. })));
        assert!(matches!(check("Instance"), Err(RuleError::ResourceNotStatic { .. })));
        assert!(matches!(
            check("Private"),
            Err(RuleError::ResourceNotPublic {
                visibility: Visibility::Private,
                ..
            })
        ));
        assert!(matches!(check("WriteOnly"), Err(RuleError::ResourceNotReadable { .. })));
        assert!(matches!(check("Number"), Err(RuleError::ResourceNotText { .. })));
    }

    #[test]
    fn format_replaces_every_placeholder() {
        assert_eq!(format_template("{0} and {0}", "x").unwrap(), "x and x");
        assert_eq!(format_template("msg {0}", "n").unwrap(), "msg n");
        assert_eq!(format_template("", "n").unwrap(), "");
    }

    #[test]
    fn format_unescapes_braces() {
        assert_eq!(format_template("{{{0}}}", "x").unwrap(), "{x}");
        assert_eq!(format_template("{{0}}", "x").unwrap(), "{0}");
    }

    #[test]
    fn format_rejects_malformed_templates() {
        for template in ["{1}", "{name}", "{0", "oops }", "{}"] {
            assert!(
                matches!(
                    format_template(template, "x"),
                    Err(RuleError::InvalidTemplate { .. })
                ),
                "template {template:?} should be rejected"
            );
        }
    }
}
