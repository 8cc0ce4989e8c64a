//! Static-member lookup used to resolve message templates by name.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Accessibility of a static member on a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    Private,
}

/// Description of a named member as reported by a resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMember {
    pub visibility: Visibility,
    pub is_static: bool,
    pub readable: bool,
    /// Current value; `None` when the member cannot be read.
    pub value: Option<Value>,
}

impl StaticMember {
    /// Public, static, readable text member.
    pub fn public_text(value: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: true,
            readable: true,
            value: Some(Value::String(value.into())),
        }
    }
}

/// Host capability that answers "does this type expose a member named X?".
///
/// Message resolution never needs more than this narrow lookup. Implementors
/// must report members declared on the type itself and perform no side effects.
pub trait MessageResources: Send + Sync {
    /// Identifier of the type, used for diagnostics and equality.
    fn type_name(&self) -> &str;

    /// Look up a member by exact name.
    fn lookup_static_member(&self, name: &str) -> Option<StaticMember>;
}

/// Shared reference to a resource type, stored on a rule.
#[derive(Clone)]
pub struct ResourceType(Arc<dyn MessageResources>);

impl ResourceType {
    pub fn new<R: MessageResources + 'static>(resources: R) -> Self {
        Self(Arc::new(resources))
    }

    pub fn from_arc(resources: Arc<dyn MessageResources>) -> Self {
        Self(resources)
    }

    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    pub fn lookup_static_member(&self, name: &str) -> Option<StaticMember> {
        self.0.lookup_static_member(name)
    }
}

/// Two handles are equal only when they share the same resource table.
///
/// Tables that merely carry the same type name are distinct.
impl PartialEq for ResourceType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceType").field(&self.type_name()).finish()
    }
}

/// In-memory resource type built member by member.
///
/// # Example
///
/// ```rust
/// use annotate::message::{MessageResources, ResourceTable, Visibility};
///
/// let table = ResourceTable::new("OrderMessages")
///     .public_static("QuantityTooLow", "{0} must be at least one")
///     .static_member("Hidden", Visibility::Private, "not visible");
///
/// assert_eq!(table.type_name(), "OrderMessages");
/// assert!(table.lookup_static_member("QuantityTooLow").is_some());
/// assert!(table.lookup_static_member("Unknown").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    name: String,
    members: HashMap<String, StaticMember>,
}

impl ResourceTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: HashMap::new(),
        }
    }

    /// Add a public, static, readable text member
    pub fn public_static(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.member(name, StaticMember::public_text(value))
    }

    /// Add a static, readable text member with the given visibility
    pub fn static_member(
        self,
        name: impl Into<String>,
        visibility: Visibility,
        value: impl Into<String>,
    ) -> Self {
        self.member(
            name,
            StaticMember {
                visibility,
                ..StaticMember::public_text(value)
            },
        )
    }

    /// Add a member with full control over its shape
    pub fn member(mut self, name: impl Into<String>, member: StaticMember) -> Self {
        self.members.insert(name.into(), member);
        self
    }
}

impl MessageResources for ResourceTable {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn lookup_static_member(&self, name: &str) -> Option<StaticMember> {
        self.members.get(name).cloned()
    }
}
