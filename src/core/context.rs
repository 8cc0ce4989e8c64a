//! Context provided to context-aware rule evaluation.

use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Describes the object and member currently being validated.
///
/// The context borrows the instance for the duration of one validation call.
/// Rules never keep a reference to it.
///
/// # Example
///
/// ```rust
/// use annotate::core::ValidationContext;
///
/// struct Order {
///     quantity: u32,
/// }
///
/// let order = Order { quantity: 3 };
/// let context = ValidationContext::new(&order).with_member_name("Quantity");
///
/// assert_eq!(context.member_name(), Some("Quantity"));
/// assert_eq!(context.display_name(), "Quantity");
/// assert_eq!(context.instance_as::<Order>().map(|o| o.quantity), Some(3));
/// ```
#[derive(Clone, Default)]
pub struct ValidationContext<'a> {
    instance: Option<&'a dyn Any>,
    member_name: Option<String>,
    display_name: Option<String>,
    items: HashMap<String, Value>,
}

impl<'a> ValidationContext<'a> {
    /// Context for validating a member of `instance`.
    pub fn new(instance: &'a dyn Any) -> Self {
        Self {
            instance: Some(instance),
            ..Self::default()
        }
    }

    /// Minimal context carrying only a display name.
    ///
    /// Used when a caller validates an ad-hoc value by name; there is no
    /// instance and no member to attribute failures to.
    pub fn for_display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_member_name(mut self, name: impl Into<String>) -> Self {
        self.member_name = Some(name.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Attach a caller-defined value rules may consult.
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    pub fn instance(&self) -> Option<&'a dyn Any> {
        self.instance
    }

    /// Downcast the instance under validation.
    pub fn instance_as<T: Any>(&self) -> Option<&'a T> {
        self.instance.and_then(|instance| instance.downcast_ref::<T>())
    }

    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    /// Name used in error messages.
    ///
    /// Falls back to the member name, then to an empty string.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.member_name.as_deref())
            .unwrap_or("")
    }

    pub fn item(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    pub fn items(&self) -> &HashMap<String, Value> {
        &self.items
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("has_instance", &self.instance.is_some())
            .field("member_name", &self.member_name)
            .field("display_name", &self.display_name)
            .field("items", &self.items)
            .finish()
    }
}
