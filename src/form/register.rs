use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::coerce::coerce_value;
use crate::markup::props::{PropValue, Props};

/// Prop key under which the binding travels on a control.
pub const REGISTRATION_KEY: &str = "data-register";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterOptions {
    /// Schema fragment used to coerce submitted values.
    pub shape: Option<Value>,
}

/// Handle binding a control to the form's tracked-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    #[serde(default)]
    pub shape: Option<Value>,
}

impl Registration {
    pub fn new(name: impl Into<String>, options: RegisterOptions) -> Self {
        Self {
            name: name.into(),
            shape: options.shape,
        }
    }

    /// Coerce a raw submitted value the way this field's shape asks.
    pub fn set_value_as(&self, raw: &str) -> Value {
        coerce_value(raw, self.shape.as_ref())
    }

    /// Props a bound control carries: its `name` and the binding itself.
    pub fn props(&self) -> Props {
        Props::new()
            .with("name", self.name.as_str())
            .with(REGISTRATION_KEY, PropValue::Registration(self.clone()))
    }
}

/// Change-registration: binds a field name to the form's value store.
pub trait Register {
    fn register(&self, name: &str, options: RegisterOptions) -> Option<Registration>;
}

impl<T: Register + ?Sized> Register for &T {
    fn register(&self, name: &str, options: RegisterOptions) -> Option<Registration> {
        (**self).register(name, options)
    }
}

impl<T: Register + ?Sized> Register for Arc<T> {
    fn register(&self, name: &str, options: RegisterOptions) -> Option<Registration> {
        (**self).register(name, options)
    }
}

/// Adapts a plain registration function.
pub struct RegisterFn<F>(pub F);

impl<F> Register for RegisterFn<F>
where
    F: Fn(&str, RegisterOptions) -> Option<Registration>,
{
    fn register(&self, name: &str, options: RegisterOptions) -> Option<Registration> {
        (self.0)(name, options)
    }
}
