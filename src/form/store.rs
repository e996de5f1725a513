use std::collections::BTreeMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::FieldError;
use crate::form::register::{Register, RegisterOptions, Registration};

/// In-memory tracked-value store for a form, keyed by field name.
#[derive(Debug, Default)]
pub struct FormStore {
    fields: RwLock<BTreeMap<String, TrackedField>>,
}

#[derive(Debug, Clone, Default)]
struct TrackedField {
    registration: Option<Registration>,
    value: Option<Value>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.fields
            .read()
            .map(|f| f.get(name).is_some_and(|t| t.registration.is_some()))
            .unwrap_or(false)
    }

    /// Coerce `raw` through the field's registration and store it.
    pub fn set_raw(&self, name: &str, raw: &str) -> Result<Value, FieldError> {
        let mut fields = self
            .fields
            .write()
            .map_err(|e| FieldError::StorePoisoned(e.to_string()))?;

        let tracked = fields
            .get_mut(name)
            .filter(|t| t.registration.is_some())
            .ok_or_else(|| FieldError::UnregisteredField(name.to_string()))?;

        let value = match &tracked.registration {
            Some(reg) => reg.set_value_as(raw),
            None => return Err(FieldError::UnregisteredField(name.to_string())),
        };
        tracked.value = Some(value.clone());
        Ok(value)
    }

    pub fn value(&self, name: &str) -> Option<Value> {
        self.fields
            .read()
            .ok()
            .and_then(|f| f.get(name).and_then(|t| t.value.clone()))
    }

    /// Snapshot of every stored value.
    pub fn values(&self) -> BTreeMap<String, Value> {
        match self.fields.read() {
            Ok(f) => f
                .iter()
                .filter_map(|(k, t)| t.value.clone().map(|v| (k.clone(), v)))
                .collect(),
            Err(_) => BTreeMap::new(),
        }
    }
}

impl Register for FormStore {
    fn register(&self, name: &str, options: RegisterOptions) -> Option<Registration> {
        let registration = Registration::new(name, options);
        let mut fields = self.fields.write().ok()?;
        fields.entry(name.to_string()).or_default().registration = Some(registration.clone());
        Some(registration)
    }
}
