use crate::field::field_model::{FieldDescriptor, FieldKind};
use crate::form::coerce::parse_date;
use crate::form::register::{Register, RegisterOptions, Registration};
use crate::markup::props::{PropValue, Props};

pub fn label_id(name: &str) -> String {
    format!("label-for-{name}")
}

pub fn errors_id(name: &str) -> String {
    format!("errors-for-{name}")
}

/// Props computed for one render pass. Built fresh each time, only ever merged.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedField {
    pub value: Option<PropValue>,
    pub input_type: String,
    pub registration: Option<Registration>,
    pub label_id: String,
    pub errors_id: String,
    /// `aria-labelledby`, `aria-invalid`, `aria-describedby`, `aria-required`
    pub a11y: Props,
}

impl DerivedField {
    /// Name plus binding, or nothing when the field is unbound.
    pub fn registration_props(&self) -> Props {
        self.registration
            .as_ref()
            .map(Registration::props)
            .unwrap_or_default()
    }
}

pub fn derive_field<R: Register + ?Sized>(field: &FieldDescriptor, register: &R) -> DerivedField {
    let value = match (&field.value, field.kind) {
        (Some(raw), FieldKind::Date) => parse_date(raw),
        (Some(raw), _) => PropValue::from_json(raw),
        (None, _) => None,
    };

    let registration = register.register(
        &field.name,
        RegisterOptions {
            shape: field.shape.clone(),
        },
    );

    let label_id = label_id(&field.name);
    let errors_id = errors_id(&field.name);
    let has_errors = !field.error_messages().is_empty();

    let a11y = Props::new()
        .with("aria-labelledby", label_id.as_str())
        .with("aria-invalid", has_errors)
        .with_opt("aria-describedby", has_errors.then(|| errors_id.clone()))
        .with("aria-required", field.required);

    DerivedField {
        value,
        input_type: field.resolved_type(),
        registration,
        label_id,
        errors_id,
        a11y,
    }
}
