//! Renders one schema-described form field into label, control and error
//! elements, with caller overrides layered over derived wiring.

pub mod cli;
pub mod error;
pub mod field;
pub mod form;
pub mod markup;
pub mod trace;

pub use error::FieldError;
pub use field::composer::{
    FieldComponent, FieldProps, Layout, LayoutHelpers, RenderedField, create_field,
};
pub use field::field_model::{FieldDescriptor, FieldKind, FieldOption};
pub use field::mapping::{Component, ComponentMapping};
pub use field::selector::{SmartInput, SmartInputProps, Variant};
pub use form::register::{Register, RegisterFn, RegisterOptions, Registration};
pub use form::store::FormStore;
pub use markup::node::{Element, ElementRef, Node, Role};
pub use markup::props::{PropValue, Props};
