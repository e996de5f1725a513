use serde::{Deserialize, Serialize};

use crate::markup::node::{Element, Role};
use crate::markup::props::{PropValue, Props};

/// A substitute for one structural role: the tag it renders with and its own
/// base props, which sit beneath everything the composer or caller sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Component {
    pub tag: String,
    #[serde(default)]
    pub props: Props,
}

impl Component {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// An element of this component tagged with `role`, carrying no props yet.
    pub fn element(&self, role: Role) -> Element {
        Element::new(self.tag.clone()).role(role)
    }
}

/// Optional substitutes for each structural role. Unset slots fall back to
/// bare tags.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentMapping {
    pub field: Option<Component>,
    pub label: Option<Component>,
    pub input: Option<Component>,
    pub multiline: Option<Component>,
    pub select: Option<Component>,
    pub checkbox: Option<Component>,
    pub radio: Option<Component>,
    pub checkbox_wrapper: Option<Component>,
    pub radio_wrapper: Option<Component>,
    pub errors: Option<Component>,
    pub error: Option<Component>,
}

impl ComponentMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the substitute for `role`. Roles without a slot are ignored.
    pub fn with(mut self, role: Role, component: Component) -> Self {
        if let Some(slot) = self.slot_mut(role) {
            *slot = Some(component);
        }
        self
    }

    /// The component for `role`, falling back to its bare tag.
    ///
    /// `SmartInput` has no slot: it is never rendered itself, only replaced
    /// by the control it selects.
    pub fn resolve(&self, role: Role) -> Component {
        self.slot(role)
            .cloned()
            .unwrap_or_else(|| Component::tag(default_tag(role)))
    }

    fn slot(&self, role: Role) -> Option<&Component> {
        match role {
            Role::Field => self.field.as_ref(),
            Role::Label => self.label.as_ref(),
            Role::Input => self.input.as_ref(),
            Role::Multiline => self.multiline.as_ref(),
            Role::Select => self.select.as_ref(),
            Role::Checkbox => self.checkbox.as_ref(),
            Role::Radio => self.radio.as_ref(),
            Role::CheckboxWrapper => self.checkbox_wrapper.as_ref(),
            Role::RadioWrapper => self.radio_wrapper.as_ref(),
            Role::Errors => self.errors.as_ref(),
            Role::Error => self.error.as_ref(),
            Role::SmartInput => None,
        }
    }

    fn slot_mut(&mut self, role: Role) -> Option<&mut Option<Component>> {
        match role {
            Role::Field => Some(&mut self.field),
            Role::Label => Some(&mut self.label),
            Role::Input => Some(&mut self.input),
            Role::Multiline => Some(&mut self.multiline),
            Role::Select => Some(&mut self.select),
            Role::Checkbox => Some(&mut self.checkbox),
            Role::Radio => Some(&mut self.radio),
            Role::CheckboxWrapper => Some(&mut self.checkbox_wrapper),
            Role::RadioWrapper => Some(&mut self.radio_wrapper),
            Role::Errors => Some(&mut self.errors),
            Role::Error => Some(&mut self.error),
            Role::SmartInput => None,
        }
    }
}

pub fn default_tag(role: Role) -> &'static str {
    match role {
        Role::Field | Role::CheckboxWrapper | Role::RadioWrapper | Role::Errors | Role::Error => {
            "div"
        }
        Role::Label => "label",
        Role::Input | Role::Checkbox | Role::Radio => "input",
        Role::Multiline => "textarea",
        Role::Select => "select",
        Role::SmartInput => "",
    }
}
