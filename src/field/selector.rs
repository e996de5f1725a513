use serde::Serialize;

use crate::field::field_model::{FieldKind, FieldOption};
use crate::field::mapping::{Component, ComponentMapping};
use crate::form::register::{REGISTRATION_KEY, Registration};
use crate::markup::node::{Element, Node, Role};
use crate::markup::props::{PropValue, Props, merge_layers};

/// The control a smart input renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Checkbox,
    Select,
    Radio,
    Multiline,
    Input,
}

/// Inputs of one smart-input render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartInputProps {
    pub kind: FieldKind,
    pub input_type: Option<String>,
    pub value: Option<PropValue>,
    pub auto_focus: bool,
    /// Caller-supplied option elements; win over `options` for selects.
    pub select_children: Option<Vec<Node>>,
    pub options: Option<Vec<FieldOption>>,
    pub multiline: bool,
    pub radio: bool,
    pub placeholder: Option<String>,
    pub registration: Option<Registration>,
    pub a11y: Props,
    /// Anything else the caller set. Merged last, so it overrides everything.
    pub passthrough: Props,
}

impl SmartInputProps {
    /// Apply props authored on a smart-input placeholder over derived inputs.
    ///
    /// Keys naming an input replace it; the rest become passthrough props.
    /// Authored children replace the option elements.
    pub fn overridden_by(mut self, own: Props, own_children: Vec<Node>) -> Self {
        for (key, value) in own {
            match key.as_str() {
                "kind" => {
                    if let Some(kind) = value.as_text().and_then(|k| FieldKind::parse(&k)) {
                        self.kind = kind;
                    }
                }
                "type" => self.input_type = value.as_text(),
                "value" => self.value = Some(value),
                "autofocus" => self.auto_focus = value.is_truthy(),
                "multiline" => self.multiline = value.is_truthy(),
                "radio" => self.radio = value.is_truthy(),
                "placeholder" => self.placeholder = value.as_text(),
                REGISTRATION_KEY => {
                    if let PropValue::Registration(reg) = &value {
                        self.registration = Some(reg.clone());
                    }
                    self.passthrough.insert(key, value);
                }
                _ => self.passthrough.insert(key, value),
            }
        }
        if !own_children.is_empty() {
            self.select_children = Some(own_children);
        }
        self
    }
}

/// Chooses and renders one control variant. Built once per component mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartInput {
    input: Component,
    multiline: Component,
    select: Component,
    checkbox: Component,
    radio: Component,
    label: Component,
}

impl SmartInput {
    pub fn new(mapping: &ComponentMapping) -> Self {
        Self {
            input: mapping.resolve(Role::Input),
            multiline: mapping.resolve(Role::Multiline),
            select: mapping.resolve(Role::Select),
            checkbox: mapping.resolve(Role::Checkbox),
            radio: mapping.resolve(Role::Radio),
            label: mapping.resolve(Role::Label),
        }
    }

    /// Which variant `props` renders, or `None` for an unbound field.
    pub fn select(props: &SmartInputProps) -> Option<Variant> {
        props.registration.as_ref()?;

        let has_options = props.options.is_some();
        let variant = if props.kind == FieldKind::Boolean {
            Variant::Checkbox
        } else if (props.select_children.is_some() || has_options) && !props.radio {
            Variant::Select
        } else if has_options && props.radio {
            Variant::Radio
        } else if props.multiline {
            Variant::Multiline
        } else {
            Variant::Input
        };
        Some(variant)
    }

    pub fn render(&self, props: SmartInputProps) -> Node {
        let Some(variant) = Self::select(&props) else {
            return Node::Empty;
        };
        let Some(registration) = props.registration.as_ref() else {
            return Node::Empty;
        };

        // {id, autofocus} < registration < a11y < passthrough
        let identity = Props::new()
            .with("id", registration.name.as_str())
            .with("autofocus", props.auto_focus);
        let common = merge_layers([
            &identity,
            &registration.props(),
            &props.a11y,
            &props.passthrough,
        ]);

        match variant {
            Variant::Checkbox => {
                let defaults = Props::new()
                    .with("type", "checkbox")
                    .with_opt("placeholder", props.placeholder.clone())
                    .with("checked", props.value.as_ref().is_some_and(PropValue::is_truthy));
                control(&self.checkbox, Role::Checkbox, &defaults, &common).into()
            }
            Variant::Select => {
                let defaults = Props::new().with_opt("value", props.value.clone());
                let children = match props.select_children {
                    Some(children) => children,
                    None => option_elements(props.options.as_deref().unwrap_or(&[])),
                };
                control(&self.select, Role::Select, &defaults, &common)
                    .children(children)
                    .into()
            }
            Variant::Radio => {
                let options = props.options.as_deref().unwrap_or(&[]);
                Node::Fragment(
                    options
                        .iter()
                        .map(|opt| self.radio_option(opt, props.value.as_ref(), &common))
                        .collect(),
                )
            }
            Variant::Multiline => {
                let defaults = Props::new()
                    .with_opt("placeholder", props.placeholder.clone())
                    .with_opt("value", props.value.clone());
                control(&self.multiline, Role::Multiline, &defaults, &common).into()
            }
            Variant::Input => {
                let defaults = Props::new()
                    .with_opt("type", props.input_type.clone())
                    .with_opt("placeholder", props.placeholder.clone())
                    .with_opt("value", props.value.clone());
                control(&self.input, Role::Input, &defaults, &common).into()
            }
        }
    }

    fn radio_option(&self, opt: &FieldOption, value: Option<&PropValue>, common: &Props) -> Node {
        let mut unique = common.clone();
        if let Some(id) = common.text("id") {
            unique.insert("id", format!("{}-{}", id, opt.value));
        }
        let id = unique.text("id").unwrap_or_default();

        let checked = value.and_then(PropValue::as_text).as_deref() == Some(opt.value.as_str());
        let defaults = Props::new()
            .with("type", "radio")
            .with("value", opt.value.as_str())
            .with("checked", checked);
        let input = control(&self.radio, Role::Radio, &defaults, &unique).key(opt.value.clone());

        let label = self
            .label
            .element(Role::Label)
            .props(merge_layers([&self.label.props, &Props::new().with("for", id)]))
            .text(opt.display_name.clone());

        Node::Fragment(vec![input.into(), label.into()])
    }
}

fn control(component: &Component, role: Role, defaults: &Props, common: &Props) -> Element {
    component
        .element(role)
        .props(merge_layers([&component.props, defaults, common]))
}

/// One `<option>` per choice, keyed and valued by the literal option value.
pub fn option_elements(options: &[FieldOption]) -> Vec<Node> {
    options
        .iter()
        .map(|opt| {
            Node::Element(
                Element::new("option")
                    .key(opt.value.clone())
                    .prop("value", opt.value.as_str())
                    .text(opt.display_name.clone()),
            )
        })
        .collect()
}
