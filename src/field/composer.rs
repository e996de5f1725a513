use std::fmt;
use std::sync::Arc;

use crate::field::derive::{DerivedField, derive_field};
use crate::field::field_model::{FieldDescriptor, FieldKind};
use crate::field::mapping::ComponentMapping;
use crate::field::selector::{SmartInput, SmartInputProps, option_elements};
use crate::form::register::Register;
use crate::markup::html::render_html;
use crate::markup::node::{Element, ElementRef, Node, Role};
use crate::markup::props::{PropValue, Props, merge_layers};
use crate::markup::traverse::map_children;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{RenderEvent, RenderStage};

pub type RenderFn = Arc<dyn Fn(&LayoutHelpers<'_>) -> Node + Send + Sync>;

/// A caller-authored layout replacing the default one.
#[derive(Clone)]
pub enum Layout {
    /// A fixed tree of placeholders and markup.
    Tree(Node),
    /// Built per render from the field's helpers.
    Render(RenderFn),
}

impl Layout {
    pub fn render<F>(f: F) -> Self
    where
        F: Fn(&LayoutHelpers<'_>) -> Node + Send + Sync + 'static,
    {
        Layout::Render(Arc::new(f))
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Tree(node) => f.debug_tuple("Tree").field(node).finish(),
            Layout::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Props of one field render.
#[derive(Debug, Clone, Default)]
pub struct FieldProps {
    pub field: FieldDescriptor,
    /// Extra props for the container element. Win over `hidden`/`style`.
    pub container: Props,
    pub layout: Option<Layout>,
}

impl FieldProps {
    pub fn new(field: FieldDescriptor) -> Self {
        Self {
            field,
            ..Default::default()
        }
    }

    pub fn container(mut self, props: Props) -> Self {
        self.container = props;
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }
}

impl From<FieldDescriptor> for FieldProps {
    fn from(field: FieldDescriptor) -> Self {
        Self::new(field)
    }
}

/// What a layout render function gets to build its tree with.
pub struct LayoutHelpers<'a> {
    pub field: &'a FieldDescriptor,
    pub input_type: &'a str,
    pub value: Option<&'a PropValue>,
    /// Handle to the container element in the rendered output.
    pub container_ref: ElementRef,
    mapping: &'a ComponentMapping,
}

impl LayoutHelpers<'_> {
    pub fn placeholder(&self, role: Role) -> Element {
        self.mapping.resolve(role).element(role)
    }

    pub fn label(&self) -> Element {
        self.placeholder(Role::Label)
    }

    pub fn smart_input(&self) -> Element {
        Element::placeholder(Role::SmartInput)
    }

    pub fn input(&self) -> Element {
        self.placeholder(Role::Input)
    }

    pub fn multiline(&self) -> Element {
        self.placeholder(Role::Multiline)
    }

    pub fn select(&self) -> Element {
        self.placeholder(Role::Select)
    }

    pub fn checkbox(&self) -> Element {
        self.placeholder(Role::Checkbox)
    }

    pub fn checkbox_wrapper(&self) -> Element {
        self.placeholder(Role::CheckboxWrapper)
    }

    pub fn errors(&self) -> Element {
        self.placeholder(Role::Errors)
    }

    pub fn error(&self) -> Element {
        self.placeholder(Role::Error)
    }
}

/// Output of a field render: the tree and a handle to its container.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField {
    pub root: Node,
    pub container: ElementRef,
}

impl RenderedField {
    pub fn container_element(&self) -> Option<&Element> {
        self.root.resolve(&self.container)
    }

    pub fn to_html(&self) -> String {
        render_html(&self.root)
    }
}

/// A field component bound to one component mapping and one registrar.
pub struct FieldComponent<R> {
    mapping: ComponentMapping,
    smart_input: SmartInput,
    register: R,
    trace: Option<Arc<TraceLogger>>,
}

/// Build a field component. The mapping is captured here and never changes.
pub fn create_field<R: Register>(mapping: ComponentMapping, register: R) -> FieldComponent<R> {
    let smart_input = SmartInput::new(&mapping);
    FieldComponent {
        mapping,
        smart_input,
        register,
        trace: None,
    }
}

impl<R: Register> FieldComponent<R> {
    pub fn with_trace(mut self, logger: Arc<TraceLogger>) -> Self {
        self.trace = Some(logger);
        self
    }

    pub fn mapping(&self) -> &ComponentMapping {
        &self.mapping
    }

    pub fn smart_input(&self) -> &SmartInput {
        &self.smart_input
    }

    pub fn render(&self, props: FieldProps) -> RenderedField {
        let FieldProps {
            field,
            container,
            layout,
        } = props;

        let derived = derive_field(&field, &self.register);
        if derived.registration.is_none() {
            self.log(RenderEvent::now(&field.name, RenderStage::RegistrationMissing));
        }

        let children = match layout {
            None => self.default_layout(&field, &derived),
            Some(layout) => {
                let tree = match layout {
                    Layout::Tree(tree) => tree,
                    Layout::Render(f) => f(&LayoutHelpers {
                        field: &field,
                        input_type: &derived.input_type,
                        value: derived.value.as_ref(),
                        container_ref: ElementRef::root(),
                        mapping: &self.mapping,
                    }),
                };
                vec![map_children(tree, &mut |el| self.inject(el, &field, &derived))]
            }
        };

        RenderedField {
            root: self.container(&field, &container, children).into(),
            container: ElementRef::root(),
        }
    }

    fn container(&self, field: &FieldDescriptor, own: &Props, children: Vec<Node>) -> Element {
        let component = self.mapping.resolve(Role::Field);
        let visibility = Props::new().with_opt("hidden", field.hidden.then_some(true));
        let mut props = merge_layers([&component.props, &visibility, own]);

        if field.hidden {
            let style = match own.text("style").filter(|s| !s.trim().is_empty()) {
                Some(extra) => format!("display: none; {}", extra),
                None => "display: none".to_string(),
            };
            props.insert("style", style);
        }

        component.element(Role::Field).props(props).children(children)
    }

    fn smart_input_props(&self, field: &FieldDescriptor, derived: &DerivedField) -> SmartInputProps {
        SmartInputProps {
            kind: field.kind,
            input_type: Some(derived.input_type.clone()),
            value: derived.value.clone(),
            auto_focus: field.auto_focus,
            select_children: field.options.as_deref().map(option_elements),
            options: field.options.clone(),
            multiline: field.multiline,
            radio: field.radio,
            placeholder: field.placeholder.clone(),
            registration: derived.registration.clone(),
            a11y: derived.a11y.clone(),
            passthrough: Props::new(),
        }
    }

    fn render_smart_input(&self, field: &FieldDescriptor, props: SmartInputProps) -> Node {
        if let Some(variant) = SmartInput::select(&props) {
            self.log(RenderEvent::now(&field.name, RenderStage::VariantSelected).with_variant(variant));
        }
        self.smart_input.render(props)
    }

    fn label_element(&self, field: &FieldDescriptor, derived: &DerivedField) -> Element {
        let component = self.mapping.resolve(Role::Label);
        let injected = Props::new()
            .with("id", derived.label_id.as_str())
            .with("for", field.name.as_str());
        let label = component
            .element(Role::Label)
            .props(merge_layers([&component.props, &injected]));
        match &field.label {
            Some(text) => label.text(text.clone()),
            None => label,
        }
    }

    fn error_items(&self, messages: &[String]) -> Vec<Node> {
        let component = self.mapping.resolve(Role::Error);
        messages
            .iter()
            .map(|msg| {
                Node::Element(
                    component
                        .element(Role::Error)
                        .key(msg.clone())
                        .props(component.props.clone())
                        .text(msg.clone()),
                )
            })
            .collect()
    }

    fn default_layout(&self, field: &FieldDescriptor, derived: &DerivedField) -> Vec<Node> {
        let control = self.render_smart_input(field, self.smart_input_props(field, derived));
        let mut children: Vec<Node> = Vec::new();

        if field.kind == FieldKind::Boolean {
            let wrapper = self.mapping.resolve(Role::CheckboxWrapper);
            children.push(
                wrapper
                    .element(Role::CheckboxWrapper)
                    .props(wrapper.props.clone())
                    .child(control)
                    .child(self.label_element(field, derived))
                    .into(),
            );
        } else if derived.input_type == "radio" {
            let wrapper = self.mapping.resolve(Role::RadioWrapper);
            children.push(
                wrapper
                    .element(Role::RadioWrapper)
                    .props(wrapper.props.clone())
                    .child(control)
                    .into(),
            );
        } else {
            children.push(self.label_element(field, derived).into());
            children.push(control);
        }

        let messages = field.error_messages();
        if !messages.is_empty() {
            let errors = self.mapping.resolve(Role::Errors);
            let injected = Props::new()
                .with("role", "alert")
                .with("id", derived.errors_id.as_str());
            children.push(
                errors
                    .element(Role::Errors)
                    .props(merge_layers([&errors.props, &injected]))
                    .children(self.error_items(messages))
                    .into(),
            );
        }

        children
    }

    /// Inject derived props into one element of a custom layout. The
    /// element's own props are the top layer; its component's base props the
    /// bottom one.
    fn inject(&self, el: Element, field: &FieldDescriptor, derived: &DerivedField) -> Node {
        let Some(role) = el.role else {
            return el.into();
        };

        let value = derived.value.clone();
        let placeholder = field.placeholder.clone();
        let registration = derived.registration_props();

        let injected = match role {
            Role::Label => Props::new()
                .with("id", derived.label_id.as_str())
                .with("for", field.name.as_str()),
            Role::SmartInput => {
                self.log(RenderEvent::now(&field.name, RenderStage::RoleInjected).with_role(role));
                let props = self
                    .smart_input_props(field, derived)
                    .overridden_by(el.props, el.children);
                return self.render_smart_input(field, props);
            }
            Role::Input => merge_layers([
                &Props::new()
                    .with("id", field.name.as_str())
                    .with("type", derived.input_type.as_str()),
                &registration,
                &derived.a11y,
                &Props::new()
                    .with_opt("placeholder", placeholder)
                    .with("autofocus", field.auto_focus)
                    .with_opt("value", value),
            ]),
            Role::Multiline => merge_layers([
                &Props::new().with("id", field.name.as_str()),
                &registration,
                &derived.a11y,
                &Props::new()
                    .with_opt("placeholder", placeholder)
                    .with("autofocus", field.auto_focus)
                    .with_opt("value", value),
            ]),
            Role::Select => merge_layers([
                &Props::new().with("id", field.name.as_str()),
                &registration,
                &derived.a11y,
                &Props::new()
                    .with("autofocus", field.auto_focus)
                    .with_opt("value", value),
            ]),
            Role::Checkbox => merge_layers([
                &Props::new()
                    .with("id", field.name.as_str())
                    .with("type", derived.input_type.as_str())
                    .with("autofocus", field.auto_focus),
                &registration,
                &derived.a11y,
                &Props::new()
                    .with_opt("placeholder", placeholder)
                    .with("checked", value.as_ref().is_some_and(PropValue::is_truthy)),
            ]),
            Role::Errors => {
                let messages = field.error_messages();
                if el.is_childless() && messages.is_empty() {
                    self.log(RenderEvent::now(&field.name, RenderStage::ErrorsOmitted));
                    return Node::Empty;
                }
                let injected = Props::new()
                    .with("id", derived.errors_id.as_str())
                    .with("role", "alert");
                self.log(RenderEvent::now(&field.name, RenderStage::RoleInjected).with_role(role));
                let generated = if el.is_childless() {
                    Some(self.error_items(messages))
                } else {
                    None
                };
                return self.apply(el, role, &injected, generated).into();
            }
            _ => return self.apply(el, role, &Props::new(), None).into(),
        };

        self.log(RenderEvent::now(&field.name, RenderStage::RoleInjected).with_role(role));

        let generated = match role {
            Role::Label => field.label.clone().map(|text| vec![Node::Text(text)]),
            Role::Select => field.options.as_deref().map(option_elements),
            _ => None,
        };
        self.apply(el, role, &injected, generated).into()
    }

    /// Layer `base < injected < own` onto `el`, fill a missing tag from the
    /// mapping, and use `generated` content when the element has none.
    fn apply(&self, mut el: Element, role: Role, injected: &Props, generated: Option<Vec<Node>>) -> Element {
        let component = self.mapping.resolve(role);
        el.props = merge_layers([&component.props, injected, &el.props]);
        if el.tag.is_empty() {
            el.tag = component.tag;
        }
        if el.is_childless() {
            if let Some(children) = generated {
                el.children = children;
            }
        }
        el
    }

    fn log(&self, event: RenderEvent) {
        if let Some(trace) = &self.trace {
            trace.log(&event);
        }
    }
}
