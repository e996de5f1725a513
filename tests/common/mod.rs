#![allow(dead_code)]

use smart_field::{
    ComponentMapping, Element, FieldDescriptor, FieldKind, FieldOption, FieldProps, FormStore,
    Layout, PropValue, RenderedField, Role, create_field,
};

// ============================================================================
// Helper builders
// ============================================================================

pub fn render(props: impl Into<FieldProps>) -> RenderedField {
    render_with(ComponentMapping::new(), props)
}

pub fn render_with(mapping: ComponentMapping, props: impl Into<FieldProps>) -> RenderedField {
    let store = FormStore::new();
    create_field(mapping, &store).render(props.into())
}

pub fn render_layout(field: FieldDescriptor, layout: Layout) -> RenderedField {
    render(FieldProps::new(field).layout(layout))
}

pub fn color_options() -> Vec<FieldOption> {
    vec![FieldOption::new("Red", "r"), FieldOption::new("Blue", "b")]
}

pub fn string_field(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::String)
}

/// Top-level children of the container, with fragments flattened.
pub fn container_children(rendered: &RenderedField) -> Vec<&Element> {
    let container = rendered
        .container_element()
        .expect("container element should resolve");
    let mut out = Vec::new();
    for child in &container.children {
        flatten(child, &mut out);
    }
    out
}

fn flatten<'a>(node: &'a smart_field::Node, out: &mut Vec<&'a Element>) {
    match node {
        smart_field::Node::Element(el) => out.push(el),
        smart_field::Node::Fragment(nodes) => {
            for n in nodes {
                flatten(n, out);
            }
        }
        _ => {}
    }
}

pub fn text_prop(el: &Element, key: &str) -> Option<String> {
    el.props.text(key)
}

pub fn bool_prop(el: &Element, key: &str) -> Option<bool> {
    match el.props.get(key) {
        Some(PropValue::Bool(b)) => Some(*b),
        _ => None,
    }
}

pub fn only(rendered: &RenderedField, role: Role) -> &Element {
    let found = rendered.root.find_all(role);
    assert_eq!(found.len(), 1, "expected exactly one {:?} element", role);
    found[0]
}
