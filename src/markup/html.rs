use crate::markup::node::{Element, Node};
use crate::markup::props::PropValue;

// ============================================================================
// HTML serializer — renders a node tree to markup
// ============================================================================

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// Render a node tree to an HTML fragment.
///
/// - Attributes in key order, values escaped
/// - `true` booleans bare, `false` booleans omitted (`aria-*` keep "true"/"false")
/// - Registration bindings contribute nothing beyond their `name` prop
/// - A textarea's `value` becomes its content
/// - A select's `value` marks the matching option `selected`
pub fn render_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, None, &mut out);
    out
}

fn write_node(node: &Node, selected: Option<&str>, out: &mut String) {
    match node {
        Node::Element(el) => write_element(el, selected, out),
        Node::Text(text) => out.push_str(&escape_html(text)),
        Node::Fragment(nodes) => {
            for n in nodes {
                write_node(n, selected, out);
            }
        }
        Node::Empty => {}
    }
}

fn write_element(el: &Element, selected: Option<&str>, out: &mut String) {
    let tag = if el.tag.is_empty() { "div" } else { el.tag.as_str() };

    out.push('<');
    out.push_str(tag);

    for (key, value) in el.props.iter() {
        if key == "value" && tag == "textarea" {
            continue;
        }
        if key == "value" && tag == "select" {
            continue;
        }
        write_attribute(key, value, out);
    }

    if tag == "option" && !el.props.contains("selected") {
        let own = el.props.text("value");
        if selected.is_some() && own.as_deref() == selected {
            out.push_str(" selected");
        }
    }

    if VOID_TAGS.contains(&tag) {
        out.push('>');
        return;
    }
    out.push('>');

    if tag == "textarea" && el.is_childless() {
        if let Some(value) = el.props.text("value") {
            out.push_str(&escape_html(&value));
        }
    }

    let child_selected = if tag == "select" {
        el.props.text("value")
    } else {
        None
    };
    for child in &el.children {
        write_node(child, child_selected.as_deref().or(selected), out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attribute(key: &str, value: &PropValue, out: &mut String) {
    match value {
        PropValue::Registration(_) => {}
        PropValue::Bool(b) if key.starts_with("aria-") => {
            out.push_str(&format!(" {}=\"{}\"", key, b));
        }
        PropValue::Bool(true) => {
            out.push(' ');
            out.push_str(key);
        }
        PropValue::Bool(false) => {}
        other => {
            if let Some(text) = other.as_text() {
                out.push_str(&format!(" {}=\"{}\"", key, escape_html(&text)));
            }
        }
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
