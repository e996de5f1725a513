use smart_field::markup::html::{escape_html, render_html};
use smart_field::markup::props::merge_layers;
use smart_field::markup::traverse::map_children;
use smart_field::{Element, ElementRef, Node, PropValue, Props, RegisterOptions, Registration, Role};

// ============================================================================
// Layered merge
// ============================================================================

#[test]
fn later_layers_win_on_collision() {
    let base = Props::new().with("id", "a").with("class", "x");
    let middle = Props::new().with("id", "b");
    let top = Props::new().with("id", "c").with("title", "t");

    let merged = merge_layers([&base, &middle, &top]);
    assert_eq!(merged.text("id").as_deref(), Some("c"));
    assert_eq!(merged.text("class").as_deref(), Some("x"), "Untouched keys survive");
    assert_eq!(merged.text("title").as_deref(), Some("t"));
    assert_eq!(merged.len(), 3);
}

#[test]
fn absent_optional_values_leave_no_key() {
    let props = Props::new()
        .with_opt::<String>("placeholder", None)
        .with_opt("title", Some("hi"));
    assert!(!props.contains("placeholder"));
    assert!(props.contains("title"));
}

#[test]
fn truthiness_follows_markup_conventions() {
    assert!(!PropValue::Text(String::new()).is_truthy());
    assert!(PropValue::Text("0".into()).is_truthy());
    assert!(!PropValue::Number(0.0).is_truthy());
    assert!(PropValue::Number(2.0).is_truthy());
    assert!(!PropValue::Bool(false).is_truthy());
}

#[test]
fn json_values_convert_to_props() {
    assert_eq!(PropValue::from_json(&serde_json::Value::Null), None);
    assert_eq!(
        PropValue::from_json(&serde_json::json!(3)),
        Some(PropValue::Number(3.0))
    );
    assert_eq!(PropValue::Number(3.0).as_text().as_deref(), Some("3"));
    assert_eq!(PropValue::Number(2.5).as_text().as_deref(), Some("2.5"));
}

// ============================================================================
// Traversal
// ============================================================================

fn sample_tree() -> Node {
    Node::Fragment(vec![
        Element::new("div")
            .child(Element::placeholder(Role::Label))
            .child("text")
            .into(),
        Node::Empty,
        Element::new("span").into(),
    ])
}

#[test]
fn map_children_preserves_shape() {
    let mapped = map_children(sample_tree(), &mut |el| el.into());
    assert_eq!(mapped, sample_tree(), "Identity visitor changes nothing");
}

#[test]
fn map_children_visits_children_before_parents() {
    let mut order = Vec::new();
    map_children(sample_tree(), &mut |el| {
        order.push(if el.tag.is_empty() { "placeholder".to_string() } else { el.tag.clone() });
        el.into()
    });
    assert_eq!(order, vec!["placeholder", "div", "span"]);
}

#[test]
fn map_children_can_drop_elements() {
    let mapped = map_children(sample_tree(), &mut |el| {
        if el.role == Some(Role::Label) {
            Node::Empty
        } else {
            el.into()
        }
    });
    let div = match &mapped {
        Node::Fragment(nodes) => nodes[0].as_element().expect("div"),
        other => panic!("Expected fragment, got {:?}", other),
    };
    assert_eq!(div.children, vec![Node::Empty, Node::text("text")]);
}

#[test]
fn element_ref_resolves_paths() {
    let tree: Node = Element::new("div")
        .child(Node::Fragment(vec![Element::new("em").into()]))
        .into();
    assert_eq!(tree.resolve(&ElementRef::root()).map(|e| e.tag.as_str()), Some("div"));
    let nested = ElementRef { path: vec![0, 0] };
    assert_eq!(tree.resolve(&nested).map(|e| e.tag.as_str()), Some("em"));
    assert!(tree.resolve(&ElementRef { path: vec![3] }).is_none());
}

#[test]
fn layout_tree_deserializes_from_json() {
    let json = r#"{
        "fragment": [
            {"element": {"role": "label"}},
            {"element": {"tag": "p", "props": {"class": "hint"}, "children": [{"text": "Hi"}]}},
            {"element": {"role": "errors"}}
        ]
    }"#;
    let tree: Node = serde_json::from_str(json).expect("valid layout");
    assert_eq!(tree.find_all(Role::Label).len(), 1);
    assert_eq!(tree.find_all(Role::Errors).len(), 1);
    let p = tree.find_tag("p");
    assert_eq!(p[0].props.text("class").as_deref(), Some("hint"));
    assert_eq!(p[0].text_content(), "Hi");
}

// ============================================================================
// HTML serialization
// ============================================================================

#[test]
fn escape_html_handles_special_characters() {
    assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
}

#[test]
fn booleans_render_bare_or_not_at_all() {
    let node: Node = Element::new("input")
        .prop("required", true)
        .prop("disabled", false)
        .prop("aria-invalid", false)
        .into();
    assert_eq!(render_html(&node), "<input aria-invalid=\"false\" required>");
}

#[test]
fn registration_binding_is_not_an_attribute() {
    let reg = Registration::new("email", RegisterOptions::default());
    let node: Node = Element::new("input").props(reg.props()).into();
    assert_eq!(render_html(&node), "<input name=\"email\">");
}

#[test]
fn keys_and_empty_nodes_are_not_rendered() {
    let node: Node = Element::new("ul")
        .child(Element::new("li").key("one").text("One"))
        .child(Node::Empty)
        .into();
    assert_eq!(render_html(&node), "<ul><li>One</li></ul>");
}

#[test]
fn text_and_attribute_values_are_escaped() {
    let node: Node = Element::new("p").prop("title", "a\"b").text("1 < 2").into();
    assert_eq!(render_html(&node), "<p title=\"a&quot;b\">1 &lt; 2</p>");
}
