use serde::{Deserialize, Serialize};

use crate::markup::props::{PropValue, Props};

/// Structural role marker carried by an element.
///
/// Roles are what the composer recognizes in a custom layout; the tag an
/// element renders with is independent of its role, so two roles that share
/// a tag (input and checkbox both render `<input>`) never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Field,
    Label,
    SmartInput,
    Input,
    Multiline,
    Select,
    Checkbox,
    Radio,
    CheckboxWrapper,
    RadioWrapper,
    Errors,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Markup tag. May be left empty on role-tagged elements; the composer
    /// fills it from the component mapping.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub role: Option<Role>,
    /// Sibling-unique key (option value, error message). Not rendered.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// A role placeholder with no tag yet.
    pub fn placeholder(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props.extend(&props);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// True when no children were authored.
    pub fn is_childless(&self) -> bool {
        self.children.iter().all(|c| matches!(c, Node::Empty))
    }

    /// Concatenated text content of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(t),
        Node::Element(el) => {
            for c in &el.children {
                collect_text(c, out);
            }
        }
        Node::Fragment(nodes) => {
            for c in nodes {
                collect_text(c, out);
            }
        }
        Node::Empty => {}
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// Path handle to an element inside a rendered tree: indexes into `children`
/// (fragments count as one child and are indexed through).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ElementRef {
    pub path: Vec<usize>,
}

impl ElementRef {
    pub fn root() -> Self {
        Self::default()
    }
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Follow an `ElementRef` from this node.
    pub fn resolve(&self, handle: &ElementRef) -> Option<&Element> {
        let mut current = self;
        for &idx in &handle.path {
            current = match current {
                Node::Element(el) => el.children.get(idx)?,
                Node::Fragment(nodes) => nodes.get(idx)?,
                _ => return None,
            };
        }
        current.as_element()
    }

    /// All elements carrying `role`, in document order.
    pub fn find_all(&self, role: Role) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if el.role == Some(role) {
                found.push(el);
            }
        });
        found
    }

    /// All elements with tag `tag`, in document order.
    pub fn find_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        match self {
            Node::Element(el) => {
                f(el);
                for c in &el.children {
                    c.walk(f);
                }
            }
            Node::Fragment(nodes) => {
                for c in nodes {
                    c.walk(f);
                }
            }
            Node::Text(_) | Node::Empty => {}
        }
    }
}
