use crate::markup::node::{Element, Node};

/// Map every element in `node`, preserving the shape of the tree.
///
/// Children are mapped before their parent is handed to `visit`, so the
/// visitor always sees an element whose subtree is already transformed.
/// Text, fragment and empty nodes keep their place; the visitor may replace
/// an element with any node, `Node::Empty` included.
pub fn map_children<F>(node: Node, visit: &mut F) -> Node
where
    F: FnMut(Element) -> Node,
{
    match node {
        Node::Element(mut el) => {
            let children = std::mem::take(&mut el.children);
            el.children = children
                .into_iter()
                .map(|c| map_children(c, visit))
                .collect();
            visit(el)
        }
        Node::Fragment(nodes) => Node::Fragment(
            nodes
                .into_iter()
                .map(|c| map_children(c, visit))
                .collect(),
        ),
        other => other,
    }
}
