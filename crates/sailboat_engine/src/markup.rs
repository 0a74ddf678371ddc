use ego_tree::NodeRef;
use scraper::node::Node;

/// The node shapes the extractor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// Root of a parsed document or fragment.
    Document,
    /// Element with its tag name.
    Element(&'a str),
    Text(&'a str),
    Comment,
    /// Doctypes, processing instructions and anything else without content.
    Other,
}

/// Read-only view of a parsed document node.
pub trait MarkupNode<'a>: Copy + 'a {
    fn kind(self) -> NodeKind<'a>;

    /// Attribute value on element nodes; `None` for other kinds.
    fn attribute(self, name: &str) -> Option<&'a str>;

    /// Children in document order.
    fn child_nodes(self) -> impl Iterator<Item = Self> + 'a;
}

impl<'a> MarkupNode<'a> for NodeRef<'a, Node> {
    fn kind(self) -> NodeKind<'a> {
        match self.value() {
            Node::Document | Node::Fragment => NodeKind::Document,
            Node::Element(element) => NodeKind::Element(element.name()),
            Node::Text(text) => NodeKind::Text(text),
            Node::Comment(_) => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }

    fn attribute(self, name: &str) -> Option<&'a str> {
        match self.value() {
            Node::Element(element) => element.attr(name),
            _ => None,
        }
    }

    fn child_nodes(self) -> impl Iterator<Item = Self> + 'a {
        NodeRef::children(&self)
    }
}

/// First element named `name` in pre-order, `root` included.
pub(crate) fn find_element<'a, N: MarkupNode<'a>>(root: N, name: &str) -> Option<N> {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if matches!(node.kind(), NodeKind::Element(tag) if tag.eq_ignore_ascii_case(name)) {
            return Some(node);
        }
        push_children_reversed(node, &mut pending);
    }
    None
}

/// Concatenated text of every text node under `root`; comments are excluded.
pub(crate) fn collect_text<'a, N: MarkupNode<'a>>(root: N) -> String {
    let mut out = String::new();
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        match node.kind() {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Comment | NodeKind::Other => {}
            NodeKind::Document | NodeKind::Element(_) => push_children_reversed(node, &mut pending),
        }
    }
    out
}

/// Stack order that pops children first to last.
fn push_children_reversed<'a, N: MarkupNode<'a>>(node: N, pending: &mut Vec<N>) {
    let children: Vec<N> = node.child_nodes().collect();
    pending.extend(children.into_iter().rev());
}
