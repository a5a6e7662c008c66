// Parse tree node types.
//
// Three variants: Text leaves, Tag elements that own their children, and the
// Empty sentinel produced by simplification. Trees are plain values: built
// once by the parser, read by a visitor, then dropped.

use indexmap::IndexMap;

/// Attribute name → unescaped value, in first-seen order.
///
/// Equality ignores order.
pub type Attributes = IndexMap<String, String>;

/// Literal character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

/// An element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Tag {
    /// Get an attribute value by exact (case-sensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get an attribute value, treating an empty value as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Tag(Tag),
    /// Placeholder for a node removed by [`Node::simplify`]. Never part of a
    /// parse result.
    Empty,
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text { content: content.into() })
    }

    /// Create a tag node without attributes.
    pub fn tag(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::tag_with(name, Attributes::new(), children)
    }

    /// Create a tag node with attributes.
    pub fn tag_with(name: impl Into<String>, attributes: Attributes, children: Vec<Node>) -> Self {
        Node::Tag(Tag {
            name: name.into(),
            attributes,
            children,
        })
    }

    /// Short label for diagnostics: `text`, `<name/>` or `empty`.
    pub fn kind(&self) -> String {
        match self {
            Node::Text(_) => "text".to_string(),
            Node::Tag(t) => format!("<{}/>", t.name),
            Node::Empty => "empty".to_string(),
        }
    }

    /// Tag name, if this is a tag.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Tag(t) => Some(&t.name),
            _ => None,
        }
    }

    /// Returns a reference to this node's children, if it can have any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Tag(t) => Some(&t.children),
            _ => None,
        }
    }

    /// Whether this is the [`Node::Empty`] placeholder.
    pub fn is_empty_node(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Drop whitespace-only text from this subtree.
    ///
    /// Text is only *tested* for blankness; surviving content is copied as
    /// is, so inner spaces and `\u{a0}` stay. Tags never collapse to `Empty`,
    /// even when all their children were removed. Uses an explicit stack
    /// rather than recursion.
    pub fn simplify(&self) -> Node {
        let Node::Tag(root) = self else {
            return self.simplify_leaf();
        };

        let mut frames = vec![Frame::new(root)];
        while let Some(frame) = frames.last_mut() {
            if let Some(child) = frame.pending.next() {
                match child {
                    Node::Tag(tag) => frames.push(Frame::new(tag)),
                    leaf => {
                        let simplified = leaf.simplify_leaf();
                        if !simplified.is_empty_node() {
                            frame.children.push(simplified);
                        }
                    }
                }
                continue;
            }

            let Some(done) = frames.pop() else { break };
            let node = done.finish();
            match frames.last_mut() {
                Some(parent) => parent.children.push(node),
                None => return node,
            }
        }
        // The root frame always returns from inside the loop.
        Node::Empty
    }

    fn simplify_leaf(&self) -> Node {
        match self {
            Node::Text(t) if is_blank(&t.content) => Node::Empty,
            Node::Text(t) => Node::Text(t.clone()),
            Node::Tag(t) => Node::Tag(t.clone()),
            Node::Empty => Node::Empty,
        }
    }
}

/// A tag being rebuilt by [`Node::simplify`].
struct Frame<'a> {
    tag: &'a Tag,
    pending: std::slice::Iter<'a, Node>,
    children: Vec<Node>,
}

impl<'a> Frame<'a> {
    fn new(tag: &'a Tag) -> Self {
        Self {
            tag,
            pending: tag.children.iter(),
            children: Vec::new(),
        }
    }

    fn finish(self) -> Node {
        Node::Tag(Tag {
            name: self.tag.name.clone(),
            attributes: self.tag.attributes.clone(),
            children: self.children,
        })
    }
}

/// Whitespace as ECMAScript's `String.prototype.trim` sees it.
///
/// Differs from [`char::is_whitespace`] in two places: U+0085 (NEL) is not
/// whitespace, U+FEFF (BOM) is.
pub(crate) fn is_blank_char(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}

/// Whether `s` is empty or made only of [`is_blank_char`] characters.
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

/// Depth-first traversal over a parse tree.
///
/// Implementors override the hooks they care about; the default
/// [`visit_tag`](Visit::visit_tag) walks the children.
pub trait Visit {
    fn visit_text(&mut self, _text: &Text) {}

    fn visit_tag(&mut self, tag: &Tag) {
        self.visit_children(tag);
    }

    fn visit_empty(&mut self) {}

    fn visit_children(&mut self, tag: &Tag) {
        for child in &tag.children {
            self.visit_node(child);
        }
    }

    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Text(t) => self.visit_text(t),
            Node::Tag(t) => self.visit_tag(t),
            Node::Empty => self.visit_empty(),
        }
    }
}
