// Node tree → Markdown string renderer.
//
// A depth-first walk that writes into one output buffer. Block structure is
// expressed with raw newlines (`<p>` adds blank lines around its content) and
// the caller trims the edges; nothing is escaped.
//
// Tags nested deeper than the depth limit are rendered as their bare text,
// collected with an explicit stack. Parsed trees never reach the limit.

pub(crate) mod handlers;

use crate::node::{Node, Tag, Text, Visit};
use crate::DEFAULT_MAX_DEPTH;

/// Marker written in front of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListMarker {
    /// `-`
    Bullet,
    /// `1.` for every item; ordered lists are not numbered.
    Ordered,
}

impl ListMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            ListMarker::Bullet => "-",
            ListMarker::Ordered => "1.",
        }
    }
}

/// Renderer state. One per `render` call, never shared.
pub(crate) struct State {
    pub output: String,
    /// Markers of the enclosing lists, innermost last.
    pub list_markers: Vec<ListMarker>,
    /// Whether we're inside a `<pre>`.
    pub in_code_block: bool,
    /// Number of tags being rendered.
    depth: usize,
    max_depth: usize,
}

impl State {
    pub fn new(max_depth: usize) -> Self {
        Self {
            output: String::new(),
            list_markers: Vec::new(),
            in_code_block: false,
            depth: 0,
            max_depth,
        }
    }

    /// Append all text below `tag`, ignoring markup.
    fn push_text_content(&mut self, tag: &Tag) {
        let mut pending = vec![tag.children.iter()];
        while let Some(children) = pending.last_mut() {
            match children.next() {
                Some(Node::Text(t)) => self.output.push_str(&t.content),
                Some(Node::Tag(t)) => pending.push(t.children.iter()),
                Some(Node::Empty) => {}
                None => {
                    pending.pop();
                }
            }
        }
    }

    /// Marker for the next list item; `-` outside of any list.
    pub fn current_marker(&self) -> ListMarker {
        self.list_markers.last().copied().unwrap_or(ListMarker::Bullet)
    }
}

impl Visit for State {
    fn visit_text(&mut self, text: &Text) {
        self.output.push_str(&text.content);
    }

    fn visit_tag(&mut self, tag: &Tag) {
        if self.depth >= self.max_depth {
            self.push_text_content(tag);
            return;
        }
        self.depth += 1;
        handlers::handle(self, tag);
        self.depth -= 1;
    }
}

/// Render nodes to Markdown. The result is not trimmed.
///
/// Tags nested more than [`DEFAULT_MAX_DEPTH`] deep contribute only
/// their text.
///
/// # Examples
///
/// ```
/// use fragdown::{render, Node};
///
/// let md = render(&[Node::tag("em", vec![Node::text("hi")])]);
/// assert_eq!(md, "*hi*");
/// ```
pub fn render(nodes: &[Node]) -> String {
    render_with_depth(nodes, DEFAULT_MAX_DEPTH)
}

pub(crate) fn render_with_depth(nodes: &[Node], max_depth: usize) -> String {
    let mut state = State::new(max_depth);
    for node in nodes {
        state.visit_node(node);
    }
    state.output
}
