// HTML fragment → node tree
//
// A single left-to-right scan: text runs become Text nodes, `<...>` spans
// become opening or closing tags. Open tags live on an explicit stack; a tag
// is attached to its parent when it closes (or at end of input). No implied
// end tags, no special content models. Only `br`, `hr` and `img` are void.
//
// Tags opened deeper than `Options::max_depth` are still matched against
// their closing tags, but they never become nodes: their content goes to the
// deepest kept tag. Every tree the parser returns is therefore at most
// `max_depth` tags deep.

pub(crate) mod attributes;
pub(crate) mod entities;

use crate::error::ParseError;
use crate::node::Node;
use crate::{Options, UnclosedTags};

use self::attributes::parse_attributes;
use self::entities::unescape;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// Parse an HTML fragment into simplified top-level nodes.
///
/// Tags left open at the end of input are kept, with whatever they had
/// collected. Use [`parse_html_with`] to reject them instead.
///
/// # Examples
///
/// ```
/// use fragdown::{parse_html, Node};
///
/// let nodes = parse_html("<p><b>Test</b> </p>").unwrap();
/// assert_eq!(nodes, vec![Node::tag("p", vec![Node::tag("b", vec![Node::text("Test")])])]);
/// ```
pub fn parse_html(input: &str) -> Result<Vec<Node>, ParseError> {
    parse_html_with(input, &Options::default())
}

/// Parse an HTML fragment with custom options.
pub fn parse_html_with(input: &str, options: &Options) -> Result<Vec<Node>, ParseError> {
    let mut parser = Parser::new(input, options.max_depth);
    parser.run()?;
    let nodes = parser.finish(options.unclosed_tags)?;

    Ok(nodes
        .iter()
        .map(Node::simplify)
        .filter(|n| !n.is_empty_node())
        .collect())
}

/// Parser state for one call.
struct Parser<'a> {
    input: &'a str,
    cursor: usize,
    /// Open elements, innermost last, each with the offset of its `<`.
    /// Entries at index `max_depth` and above are flattened.
    stack: Vec<(Node, usize)>,
    max_depth: usize,
    /// Finished top-level nodes.
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        Self {
            input,
            cursor: 0,
            stack: Vec::new(),
            max_depth,
            nodes: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), ParseError> {
        let input = self.input;
        while self.cursor < input.len() {
            let rest = &input[self.cursor..];
            let Some(offset) = rest.find('<') else {
                self.push_text(rest)?;
                break;
            };
            let start = self.cursor + offset;
            self.push_text(&rest[..offset])?;

            let end = input[start..]
                .find('>')
                .map(|i| start + i)
                .ok_or(ParseError::UnterminatedTag { position: start })?;

            let body = &input[start + 1..end];
            match body.strip_prefix('/') {
                Some(name) => self.close_tag(name, start)?,
                None => self.open_tag(body, start)?,
            }

            self.cursor = end + 1;
        }
        Ok(())
    }

    /// Attach unescaped text to the current container. Empty runs are dropped.
    fn push_text(&mut self, raw: &str) -> Result<(), ParseError> {
        let content = unescape(raw);
        if content.is_empty() {
            return Ok(());
        }
        self.append(Node::text(content))
    }

    fn open_tag(&mut self, body: &str, position: usize) -> Result<(), ParseError> {
        let (body, self_closing) = match body.strip_suffix('/') {
            Some(stripped) => (stripped, true),
            None => (body, false),
        };
        let (name, raw_attrs) = body.split_once(' ').unwrap_or((body, ""));

        let node = Node::tag_with(name, parse_attributes(raw_attrs), Vec::new());
        let too_deep = self.stack.len() >= self.max_depth;

        if self_closing || VOID_ELEMENTS.contains(&name) {
            if too_deep {
                #[cfg(feature = "tracing")]
                tracing::debug!(tag = name, position, "dropping void tag past depth limit");
                return Ok(());
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(tag = name, position, "void or self-closing tag");
            return self.append(node);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(tag = name, position, flattened = too_deep, "open tag");
        self.stack.push((node, position));
        Ok(())
    }

    fn close_tag(&mut self, name: &str, position: usize) -> Result<(), ParseError> {
        let flattened = self.stack.len() > self.max_depth;
        match self.stack.pop() {
            Some((Node::Tag(tag), _)) if tag.name == name => {
                #[cfg(feature = "tracing")]
                tracing::trace!(tag = name, position, "close tag");
                if flattened {
                    return Ok(());
                }
                self.append(Node::Tag(tag))
            }
            popped => Err(ParseError::MismatchedCloseTag {
                expected: popped.map(|(node, _)| match node {
                    Node::Tag(tag) => tag.name,
                    other => other.kind(),
                }),
                found: name.to_string(),
                position,
            }),
        }
    }

    /// Add a finished node to the innermost kept tag, or to the top level.
    fn append(&mut self, node: Node) -> Result<(), ParseError> {
        let container = self.stack.len().min(self.max_depth);
        match self.stack[..container].last_mut() {
            Some((Node::Tag(parent), _)) => {
                parent.children.push(node);
                Ok(())
            }
            Some(_) => Err(ParseError::InvalidNesting {
                position: self.cursor,
            }),
            None => {
                self.nodes.push(node);
                Ok(())
            }
        }
    }

    /// Resolve tags still open at end of input and return the top level.
    fn finish(mut self, unclosed: UnclosedTags) -> Result<Vec<Node>, ParseError> {
        while let Some((node, position)) = self.stack.pop() {
            match unclosed {
                UnclosedTags::Error => {
                    return Err(ParseError::UnclosedTag {
                        name: node.name().unwrap_or_default().to_string(),
                        position,
                    });
                }
                UnclosedTags::Ignore => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(tag = ?node.name(), position, "tag never closed");
                    if self.stack.len() < self.max_depth {
                        self.append(node)?;
                    }
                }
            }
        }
        Ok(self.nodes)
    }
}
