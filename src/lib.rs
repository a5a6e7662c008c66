// fragdown: lenient HTML fragment to Markdown converter.
//
// Architecture:
//   HTML string → parse (tokenize + unescape + simplify) → node tree → stringify → Markdown
//
// The parser is deliberately small: no HTML5 tree construction, no implied end
// tags, no DOCTYPE or script handling. It targets snippets such as email
// bodies and scraped fragments.

mod error;
pub mod node;
mod parse;
mod stringify;

pub use error::ParseError;
pub use node::{Attributes, Node, Tag, Text, Visit};
pub use parse::attributes::parse_attributes;
pub use parse::entities::unescape;
pub use parse::{parse_html, parse_html_with};
pub use stringify::render;

/// Default for [`Options::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What to do with tags that are still open at the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnclosedTags {
    /// Keep them, with the children collected so far (default).
    #[default]
    Ignore,
    /// Fail with [`ParseError::UnclosedTag`].
    Error,
}

/// Conversion options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Handling of tags left open at the end of input.
    pub unclosed_tags: UnclosedTags,
    /// Deepest tag nesting kept in the tree. Tags opened below this depth
    /// lose their markup; their text goes to the deepest kept tag.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unclosed_tags: UnclosedTags::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how unclosed tags are handled.
    pub fn with_unclosed_tags(mut self, unclosed_tags: UnclosedTags) -> Self {
        self.unclosed_tags = unclosed_tags;
        self
    }

    /// Set the deepest tag nesting kept in the tree.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Convert an HTML fragment to Markdown.
///
/// Leading and trailing whitespace is trimmed from the result.
///
/// # Examples
///
/// ```
/// let md = fragdown::html_to_markdown("<h1>Test</h1><p>This is a test</p>").unwrap();
/// assert_eq!(md, "# Test\n\nThis is a test");
/// ```
pub fn html_to_markdown(html: &str) -> Result<String, ParseError> {
    convert_with(html, &Options::default())
}

/// Alias for [`html_to_markdown`].
pub fn convert(html: &str) -> Result<String, ParseError> {
    html_to_markdown(html)
}

/// Convert an HTML fragment to Markdown with custom options.
///
/// # Examples
///
/// ```
/// use fragdown::{convert_with, Options, ParseError, UnclosedTags};
///
/// let options = Options::new().with_unclosed_tags(UnclosedTags::Error);
/// let err = convert_with("<p>open", &options).unwrap_err();
/// assert!(matches!(err, ParseError::UnclosedTag { .. }));
/// ```
pub fn convert_with(html: &str, options: &Options) -> Result<String, ParseError> {
    let nodes = parse_html_with(html, options)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(input_len = html.len(), nodes = nodes.len(), "parsed fragment");

    let markdown = stringify::render_with_depth(&nodes, options.max_depth);
    Ok(markdown.trim_matches(node::is_blank_char).to_string())
}
