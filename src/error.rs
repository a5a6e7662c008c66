/// Errors that can occur while parsing an HTML fragment.
///
/// Every variant is fatal: parsing stops at the first problem and no partial
/// tree is returned. Positions are byte offsets of the offending `<`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A `<` with no `>` anywhere after it.
    #[error("invalid HTML: could not find end of tag ('>') at position {position}")]
    UnterminatedTag { position: usize },

    /// A closing tag that does not match the innermost open tag.
    #[error(
        "invalid HTML: the end tag '{found}' does not match the start tag '{}' at position {position}",
        .expected.as_deref().unwrap_or("MISSING")
    )]
    MismatchedCloseTag {
        /// Name of the innermost open tag, or `None` when nothing was open.
        expected: Option<String>,
        found: String,
        position: usize,
    },

    /// A child was attached to something that cannot hold children.
    #[error("invalid HTML: cannot add a child node to a non-tag node at position {position}")]
    InvalidNesting { position: usize },

    /// A tag still open at end of input, under [`UnclosedTags::Error`](crate::UnclosedTags::Error).
    #[error("invalid HTML: the tag '{name}' opened at position {position} is never closed")]
    UnclosedTag { name: String, position: usize },
}

impl ParseError {
    /// Byte offset in the input where the problem was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnterminatedTag { position }
            | ParseError::MismatchedCloseTag { position, .. }
            | ParseError::InvalidNesting { position }
            | ParseError::UnclosedTag { position, .. } => *position,
        }
    }
}
