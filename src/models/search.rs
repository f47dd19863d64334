//! Search result types.

use std::fmt;

/// Maximum preview length, in characters.
pub const MAX_PREVIEW_CHARS: usize = 200;

/// How a document matched a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// The query occurs in the document name.
    Title,
    /// The query occurs only in the document body.
    Content,
}

impl MatchType {
    /// Returns the match type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document that matched a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Topic containing the document.
    pub topic: String,
    /// Document name.
    pub document: String,
    /// Whether the name or only the body matched.
    pub match_type: MatchType,
    /// Context snippet, at most [`MAX_PREVIEW_CHARS`] characters.
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_display() {
        assert_eq!(MatchType::Title.to_string(), "title");
        assert_eq!(MatchType::Content.to_string(), "content");
        assert_eq!(format!("{}", MatchType::Content), MatchType::Content.as_str());
    }
}
