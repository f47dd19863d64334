//! Document values.

/// A single document read from the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Topic the document belongs to.
    pub topic: String,
    /// Document name (file name without extension).
    pub name: String,
    /// Stored text with leading and trailing whitespace removed.
    pub content: String,
}

impl Document {
    /// Creates a document, trimming the raw stored text.
    #[must_use]
    pub fn from_raw(topic: impl Into<String>, name: impl Into<String>, raw: &str) -> Self {
        Self {
            topic: topic.into(),
            name: name.into(),
            content: raw.trim().to_string(),
        }
    }
}

/// Every document of one topic, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDocuments {
    /// Topic name.
    pub topic: String,
    /// Documents in the topic.
    pub documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_trims_whitespace() {
        let doc = Document::from_raw("faq", "billing", "\n\n  Billing cycles run monthly.\n\t ");
        assert_eq!(doc.topic, "faq");
        assert_eq!(doc.name, "billing");
        assert_eq!(doc.content, "Billing cycles run monthly.");
    }

    #[test]
    fn test_from_raw_keeps_inner_whitespace() {
        let doc = Document::from_raw("faq", "steps", "1. one\n\n2. two\n");
        assert_eq!(doc.content, "1. one\n\n2. two");
    }
}
