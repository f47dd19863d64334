//! Topic listing entries.

/// A topic and the names of the documents it contains.
///
/// Built fresh by every catalog query and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Topic identifier (the directory name, case-sensitive).
    pub name: String,
    /// Document names in store enumeration order.
    pub documents: Vec<String>,
}

impl Topic {
    /// Creates a topic entry.
    #[must_use]
    pub fn new(name: impl Into<String>, documents: Vec<String>) -> Self {
        Self {
            name: name.into(),
            documents,
        }
    }

    /// Returns the number of documents in the topic.
    #[must_use]
    pub const fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the topic has no documents.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
