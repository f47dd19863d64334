//! Index overview service.

use crate::services::TopicCatalog;
use crate::storage::DocumentStore;
use std::fmt::Write as _;
use std::sync::Arc;

/// Heading of a synthesized index.
pub const INDEX_HEADER: &str = "# Information Index\n\nAvailable topics:\n\n";

/// Builds the shelf overview.
pub struct IndexBuilder {
    store: Arc<dyn DocumentStore>,
}

impl IndexBuilder {
    /// Creates an index builder over a store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns the overview text.
    ///
    /// A stored overview document wins and is returned trimmed. Without one
    /// (or if it cannot be read) the index is synthesized from the catalog:
    ///
    /// ```text
    /// # Information Index
    ///
    /// Available topics:
    ///
    /// ## faq
    /// 2 document(s): billing, shipping
    /// ```
    pub fn get_index(&self) -> String {
        match self.store.read_overview() {
            Ok(Some(overview)) => return overview.trim().to_string(),
            Ok(None) => {},
            Err(e) => tracing::debug!(error = %e, "Overview unreadable, synthesizing index"),
        }

        let topics = TopicCatalog::new(Arc::clone(&self.store)).list_topics();

        let mut index = INDEX_HEADER.to_string();
        for topic in topics.items() {
            let _ = write!(
                index,
                "## {}\n{} document(s): {}\n\n",
                topic.name,
                topic.document_count(),
                topic.documents.join(", ")
            );
        }
        index
    }
}
