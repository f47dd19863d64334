//! Document store trait.

use crate::Result;

/// Trait for document store backends.
///
/// A store is the only source of truth for topics and documents. It is
/// read-only from docshelf's point of view and must not cache: callers rely
/// on every call reflecting the current state of storage.
pub trait DocumentStore: Send + Sync {
    /// Lists topic identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StoreUnavailable`] if the topic location is
    /// missing or unreadable.
    fn list_topic_directories(&self) -> Result<Vec<String>>;

    /// Lists the document names of a topic, extension stripped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TopicNotFound`] if the topic does not exist.
    fn list_document_names(&self, topic: &str) -> Result<Vec<String>>;

    /// Reads the raw text of a document. Callers trim it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DocumentNotFound`] if the document is absent
    /// or unreadable.
    fn read_document(&self, topic: &str, name: &str) -> Result<String>;

    /// Reads the optional overview document at the store root.
    ///
    /// Returns `Ok(None)` when no overview exists.
    fn read_overview(&self) -> Result<Option<String>>;
}
