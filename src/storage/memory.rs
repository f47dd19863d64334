//! In-memory document store.
//!
//! Provides a non-persistent implementation of [`DocumentStore`] for unit
//! tests and for embedding docshelf with a shelf assembled in code.
//! Topics and documents keep insertion order, which stands in for a
//! filesystem's enumeration order.

use crate::storage::traits::DocumentStore;
use crate::{Error, Result};
use std::path::PathBuf;

/// A stored document. `None` content simulates a file that cannot be read.
#[derive(Debug, Clone)]
struct MemoryDocument {
    name: String,
    content: Option<String>,
}

#[derive(Debug, Clone)]
struct MemoryTopic {
    name: String,
    documents: Vec<MemoryDocument>,
    unreadable: bool,
}

/// In-memory document store.
///
/// # Example
///
/// ```rust
/// use docshelf::storage::{DocumentStore, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with_document("faq", "billing", "Billing cycles run monthly.")
///     .with_document("faq", "shipping", "We ship worldwide.");
///
/// assert_eq!(store.list_topic_directories().unwrap(), vec!["faq"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    topics: Vec<MemoryTopic>,
    overview: Option<String>,
    unavailable: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty topic if it is not present yet.
    #[must_use]
    pub fn with_topic(mut self, topic: &str) -> Self {
        self.topic_mut(topic);
        self
    }

    /// Adds or replaces a document.
    #[must_use]
    pub fn with_document(mut self, topic: &str, name: &str, content: &str) -> Self {
        self.put(topic, name, Some(content.to_string()));
        self
    }

    /// Adds a document that is listed but fails to read.
    #[must_use]
    pub fn with_unreadable_document(mut self, topic: &str, name: &str) -> Self {
        self.put(topic, name, None);
        self
    }

    /// Adds a topic whose document listing fails.
    #[must_use]
    pub fn with_unreadable_topic(mut self, topic: &str) -> Self {
        self.topic_mut(topic).unreadable = true;
        self
    }

    /// Sets the overview document.
    #[must_use]
    pub fn with_overview(mut self, content: &str) -> Self {
        self.overview = Some(content.to_string());
        self
    }

    /// Makes topic enumeration fail, as if the store root were unreadable.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn topic_mut(&mut self, topic: &str) -> &mut MemoryTopic {
        let index = if let Some(index) = self.topics.iter().position(|t| t.name == topic) {
            index
        } else {
            self.topics.push(MemoryTopic {
                name: topic.to_string(),
                documents: Vec::new(),
                unreadable: false,
            });
            self.topics.len() - 1
        };
        &mut self.topics[index]
    }

    fn put(&mut self, topic: &str, name: &str, content: Option<String>) {
        let topic = self.topic_mut(topic);
        if let Some(doc) = topic.documents.iter_mut().find(|d| d.name == name) {
            doc.content = content;
        } else {
            topic.documents.push(MemoryDocument {
                name: name.to_string(),
                content,
            });
        }
    }

    fn topic(&self, topic: &str) -> Option<&MemoryTopic> {
        self.topics.iter().find(|t| t.name == topic)
    }
}

impl DocumentStore for MemoryStore {
    fn list_topic_directories(&self) -> Result<Vec<String>> {
        if self.unavailable {
            return Err(Error::StoreUnavailable {
                path: PathBuf::from("memory"),
                cause: "store marked unavailable".to_string(),
            });
        }
        Ok(self.topics.iter().map(|t| t.name.clone()).collect())
    }

    fn list_document_names(&self, topic: &str) -> Result<Vec<String>> {
        match self.topic(topic) {
            Some(t) if !t.unreadable => Ok(t.documents.iter().map(|d| d.name.clone()).collect()),
            _ => Err(Error::TopicNotFound(topic.to_string())),
        }
    }

    fn read_document(&self, topic: &str, name: &str) -> Result<String> {
        self.topic(topic)
            .and_then(|t| t.documents.iter().find(|d| d.name == name))
            .and_then(|d| d.content.clone())
            .ok_or_else(|| Error::DocumentNotFound {
                topic: topic.to_string(),
                document: name.to_string(),
            })
    }

    fn read_overview(&self) -> Result<Option<String>> {
        Ok(self.overview.clone())
    }
}
