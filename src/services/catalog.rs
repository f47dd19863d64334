//! Topic catalog service.
//!
//! Enumerates topics and serves targeted fetches. Listings are recomputed on
//! every call; there is no cache to go stale.

use crate::models::{Document, Topic, TopicDocuments};
use crate::services::BestEffort;
use crate::storage::DocumentStore;
use crate::{Error, Result};
use std::sync::Arc;

/// Service for listing topics and fetching documents.
pub struct TopicCatalog {
    store: Arc<dyn DocumentStore>,
}

impl TopicCatalog {
    /// Creates a catalog over a store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Lists every topic with its document names.
    ///
    /// Topics without documents are included with a count of zero. A topic
    /// whose listing fails is skipped; an unavailable store yields an empty
    /// outcome. This never fails.
    pub fn list_topics(&self) -> BestEffort<Topic> {
        let mut outcome = BestEffort::new();

        let topic_names = match self.store.list_topic_directories() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "Content store unavailable, listing no topics");
                return outcome;
            },
        };

        for name in topic_names {
            match self.store.list_document_names(&name) {
                Ok(documents) => outcome.push(Topic::new(name, documents)),
                Err(e) => {
                    tracing::warn!(topic = %name, error = %e, "Skipping unreadable topic");
                    outcome.skip(name, &e);
                },
            }
        }

        outcome
    }

    /// Fetches one document, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentNotFound`] if the document is absent or
    /// unreadable.
    pub fn get_document(&self, topic: &str, name: &str) -> Result<Document> {
        let raw = self.store.read_document(topic, name)?;
        Ok(Document::from_raw(topic, name, &raw))
    }

    /// Fetches every document of a topic, in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TopicNotFound`] if the topic does not exist, and also
    /// if one of its documents disappears or becomes unreadable mid-fetch. A
    /// partial topic is never returned.
    pub fn get_topic(&self, topic: &str) -> Result<TopicDocuments> {
        let names = self.store.list_document_names(topic)?;

        let documents = names
            .iter()
            .map(|name| {
                self.store
                    .read_document(topic, name)
                    .map(|raw| Document::from_raw(topic, name.as_str(), &raw))
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                tracing::warn!(topic, error = %e, "Topic fetch aborted");
                Error::TopicNotFound(topic.to_string())
            })?;

        Ok(TopicDocuments {
            topic: topic.to_string(),
            documents,
        })
    }
}
