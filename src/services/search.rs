//! Full-text search service.
//!
//! A linear, case-insensitive substring scan over every readable document.
//! There is no index and no relevance ranking: results come back in topic
//! order, then document order, each classified as a title or content match.

use crate::models::{MAX_PREVIEW_CHARS, MatchType, SearchResult};
use crate::services::{BestEffort, TopicCatalog};
use crate::storage::DocumentStore;
use crate::{Error, Result};
use std::sync::Arc;

/// Maximum allowed query length in bytes.
pub const MAX_QUERY_LENGTH: usize = 10_240;

/// Maximum number of matching lines shown in a preview.
const MAX_PREVIEW_LINES: usize = 3;

/// Service for searching document names and bodies.
pub struct SearchService {
    store: Arc<dyn DocumentStore>,
}

impl SearchService {
    /// Creates a search service over a store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Searches every document for `query`, ignoring case.
    ///
    /// Documents that cannot be read are skipped without error. An empty
    /// query matches every document by title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the query exceeds
    /// [`MAX_QUERY_LENGTH`].
    pub fn search(&self, query: &str) -> Result<BestEffort<SearchResult>> {
        if query.len() > MAX_QUERY_LENGTH {
            return Err(Error::InvalidInput(format!(
                "query exceeds maximum length ({} > {MAX_QUERY_LENGTH} bytes)",
                query.len()
            )));
        }

        let query_lower = query.to_lowercase();
        let topics = TopicCatalog::new(Arc::clone(&self.store)).list_topics();

        let mut outcome = BestEffort::new();
        outcome.carry_skipped(&topics);

        for topic in topics.items() {
            for name in &topic.documents {
                let content = match self.store.read_document(&topic.name, name) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::debug!(topic = %topic.name, document = %name, error = %e, "Skipping unreadable document");
                        outcome.skip(format!("{}/{name}", topic.name), &e);
                        continue;
                    },
                };

                if let Some(match_type) = classify(name, &content, &query_lower) {
                    outcome.push(SearchResult {
                        topic: topic.name.clone(),
                        document: name.clone(),
                        match_type,
                        preview: build_preview(&content, &query_lower),
                    });
                }
            }
        }

        tracing::debug!(
            query,
            results = outcome.len(),
            skipped = outcome.skipped().len(),
            "Search complete"
        );

        Ok(outcome)
    }
}

/// Classifies a document against a lowercase query.
///
/// A name match wins over a body match.
fn classify(name: &str, content: &str, query_lower: &str) -> Option<MatchType> {
    if name.to_lowercase().contains(query_lower) {
        Some(MatchType::Title)
    } else if content.to_lowercase().contains(query_lower) {
        Some(MatchType::Content)
    } else {
        None
    }
}

/// Builds a search preview.
///
/// Takes the first three lines whose lowercase form contains `query_lower`,
/// joined by newlines. With no matching line (a title-only match) the raw
/// content is used instead. Either way the preview is cut to
/// [`MAX_PREVIEW_CHARS`] characters.
#[must_use]
pub fn build_preview(content: &str, query_lower: &str) -> String {
    let matching: Vec<&str> = content
        .split('\n')
        .filter(|line| line.to_lowercase().contains(query_lower))
        .take(MAX_PREVIEW_LINES)
        .collect();

    if matching.is_empty() {
        truncate_chars(content, MAX_PREVIEW_CHARS)
    } else {
        truncate_chars(&matching.join("\n"), MAX_PREVIEW_CHARS)
    }
}

/// Returns at most `max_chars` characters of `s`.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.char_indices()
        .nth(max_chars)
        .map_or_else(|| s.to_string(), |(end, _)| s[..end].to_string())
}
