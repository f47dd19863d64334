//! Business logic services.
//!
//! Services sit on top of a [`DocumentStore`] and provide the operations the
//! tools expose: catalog listing and fetches, search, and the index.

mod best_effort;
mod catalog;
mod index;
mod search;

pub use best_effort::{BestEffort, Skipped};
pub use catalog::TopicCatalog;
pub use index::{INDEX_HEADER, IndexBuilder};
pub use search::{MAX_QUERY_LENGTH, SearchService, build_preview};

use crate::config::DocshelfConfig;
use crate::storage::{DocumentStore, FilesystemStore};
use std::sync::Arc;

/// Owns the shared document store and hands out services bound to it.
///
/// Cloning is cheap; every clone reads the same store.
#[derive(Clone)]
pub struct ServiceContainer {
    store: Arc<dyn DocumentStore>,
}

impl ServiceContainer {
    /// Creates a container over an existing store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Creates a container over any store value.
    #[must_use]
    pub fn with_store(store: impl DocumentStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }

    /// Creates a filesystem-backed container from configuration.
    #[must_use]
    pub fn from_config(config: &DocshelfConfig) -> Self {
        let store = FilesystemStore::new(&config.content_root)
            .with_topics_dir(&config.topics_dir)
            .with_overview_file(&config.overview_file)
            .with_extension(&config.document_extension);

        tracing::debug!(
            content_root = %config.content_root.display(),
            topics = %store.topics_path().display(),
            "Using filesystem document store"
        );

        Self::with_store(store)
    }

    /// Returns the topic catalog.
    #[must_use]
    pub fn catalog(&self) -> TopicCatalog {
        TopicCatalog::new(Arc::clone(&self.store))
    }

    /// Returns the search service.
    #[must_use]
    pub fn search(&self) -> SearchService {
        SearchService::new(Arc::clone(&self.store))
    }

    /// Returns the index builder.
    #[must_use]
    pub fn index(&self) -> IndexBuilder {
        IndexBuilder::new(Arc::clone(&self.store))
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer").finish_non_exhaustive()
    }
}
