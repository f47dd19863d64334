//! Filesystem-based document store.
//!
//! Layout, relative to the content root:
//!
//! ```text
//! content/
//! ├── index.md              optional overview
//! └── topics/
//!     ├── faq/
//!     │   ├── billing.md
//!     │   └── shipping.md
//!     └── guides/
//!         └── setup.md
//! ```
//!
//! # Security
//!
//! Topic and document names arrive from tool arguments. They are validated
//! before any path is built, so a request can never read outside the topics
//! directory: names with separators, NUL, or `.`/`..` are reported as not
//! found.

use crate::storage::traits::DocumentStore;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory, under the content root, that holds topic directories.
pub const DEFAULT_TOPICS_DIR: &str = "topics";

/// Default overview file name at the content root.
pub const DEFAULT_OVERVIEW_FILE: &str = "index.md";

/// Default document file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Filesystem-based document store.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    /// Root of the content tree.
    content_root: PathBuf,
    /// Directory containing one subdirectory per topic.
    topics_path: PathBuf,
    /// Overview document path.
    overview_path: PathBuf,
    /// Recognized document extension, without the dot.
    extension: String,
}

impl FilesystemStore {
    /// Creates a store rooted at `content_root` with the default layout.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        let content_root = content_root.into();
        Self {
            topics_path: content_root.join(DEFAULT_TOPICS_DIR),
            overview_path: content_root.join(DEFAULT_OVERVIEW_FILE),
            extension: DEFAULT_EXTENSION.to_string(),
            content_root,
        }
    }

    /// Sets the topics directory, relative to the content root.
    #[must_use]
    pub fn with_topics_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.topics_path = self.content_root.join(dir);
        self
    }

    /// Sets the overview file, relative to the content root.
    #[must_use]
    pub fn with_overview_file(mut self, file: impl AsRef<Path>) -> Self {
        self.overview_path = self.content_root.join(file);
        self
    }

    /// Sets the recognized document extension. A leading dot is ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Returns the directory holding topic directories.
    #[must_use]
    pub fn topics_path(&self) -> &Path {
        &self.topics_path
    }

    /// Returns the path of a topic directory, if the name is safe.
    fn topic_path(&self, topic: &str) -> Option<PathBuf> {
        is_safe_name(topic).then(|| self.topics_path.join(topic))
    }

    /// Returns the path of a document file, if both names are safe.
    fn document_path(&self, topic: &str, name: &str) -> Option<PathBuf> {
        if !is_safe_name(name) {
            return None;
        }
        self.topic_path(topic)
            .map(|dir| dir.join(format!("{name}.{}", self.extension)))
    }

    /// Extracts a document name from a file path with the recognized extension.
    fn document_name(&self, path: &Path) -> Option<String> {
        if path.extension().is_none_or(|ext| ext != self.extension.as_str()) {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() || stem.starts_with('.') {
            return None;
        }
        Some(stem.to_string())
    }
}

impl DocumentStore for FilesystemStore {
    fn list_topic_directories(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.topics_path).map_err(|e| Error::StoreUnavailable {
            path: self.topics_path.clone(),
            cause: e.to_string(),
        })?;

        let mut topics: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable topics entry");
                    None
                },
            })
            .filter(|path| path.is_dir())
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .filter(|name| !name.starts_with('.'))
            .collect();

        // read_dir order is platform-dependent
        topics.sort();
        Ok(topics)
    }

    fn list_document_names(&self, topic: &str) -> Result<Vec<String>> {
        let dir = self
            .topic_path(topic)
            .ok_or_else(|| Error::TopicNotFound(topic.to_string()))?;

        let entries = fs::read_dir(&dir).map_err(|e| {
            tracing::debug!(topic, error = %e, "Topic directory unreadable");
            Error::TopicNotFound(topic.to_string())
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    tracing::debug!(topic, error = %e, "Skipping unreadable document entry");
                    None
                },
            })
            .filter(|path| path.is_file())
            .filter_map(|path| self.document_name(&path))
            .collect();

        names.sort();
        Ok(names)
    }

    fn read_document(&self, topic: &str, name: &str) -> Result<String> {
        let not_found = || Error::DocumentNotFound {
            topic: topic.to_string(),
            document: name.to_string(),
        };

        let path = self.document_path(topic, name).ok_or_else(not_found)?;

        fs::read_to_string(&path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "Document unreadable");
            not_found()
        })
    }

    fn read_overview(&self) -> Result<Option<String>> {
        if !self.overview_path.is_file() {
            return Ok(None);
        }

        fs::read_to_string(&self.overview_path)
            .map(Some)
            .map_err(|e| Error::OperationFailed {
                operation: "read_overview".to_string(),
                cause: format!("{}: {e}", self.overview_path.display()),
            })
    }
}

/// Checks if a topic or document name is safe to join onto a path.
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator or NUL.
#[must_use]
pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 255
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn shelf() -> (TempDir, FilesystemStore) {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "topics/faq/billing.md", "Billing cycles run monthly.\n");
        write(dir.path(), "topics/faq/shipping.md", "We ship worldwide.");
        write(dir.path(), "topics/faq/notes.txt", "not a document");
        write(dir.path(), "topics/guides/setup.md", "  Install it.  ");
        fs::create_dir_all(dir.path().join("topics/empty")).unwrap();
        let store = FilesystemStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_list_topic_directories() {
        let (_dir, store) = shelf();
        let topics = store.list_topic_directories().unwrap();
        assert_eq!(topics, vec!["empty", "faq", "guides"]);
    }

    #[test]
    fn test_list_topic_directories_ignores_files_and_hidden() {
        let (dir, store) = shelf();
        write(dir.path(), "topics/stray.md", "not a topic");
        fs::create_dir_all(dir.path().join("topics/.git")).unwrap();

        let topics = store.list_topic_directories().unwrap();
        assert_eq!(topics, vec!["empty", "faq", "guides"]);
    }

    #[test]
    fn test_missing_topics_dir_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(dir.path());

        let result = store.list_topic_directories();
        assert!(matches!(result, Err(Error::StoreUnavailable { .. })));
    }

    #[test]
    fn test_list_document_names_strips_extension() {
        let (_dir, store) = shelf();
        let names = store.list_document_names("faq").unwrap();
        assert_eq!(names, vec!["billing", "shipping"]);
        assert!(store.list_document_names("empty").unwrap().is_empty());
    }

    #[test]
    fn test_list_document_names_missing_topic() {
        let (_dir, store) = shelf();
        let result = store.list_document_names("nope");
        assert!(matches!(result, Err(Error::TopicNotFound(t)) if t == "nope"));
    }

    #[test]
    fn test_read_document_returns_raw_text() {
        let (_dir, store) = shelf();
        let content = store.read_document("guides", "setup").unwrap();
        assert_eq!(content, "  Install it.  ");
    }

    #[test]
    fn test_read_document_missing() {
        let (_dir, store) = shelf();
        let err = store.read_document("faq", "missing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Document 'missing' not found in topic 'faq'"
        );
    }

    #[test]
    fn test_path_traversal_rejected() {
        let (dir, store) = shelf();
        write(dir.path(), "secret.md", "top secret");

        assert!(store.read_document("..", "secret").is_err());
        assert!(store.read_document("faq", "../../secret").is_err());
        assert!(store.list_document_names("../..").is_err());
        assert!(store.list_document_names("").is_err());
    }

    #[test]
    fn test_custom_layout() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "kb/faq/billing.txt", "Monthly.");
        write(dir.path(), "README.txt", "Overview");

        let store = FilesystemStore::new(dir.path())
            .with_topics_dir("kb")
            .with_overview_file("README.txt")
            .with_extension(".txt");

        assert_eq!(store.list_topic_directories().unwrap(), vec!["faq"]);
        assert_eq!(store.list_document_names("faq").unwrap(), vec!["billing"]);
        assert_eq!(store.read_document("faq", "billing").unwrap(), "Monthly.");
        assert_eq!(store.read_overview().unwrap().as_deref(), Some("Overview"));
    }

    #[test]
    fn test_read_overview() {
        let (dir, store) = shelf();
        assert!(store.read_overview().unwrap().is_none());

        write(dir.path(), "index.md", "\n# Welcome\n");
        assert_eq!(store.read_overview().unwrap().as_deref(), Some("\n# Welcome\n"));
    }

    #[test]
    fn test_is_safe_name() {
        assert!(is_safe_name("faq"));
        assert!(is_safe_name("getting-started_v2"));
        assert!(is_safe_name("with space"));
        assert!(!is_safe_name(""));
        assert!(!is_safe_name("."));
        assert!(!is_safe_name(".."));
        assert!(!is_safe_name("a/b"));
        assert!(!is_safe_name("a\\b"));
        assert!(!is_safe_name("a\0b"));
    }
}
