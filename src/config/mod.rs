//! Configuration management.
//!
//! Settings come from a TOML file, then command-line/environment overrides
//! are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::storage::{DEFAULT_EXTENSION, DEFAULT_OVERVIEW_FILE, DEFAULT_TOPICS_DIR};

/// Default content root, relative to the working directory.
const DEFAULT_CONTENT_ROOT: &str = "content";

/// Main configuration for docshelf.
#[derive(Debug, Clone)]
pub struct DocshelfConfig {
    /// Root of the content tree.
    pub content_root: PathBuf,
    /// Directory under the content root holding one subdirectory per topic.
    pub topics_dir: PathBuf,
    /// Overview document under the content root.
    pub overview_file: PathBuf,
    /// Recognized document extension, without the dot.
    pub document_extension: String,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging settings from the config file.
///
/// Unset fields fall back to the defaults in
/// [`crate::observability::LoggingConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Filter directive, e.g. `docshelf=debug`.
    pub filter: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Content root.
    pub content_root: Option<String>,
    /// Topics directory.
    pub topics_dir: Option<String>,
    /// Overview file.
    pub overview_file: Option<String>,
    /// Document extension.
    pub document_extension: Option<String>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for DocshelfConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            topics_dir: PathBuf::from(DEFAULT_TOPICS_DIR),
            overview_file: PathBuf::from(DEFAULT_OVERVIEW_FILE),
            document_extension: DEFAULT_EXTENSION.to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl DocshelfConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML.
    pub fn parse(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/docshelf/` on macOS)
    /// 2. XDG config dir (`~/.config/docshelf/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the first config file found cannot be read or
    /// parsed. Callers decide whether to fall back to defaults.
    pub fn load_default() -> crate::Result<Self> {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Ok(Self::default());
        };

        Self::load_first(&[
            base_dirs.config_dir().join("docshelf").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("docshelf")
                .join("config.toml"),
        ])
    }

    /// Loads the first existing file among `candidates`, or the defaults.
    fn load_first(candidates: &[PathBuf]) -> crate::Result<Self> {
        candidates
            .iter()
            .find(|p| p.exists())
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from_file(path))
    }

    /// Converts a `ConfigFile` to `DocshelfConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(root) = file.content_root {
            config.content_root = PathBuf::from(root);
        }
        if let Some(dir) = file.topics_dir {
            config.topics_dir = PathBuf::from(dir);
        }
        if let Some(overview) = file.overview_file {
            config.overview_file = PathBuf::from(overview);
        }
        if let Some(ext) = file.document_extension {
            config.document_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Sets the content root.
    #[must_use]
    pub fn with_content_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_root = path.into();
        self
    }
}
