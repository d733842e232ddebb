//! Error types for i18n operations

use std::path::PathBuf;
use thiserror::Error;
use vitrine_config::ConfigError;

/// Errors raised while building or querying locale content.
///
/// Entity resolution never fails; every variant here comes from the
/// locale data store, its loaders, or configuration.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Content category outside `sections`, `pages` and `layouts`
    #[error("Unknown content category: {0}")]
    UnknownCategory(String),

    /// No document of any language is registered under the key
    #[error("No locale content registered for {key}")]
    ContentNotFound { key: String },

    /// The key exists but neither the requested nor the default language does
    #[error("No '{locale}' or '{default_language}' variant registered for {key}")]
    MissingDefaultVariant {
        key: String,
        locale: String,
        default_language: String,
    },

    /// A document could not be deserialized into the requested type
    #[error("Content {key} does not match the requested shape: {source}")]
    ContentShape {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A content file does not sit at `<locale>/<category>/<file>.json`
    #[error("Unexpected content path: {}", .0.display())]
    InvalidContentPath(PathBuf),

    /// IO error
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parse error
    #[error("Invalid content manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}
