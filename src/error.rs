//! Error types for typegraph.
//!
//! Graph construction, filtering, and emission are infallible in-memory
//! transforms; errors come from loading manifests and configuration, from
//! compiling exclusion patterns, and from the output sink.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading inputs or writing output.
#[derive(Debug, Error)]
pub enum TypegraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("module `{0}` is declared more than once")]
    DuplicateModule(String),

    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),

    #[error("unknown module `{name}` referenced by `{referrer}`")]
    UnknownModule { name: String, referrer: String },

    #[error("unknown type `{name}` referenced by `{referrer}`")]
    UnknownType { name: String, referrer: String },

    #[error("invalid exclusion pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, TypegraphError>;
