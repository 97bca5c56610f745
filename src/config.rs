//! Configuration loaded from `typegraph.toml`.
//!
//! ```toml
//! [filter]
//! exclude = ["^std\\.", "^core\\."]
//!
//! [output]
//! style = "uml"
//! ranked = true
//! format = "dot"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::dot::DotStyle;
use crate::error::{Result, TypegraphError};

/// Default config file name, looked up next to the manifest.
pub const CONFIG_FILE_NAME: &str = "typegraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypegraphConfig {
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Vertices whose names match any of these patterns are dropped.
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub style: DotStyle,
    /// Rank dependency graphs by in-degree.
    pub ranked: bool,
    pub format: OutputFormat,
}

/// What the CLI writes to its output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Dot,
    Json,
}

impl TypegraphConfig {
    /// Load config, falling back to defaults when the file is missing or
    /// malformed.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring config");
                Self::default()
            }
        }
    }

    /// Load config. A missing file yields the defaults.
    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path).map_err(|source| TypegraphError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&source).map_err(|source| TypegraphError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
