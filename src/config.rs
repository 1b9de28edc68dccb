//! Conversion settings, read from YAML
//!
//! ```yaml
//! node_attributes:    # layered over the built-in {x: 1, y: 1, size: 10}
//!   size: 4
//!   color: "#888"
//! keep_raw_source: false
//! pretty: true
//! ```

use crate::document::GraphBuilder;
use crate::graph::{is_reserved_attribute, Attributes, NodeDefaults};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: node attribute `{0}` is a reserved node field")]
    ReservedAttribute(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Extra or overriding default node attributes
    pub node_attributes: Attributes,
    /// Attach each source element to the record it produced
    pub keep_raw_source: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl SnapConfig {
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject node attributes that would shadow `id`, `label` or `rawSource`
    pub fn validate(&self) -> ConfigResult<()> {
        match self.node_attributes.keys().find(|key| is_reserved_attribute(key)) {
            Some(key) => Err(ConfigError::ReservedAttribute(key.clone())),
            None => Ok(()),
        }
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_yaml_str(&text)
    }

    /// Load `path` if given, else the default location if that file exists,
    /// else fall back to the built-in settings.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/snapgraph/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snapgraph").join("config.yaml"))
    }

    pub fn node_defaults(&self) -> NodeDefaults {
        NodeDefaults::default().merged(&self.node_attributes)
    }

    pub fn graph_builder(&self) -> GraphBuilder {
        GraphBuilder::new()
            .with_defaults(self.node_defaults())
            .keep_raw_source(self.keep_raw_source)
    }
}
