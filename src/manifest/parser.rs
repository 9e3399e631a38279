//! Manifest parsing functions

use super::value::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse manifest TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),

    #[error("Manifest root must be a mapping, found {0}")]
    NotAMapping(String),
}

/// On-disk encoding of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick a format from the file extension, falling back to YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// A decoded manifest document
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    pub fn new(root: Value) -> Result<Self, ManifestError> {
        match root {
            Value::Dict(_) => Ok(Self { root }),
            other => Err(ManifestError::NotAMapping(other.kind().to_string())),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a field by dot-separated path, e.g. `spec.icon`
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |current, segment| current.as_dict()?.get(segment))
    }
}

/// Parse a manifest from a file, choosing the decoder by extension
pub fn parse_manifest_file(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest_str(&content, ManifestFormat::from_path(path))
}

/// Parse a manifest from a string
pub fn parse_manifest_str(content: &str, format: ManifestFormat) -> Result<Manifest, ManifestError> {
    let root = match format {
        ManifestFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
            Value::try_from(yaml)?
        }
        ManifestFormat::Json => {
            let json: serde_json::Value = serde_json::from_str(content)?;
            Value::from(json)
        }
        ManifestFormat::Toml => {
            let table: toml::Table = toml::from_str(content)?;
            Value::from(toml::Value::Table(table))
        }
    };
    Manifest::new(root)
}
