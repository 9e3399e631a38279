//! User-supplied settings files

use super::defaults::CheckSettings;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Settings file defines no [[field]] rules")]
    NoRules,
}

/// Load settings from a TOML file
///
/// ```toml
/// [[field]]
/// path = "spec.version"
/// validator = "semver"
/// required = true
/// ```
pub fn load_settings(path: &Path) -> Result<CheckSettings, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parse settings from a TOML string
pub fn parse_settings(content: &str) -> Result<CheckSettings, SettingsError> {
    let settings: CheckSettings = toml::from_str(content)?;

    if settings.rules.is_empty() {
        return Err(SettingsError::NoRules);
    }

    Ok(settings)
}

/// Load settings from `path` if given, otherwise use the defaults
pub fn load_or_default(path: Option<&Path>) -> Result<CheckSettings, SettingsError> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(CheckSettings::default()),
    }
}
