//! Bundlecheck - operator bundle manifest field validation
//!
//! Validates individual metadata fields of a decoded manifest: capability
//! levels, categories, timestamps, versions, icons, maintainers and links.

pub mod check;
pub mod cli;
pub mod manifest;
pub mod settings;
pub mod validate;
pub mod vocabulary;

pub use manifest::{Manifest, RecordSchema, Value, ValueKind};
pub use validate::Validator;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "bundlecheck";
