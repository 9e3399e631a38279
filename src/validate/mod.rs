//! Field validators
//!
//! Every validator takes one decoded [`Value`] and answers valid or invalid.
//! Malformed or wrongly typed input is an ordinary `false`; nothing here
//! returns an error or panics. Rejection reasons go to the debug log only.

mod composite;
mod primitive;
mod structural;

pub use composite::*;
pub use primitive::*;
pub use structural::*;

use crate::manifest::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown validator: {0}")]
pub struct UnknownValidator(pub String);

/// Named field validators, selectable from configuration or the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    Capabilities,
    Categories,
    Timestamp,
    Semver,
    ListOfStrings,
    Icon,
    Maintainers,
    Links,
}

impl Validator {
    pub const ALL: [Validator; 8] = [
        Self::Capabilities,
        Self::Categories,
        Self::Timestamp,
        Self::Semver,
        Self::ListOfStrings,
        Self::Icon,
        Self::Maintainers,
        Self::Links,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Capabilities => "capabilities",
            Self::Categories => "categories",
            Self::Timestamp => "timestamp",
            Self::Semver => "semver",
            Self::ListOfStrings => "list_of_strings",
            Self::Icon => "icon",
            Self::Maintainers => "maintainers",
            Self::Links => "links",
        }
    }

    pub fn check(&self, value: &Value) -> bool {
        match self {
            Self::Capabilities => validate_capabilities(value),
            Self::Categories => validate_categories(value),
            Self::Timestamp => validate_timestamp(value),
            Self::Semver => validate_semver(value),
            Self::ListOfStrings => validate_list_of_strings(value),
            Self::Icon => validate_icon(value),
            Self::Maintainers => validate_maintainers(value),
            Self::Links => validate_links(value),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Validator {
    type Err = UnknownValidator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|validator| validator.name() == s)
            .ok_or_else(|| UnknownValidator(s.to_string()))
    }
}
