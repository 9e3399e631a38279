//! Per-field checks over a whole manifest

use crate::manifest::Manifest;
use crate::validate::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which validator applies to which manifest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub path: String,
    pub validator: Validator,
    #[serde(default)]
    pub required: bool,
}

impl FieldRule {
    pub fn new(path: &str, validator: Validator, required: bool) -> Self {
        Self {
            path: path.to_string(),
            validator,
            required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
    /// Required field absent
    Missing,
    /// Optional field absent
    Skipped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Missing => "missing",
            Self::Skipped => "skipped",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub path: String,
    pub validator: Validator,
    pub outcome: Outcome,
}

impl FieldReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Valid | Outcome::Skipped)
    }
}

/// Run every rule against the manifest, in rule order
pub fn check_manifest(manifest: &Manifest, rules: &[FieldRule]) -> Vec<FieldReport> {
    rules
        .iter()
        .map(|rule| {
            let outcome = match manifest.lookup(&rule.path) {
                Some(value) if rule.validator.check(value) => Outcome::Valid,
                Some(_) => Outcome::Invalid,
                None if rule.required => Outcome::Missing,
                None => Outcome::Skipped,
            };
            log::debug!("{} ({}): {}", rule.path, rule.validator, outcome);

            FieldReport {
                path: rule.path.clone(),
                validator: rule.validator,
                outcome,
            }
        })
        .collect()
}
