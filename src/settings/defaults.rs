//! Default field rules for ClusterServiceVersion manifests

use crate::check::FieldRule;
use crate::validate::Validator;
use serde::{Deserialize, Serialize};

/// The rule set applied to a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSettings {
    #[serde(rename = "field", default)]
    pub rules: Vec<FieldRule>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

/// Standard locations of the validated fields in a CSV
pub fn default_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new("metadata.annotations.capabilities", Validator::Capabilities, true),
        FieldRule::new("metadata.annotations.categories", Validator::Categories, false),
        FieldRule::new("metadata.annotations.createdAt", Validator::Timestamp, false),
        FieldRule::new("spec.version", Validator::Semver, true),
        FieldRule::new("spec.icon", Validator::Icon, false),
        FieldRule::new("spec.maintainers", Validator::Maintainers, false),
        FieldRule::new("spec.links", Validator::Links, false),
        FieldRule::new("spec.keywords", Validator::ListOfStrings, false),
    ]
}
