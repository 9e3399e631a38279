//! Check command implementation

use crate::check::{FieldReport, Outcome, check_manifest};
use crate::manifest::{ManifestError, parse_manifest_file};
use crate::settings::{SettingsError, load_or_default};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckCommandError {
    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    #[error("Invalid value: {0}")]
    ValueError(#[from] serde_json::Error),

    #[error("Unknown vocabulary: {0}")]
    UnknownVocabulary(String),
}

/// Check a manifest file, printing one line per rule.
///
/// Returns whether every field passed.
pub fn check_manifest_file(
    manifest_path: &Path,
    config: Option<&Path>,
) -> Result<bool, CheckCommandError> {
    let settings = load_or_default(config)?;
    let manifest = parse_manifest_file(manifest_path)?;
    log::info!(
        "Checking {} against {} rules",
        manifest_path.display(),
        settings.rules.len()
    );

    let reports = check_manifest(&manifest, &settings.rules);
    for report in &reports {
        println!("{}", format_report(report));
    }

    let failed = reports.iter().filter(|report| !report.passed()).count();
    println!();
    if failed == 0 {
        println!("{}: all fields valid", manifest_path.display());
    } else {
        println!("{}: {} field(s) failed", manifest_path.display(), failed);
    }

    Ok(failed == 0)
}

fn format_report(report: &FieldReport) -> String {
    let mark = match report.outcome {
        Outcome::Valid => "ok  ",
        Outcome::Skipped => "--  ",
        Outcome::Invalid | Outcome::Missing => "FAIL",
    };
    format!(
        "  {} {:<36} {:<16} {}",
        mark, report.path, report.validator, report.outcome
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Validator;

    #[test]
    fn failing_reports_are_marked() {
        let line = format_report(&FieldReport {
            path: "spec.version".into(),
            validator: Validator::Semver,
            outcome: Outcome::Missing,
        });
        assert!(line.contains("FAIL"));
        assert!(line.contains("spec.version"));
        assert!(line.trim_end().ends_with("missing"));
    }
}
