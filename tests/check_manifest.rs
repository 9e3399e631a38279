use bundlecheck::check::{Outcome, check_manifest};
use bundlecheck::manifest::parse_manifest_file;
use bundlecheck::settings::{CheckSettings, load_settings};
use bundlecheck::{Validator, Value};
use std::fs;
use tempfile::TempDir;

const ETCD_CSV: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: ClusterServiceVersion
metadata:
  name: etcdoperator.v0.9.4
  annotations:
    capabilities: Full Lifecycle
    categories: Database, Storage
    createdAt: 2019-02-28T01:03:00Z
spec:
  version: 0.9.4
  keywords: [etcd, key value, database]
  icon:
    - base64data: |
        iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk
        +M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==
      mediatype: image/png
  maintainers:
    - name: etcd Community
      email: etcd-operator@googlegroups.com
  links:
    - name: Blog
      url: https://coreos.com/etcd
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn complete_csv_passes_default_rules() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "etcd.clusterserviceversion.yaml", ETCD_CSV);

    let manifest = parse_manifest_file(&path).unwrap();
    let reports = check_manifest(&manifest, &CheckSettings::default().rules);

    for report in &reports {
        assert_eq!(report.outcome, Outcome::Valid, "{} failed", report.path);
    }
}

#[test]
fn broken_fields_are_reported_individually() {
    let dir = TempDir::new().unwrap();
    let broken = ETCD_CSV
        .replace("Full Lifecycle", "Fully Automatic")
        .replace("version: 0.9.4", "version: 0.9.4.1")
        .replace("mediatype: image/png", "mediatype: text/plain");
    let path = write(&dir, "broken.yaml", &broken);

    let manifest = parse_manifest_file(&path).unwrap();
    let failed: Vec<String> = check_manifest(&manifest, &CheckSettings::default().rules)
        .into_iter()
        .filter(|report| !report.passed())
        .map(|report| report.path)
        .collect();

    assert_eq!(
        failed,
        vec![
            "metadata.annotations.capabilities",
            "spec.version",
            "spec.icon",
        ]
    );
}

#[test]
fn toml_manifest_carries_native_timestamp() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "bundle.toml",
        r#"
[metadata.annotations]
capabilities = "Basic Install"
createdAt = 2023-08-17T12:00:00Z

[spec]
version = "1.0.0"
"#,
    );

    let manifest = parse_manifest_file(&path).unwrap();
    let created = manifest.lookup("metadata.annotations.createdAt").unwrap();
    assert!(matches!(created, Value::DateTime(_)));
    assert!(Validator::Timestamp.check(created));
}

#[test]
fn settings_file_selects_rules() {
    let dir = TempDir::new().unwrap();
    let manifest_path = write(
        &dir,
        "manifest.json",
        r#"{"spec": {"version": "2.0.0", "keywords": ["a", 1]}}"#,
    );
    let settings_path = write(
        &dir,
        "bundlecheck.toml",
        r#"
[[field]]
path = "spec.version"
validator = "semver"
required = true

[[field]]
path = "spec.keywords"
validator = "list_of_strings"

[[field]]
path = "spec.links"
validator = "links"
required = true
"#,
    );

    let settings = load_settings(&settings_path).unwrap();
    let manifest = parse_manifest_file(&manifest_path).unwrap();
    let outcomes: Vec<Outcome> = check_manifest(&manifest, &settings.rules)
        .into_iter()
        .map(|report| report.outcome)
        .collect();

    assert_eq!(
        outcomes,
        vec![Outcome::Valid, Outcome::Invalid, Outcome::Missing]
    );
}
