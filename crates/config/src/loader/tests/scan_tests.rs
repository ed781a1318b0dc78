//! Directory scan tests.
//!
//! Responsibilities:
//! - Test the namespace and key rules end to end.
//! - Test last-write-wins, idempotence, and the missing-directory case.
//! - Test that only regular files directly inside the directory are read.

use super::{exposed, secrets_dir, write_secret};
use crate::loader::diagnostics::NoopDiagnostics;
use crate::loader::{load, load_with};
use crate::source::{SecretsSource, ValuePolicy};

fn source_for(dir: &tempfile::TempDir) -> crate::source::SecretsSourceBuilder {
    SecretsSource::builder().with_secrets_path(dir.path())
}

#[test]
fn test_namespaced_file_becomes_hierarchical_key() {
    let dir = secrets_dir(&[("Test.ApplicationSettings__EncryptionKey", "k3y\n")]);
    let source = source_for(&dir).with_namespace("Test").build();

    let mapping = load(&source);

    assert_eq!(
        exposed(&mapping),
        vec![(
            "ApplicationSettings:EncryptionKey".to_string(),
            "k3y".to_string()
        )]
    );
}

#[test]
fn test_unnamespaced_file_loaded_when_no_namespaces_configured() {
    let dir = secrets_dir(&[("ApplicationSettings__EncryptionKey", "k3y")]);
    let source = source_for(&dir).build();

    let mapping = load(&source);

    assert!(mapping.contains_key("ApplicationSettings:EncryptionKey"));
}

#[test]
fn test_unexpected_namespace_is_excluded() {
    let dir = secrets_dir(&[("Other.Secret", "nope"), ("Test.Secret", "yes")]);
    let source = source_for(&dir).with_namespace("Test").build();

    let mapping = load(&source);

    assert_eq!(
        exposed(&mapping),
        vec![("Secret".to_string(), "yes".to_string())]
    );
}

#[test]
fn test_namespace_match_ignores_case() {
    let dir = secrets_dir(&[("TEST.Key", "value")]);
    let source = source_for(&dir).with_namespace("test").build();

    let mapping = load(&source);

    assert!(mapping.contains_key("Key"));
}

#[test]
fn test_unnamespaced_files_follow_include_flag_when_namespaces_set() {
    let dir = secrets_dir(&[("Shared__Key", "shared"), ("Test.Own__Key", "own")]);

    let excluded = load(&source_for(&dir).with_namespace("Test").build());
    assert!(!excluded.contains_key("Shared:Key"));
    assert!(excluded.contains_key("Own:Key"));

    let included = load(
        &source_for(&dir)
            .with_namespace("Test")
            .with_include_empty_namespace(true)
            .build(),
    );
    assert!(included.contains_key("Shared:Key"));
    assert!(included.contains_key("Own:Key"));
}

#[test]
fn test_remainder_keeps_later_namespace_delimiters() {
    let dir = secrets_dir(&[("Test.Section.Name__Key", "value")]);
    let source = source_for(&dir).with_namespace("Test").build();

    let mapping = load(&source);

    assert!(mapping.contains_key("Section.Name:Key"));
}

#[test]
fn test_custom_delimiters() {
    let dir = secrets_dir(&[("Test$Db--Password", "pw")]);
    let source = source_for(&dir)
        .with_namespace("Test")
        .with_namespace_delimiter("$")
        .with_key_delimiter("--")
        .build();

    let mapping = load(&source);

    assert!(mapping.contains_key("Db:Password"));
}

#[test]
fn test_missing_directory_yields_empty_mapping() {
    let dir = secrets_dir(&[]);
    let source = source_for(&dir)
        .with_secrets_path(dir.path().join("not-mounted"))
        .build();

    assert!(load(&source).is_empty());
}

#[test]
fn test_same_key_keeps_value_of_file_sorting_last() {
    let dir = secrets_dir(&[("Alpha.Db__Password", "alpha"), ("Beta.Db__Password", "beta")]);
    let source = source_for(&dir).with_namespaces(["Alpha", "Beta"]).build();

    let mapping = load(&source);

    assert_eq!(
        exposed(&mapping),
        vec![("Db:Password".to_string(), "beta".to_string())]
    );
}

#[test]
fn test_namespaced_file_overrides_unnamespaced_duplicate() {
    let dir = secrets_dir(&[("Key", "shared"), ("Test.key", "specific")]);
    let source = source_for(&dir)
        .with_namespace("Test")
        .with_include_empty_namespace(true)
        .build();

    let mapping = load(&source);

    assert_eq!(mapping.len(), 1);
    assert_eq!(
        exposed(&mapping),
        vec![("key".to_string(), "specific".to_string())]
    );
}

#[test]
fn test_repeated_loads_are_identical() {
    let dir = secrets_dir(&[
        ("Test.A__B", "1"),
        ("Test.C", "2\n"),
        ("Other.D", "3"),
        ("E", "4"),
    ]);
    let source = source_for(&dir)
        .with_namespace("Test")
        .with_include_empty_namespace(true)
        .build();

    let first = exposed(&load_with(&source, &NoopDiagnostics));
    let second = exposed(&load_with(&source, &NoopDiagnostics));

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_values_trimmed_by_default() {
    let dir = secrets_dir(&[("Token", "  abc123\n")]);

    let mapping = load(&source_for(&dir).build());

    assert_eq!(exposed(&mapping)[0].1, "abc123");
}

#[test]
fn test_preserve_policy_keeps_exact_bytes() {
    let dir = secrets_dir(&[("Token", "  abc123\n")]);

    let mapping = load(
        &source_for(&dir)
            .with_value_policy(ValuePolicy::Preserve)
            .build(),
    );

    assert_eq!(exposed(&mapping)[0].1, "  abc123\n");
}

#[test]
fn test_empty_file_yields_empty_value() {
    let dir = secrets_dir(&[("Feature__Flag", "")]);

    let mapping = load(&source_for(&dir).build());

    assert_eq!(
        exposed(&mapping),
        vec![("Feature:Flag".to_string(), String::new())]
    );
}

#[test]
fn test_subdirectories_are_not_descended() {
    let dir = secrets_dir(&[("Top", "top")]);
    let nested = dir.path().join("Nested");
    std::fs::create_dir(&nested).unwrap();
    write_secret(&nested, "Inner", "inner");

    let mapping = load(&source_for(&dir).build());

    assert_eq!(
        exposed(&mapping),
        vec![("Top".to_string(), "top".to_string())]
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_secret_files_are_followed() {
    let target_dir = secrets_dir(&[("real-file", "linked-value")]);
    let dir = secrets_dir(&[]);
    std::os::unix::fs::symlink(
        target_dir.path().join("real-file"),
        dir.path().join("Db__Password"),
    )
    .unwrap();

    let mapping = load(&source_for(&dir).build());

    assert_eq!(
        exposed(&mapping),
        vec![("Db:Password".to_string(), "linked-value".to_string())]
    );
}

#[cfg(unix)]
#[test]
fn test_kubernetes_style_mount_skips_data_directories() {
    let dir = secrets_dir(&[]);
    let data = dir.path().join("..2026_10_16_00_00_00.000");
    std::fs::create_dir(&data).unwrap();
    write_secret(&data, "Api__Key", "k8s-value");
    std::os::unix::fs::symlink(&data, dir.path().join("..data")).unwrap();
    std::os::unix::fs::symlink(
        dir.path().join("..data").join("Api__Key"),
        dir.path().join("Api__Key"),
    )
    .unwrap();

    let mapping = load(&source_for(&dir).build());

    assert_eq!(
        exposed(&mapping),
        vec![("Api:Key".to_string(), "k8s-value".to_string())]
    );
}
