use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn repokit_cmd() -> Command {
    Command::cargo_bin("repokit").unwrap()
}

const MANIFEST: &str = r#"
[project]
name = "base-types"
version = "2.0.1"
group = "org.example.base"

[catalog.versions]
junit = "5.11.3"

[catalog.libraries.guava]
group = "com.google.guava"
artifact = "guava"
version = "33.3.1-jre"

[catalog.libraries.junit-api]
group = "org.junit.jupiter"
artifact = "junit-jupiter-api"
"version.ref" = "junit"
scope = "tooling"
"#;

fn scaffold(manifest: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("repokit.toml"), manifest).unwrap();
    tmp
}

#[test]
fn test_catalog_table_lists_resolved_coordinates() {
    let tmp = scaffold(MANIFEST);

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.google.guava:guava:33.3.1-jre"))
        .stdout(predicate::str::contains(
            "org.junit.jupiter:junit-jupiter-api:5.11.3",
        ))
        .stdout(predicate::str::contains("tooling"));
}

#[test]
fn test_catalog_json_is_machine_readable() {
    let tmp = scaffold(MANIFEST);

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["catalog", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"artifact\": \"guava\""))
        .stdout(predicate::str::contains("\"scope\": \"tooling\""));
}

#[test]
fn test_catalog_without_entries_prints_empty_notice() {
    let tmp = scaffold("[project]\nname = \"base-types\"\nversion = \"2.0.1\"\n");

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog is empty"));
}

#[test]
fn test_catalog_rejects_unknown_format() {
    let tmp = scaffold(MANIFEST);

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["catalog", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown catalog format"));
}

#[test]
fn test_catalog_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repokit.toml"));
}
