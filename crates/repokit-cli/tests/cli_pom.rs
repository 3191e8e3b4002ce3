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

[catalog.libraries.guava]
group = "com.google.guava"
artifact = "guava"
version = "33.3.1-jre"
"#;

fn scaffold(manifest: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("repokit.toml"), manifest).unwrap();
    tmp
}

#[test]
fn test_pom_written_to_project_root() {
    let tmp = scaffold(MANIFEST);

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["pom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote pom report"));

    let pom = fs::read_to_string(tmp.path().join("pom.xml")).unwrap();
    assert!(pom.contains("<modelVersion>4.0.0</modelVersion>"), "got: {pom}");
    assert!(pom.contains("<artifactId>guava</artifactId>"), "got: {pom}");
}

#[test]
fn test_pom_honours_output_flag() {
    let tmp = scaffold(MANIFEST);
    let output = tmp.path().join("reports").join("described.xml");

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["pom", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert!(output.is_file());
    assert!(!tmp.path().join("pom.xml").exists());
}

#[test]
fn test_pom_without_group_fails() {
    let tmp = scaffold("[project]\nname = \"base-types\"\nversion = \"2.0.1\"\n");

    repokit_cmd()
        .current_dir(tmp.path())
        .args(["pom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("group"));

    assert!(!tmp.path().join("pom.xml").exists());
}
