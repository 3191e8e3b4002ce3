use repokit_core::manifest::Manifest;
use repokit_ops::ops_pom::{render_pom, write_pom};
use tempfile::TempDir;

const MANIFEST_TOML: &str = r#"
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

[catalog.libraries.error-prone]
group = "com.google.errorprone"
artifact = "error_prone_annotations"
version = "2.35.1"
"#;

#[test]
fn test_pom_has_declaration_and_describing_comment() {
    let manifest = Manifest::from_str(MANIFEST_TOML).unwrap();
    let pom = render_pom(&manifest).unwrap();

    assert!(pom.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"), "got: {pom}");
    assert!(
        pom.contains("not suitable for `maven` builds"),
        "got: {pom}"
    );
    assert!(
        pom.contains("only describes the first-level dependencies"),
        "got: {pom}"
    );
}

#[test]
fn test_pom_carries_maven_namespaces() {
    let manifest = Manifest::from_str(MANIFEST_TOML).unwrap();
    let pom = render_pom(&manifest).unwrap();

    assert!(
        pom.contains("xmlns=\"http://maven.apache.org/POM/4.0.0\""),
        "got: {pom}"
    );
    assert!(
        pom.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""),
        "got: {pom}"
    );
    assert!(
        pom.contains("xsd/maven-4.0.0.xsd\""),
        "got: {pom}"
    );
}

#[test]
fn test_pom_describes_project_coordinates() {
    let manifest = Manifest::from_str(MANIFEST_TOML).unwrap();
    let pom = render_pom(&manifest).unwrap();

    assert!(pom.contains("<modelVersion>4.0.0</modelVersion>"), "got: {pom}");
    assert!(pom.contains("<groupId>org.example.base</groupId>"), "got: {pom}");
    assert!(pom.contains("<artifactId>base-types</artifactId>"), "got: {pom}");
    assert!(pom.contains("<version>2.0.1</version>"), "got: {pom}");
}

#[test]
fn test_pom_lists_dependencies_sorted_by_name() {
    let manifest = Manifest::from_str(MANIFEST_TOML).unwrap();
    let pom = render_pom(&manifest).unwrap();

    // error-prone < guava < junit-api.
    let error_prone = pom.find("<artifactId>error_prone_annotations</artifactId>").unwrap();
    let guava = pom.find("<artifactId>guava</artifactId>").unwrap();
    let junit = pom.find("<artifactId>junit-jupiter-api</artifactId>").unwrap();
    assert!(error_prone < guava, "got: {pom}");
    assert!(guava < junit, "got: {pom}");

    assert!(pom.contains("<version>33.3.1-jre</version>"), "got: {pom}");
    // The version reference resolves through [catalog.versions].
    assert!(pom.contains("<version>5.11.3</version>"), "got: {pom}");
}

#[test]
fn test_scope_element_only_for_tooling_dependencies() {
    let manifest = Manifest::from_str(MANIFEST_TOML).unwrap();
    let pom = render_pom(&manifest).unwrap();

    assert_eq!(pom.matches("<scope>test</scope>").count(), 1, "got: {pom}");
    let scope = pom.find("<scope>test</scope>").unwrap();
    let junit = pom.find("<artifactId>junit-jupiter-api</artifactId>").unwrap();
    assert!(scope > junit, "got: {pom}");
}

#[test]
fn test_pom_without_catalog_has_empty_dependencies() {
    let manifest = Manifest::from_str(
        "[project]\nname = \"base-types\"\nversion = \"2.0.1\"\ngroup = \"org.example.base\"\n",
    )
    .unwrap();
    let pom = render_pom(&manifest).unwrap();

    assert!(pom.contains("<dependencies>"), "got: {pom}");
    assert!(!pom.contains("<dependency>"), "got: {pom}");
}

#[test]
fn test_pom_requires_a_project_group() {
    let manifest =
        Manifest::from_str("[project]\nname = \"base-types\"\nversion = \"2.0.1\"\n").unwrap();
    let err = render_pom(&manifest).unwrap_err();
    assert!(err.to_string().contains("group"), "got: {err}");
}

#[test]
fn test_unknown_version_reference_fails_the_report() {
    let toml = r#"
[project]
name = "base-types"
version = "2.0.1"
group = "org.example.base"

[catalog.libraries.dangling]
group = "org.example"
artifact = "dangling"
"version.ref" = "nowhere"
"#;
    let manifest = Manifest::from_str(toml).unwrap();
    let err = render_pom(&manifest).unwrap_err();
    assert!(err.to_string().contains("nowhere"), "got: {err}");
}

#[test]
fn test_write_pom_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let manifest = Manifest::from_str(MANIFEST_TOML).unwrap();
    let output = tmp.path().join("build").join("reports").join("pom.xml");

    write_pom(&manifest, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.ends_with('\n'), "got: {written}");
    assert_eq!(written, render_pom(&manifest).unwrap());
}
