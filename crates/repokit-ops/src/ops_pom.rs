//! Operation: emit a `pom.xml` describing first-level dependencies.
//!
//! The generated file is a description for humans and license-scanning
//! tooling, not a usable Maven build: it lists the resolved catalog
//! coordinates of the project without transitive dependencies or module
//! structure.

use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use repokit_core::catalog::resolve_catalog;
use repokit_core::manifest::{DependencyScope, Manifest};
use repokit_util::errors::RepokitError;

const MODEL_VERSION: &str = "4.0.0";
const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";
const DESCRIBING_COMMENT: &str = " This file was generated by the `repokit pom` command. It is not \
suitable for `maven` builds; it only describes the first-level dependencies of the project. ";

/// Render the pom report for `manifest` and write it to `output`.
pub fn write_pom(manifest: &Manifest, output: &Path) -> miette::Result<()> {
    let text = render_pom(manifest)?;
    if let Some(parent) = output.parent() {
        repokit_util::fs::ensure_dir(parent).map_err(RepokitError::Io)?;
    }
    std::fs::write(output, text).map_err(RepokitError::Io)?;
    tracing::debug!("pom report written to `{}`", output.display());
    Ok(())
}

/// Render the pom report as XML text.
pub fn render_pom(manifest: &Manifest) -> miette::Result<String> {
    let group = manifest.project.group.as_deref().ok_or_else(|| {
        RepokitError::Manifest {
            message: "The pom report requires `group` in the [project] section".to_string(),
        }
    })?;
    let catalog = manifest.catalog.clone().unwrap_or_default();
    let deps = resolve_catalog(&catalog)?;

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Comment(BytesText::new(DESCRIBING_COMMENT)))
        .map_err(xml_err)?;

    let mut project = BytesStart::new("project");
    project.push_attribute(("xmlns", POM_NAMESPACE));
    project.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    project.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    writer.write_event(Event::Start(project)).map_err(xml_err)?;

    write_text_element(&mut writer, "modelVersion", MODEL_VERSION)?;
    write_text_element(&mut writer, "groupId", group)?;
    write_text_element(&mut writer, "artifactId", &manifest.project.name)?;
    write_text_element(&mut writer, "version", &manifest.project.version)?;

    writer
        .write_event(Event::Start(BytesStart::new("dependencies")))
        .map_err(xml_err)?;
    for dep in &deps {
        writer
            .write_event(Event::Start(BytesStart::new("dependency")))
            .map_err(xml_err)?;
        write_text_element(&mut writer, "groupId", &dep.group)?;
        write_text_element(&mut writer, "artifactId", &dep.artifact)?;
        write_text_element(&mut writer, "version", &dep.version)?;
        if dep.scope == DependencyScope::Tooling {
            write_text_element(&mut writer, "scope", "test")?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("dependency")))
            .map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("dependencies")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("project")))
        .map_err(xml_err)?;

    let bytes = writer.into_inner().into_inner();
    let mut text = String::from_utf8(bytes).map_err(|e| RepokitError::Generic {
        message: format!("Generated pom.xml is not valid UTF-8: {e}"),
    })?;
    text.push('\n');
    Ok(text)
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), RepokitError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)?;
    Ok(())
}

fn xml_err(e: impl std::fmt::Display) -> RepokitError {
    RepokitError::Generic {
        message: format!("Failed to render pom.xml: {e}"),
    }
}
