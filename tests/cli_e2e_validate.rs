//! End-to-end tests for the `validate` command.

mod common;

use common::prelude::*;

#[test]
fn test_validate_valid_projects() {
    let fixture = TestFixture::new()
        .with_build_versions("st4=org.antlr ST4 4.0.8\n")
        .with_plugin_versions("maven-jar-plugin.version=3.0.2\n")
        .with_project("core", descriptors::with("core", "pm.dependencies=st4/test"))
        .with_project("app", descriptors::with("app", "pm.dependencies=core"));

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] All projects are valid"))
        .stdout(predicate::str::contains("Projects: 2"))
        .stdout(predicate::str::contains("Registry: 3 coordinates"))
        .stdout(predicate::str::contains("Plugin versions: 1"))
        .stdout(predicate::str::contains("- app com.x:app:1.0 (1 dependency)"));

    assert!(!fixture.path().join("core/pom.xml").exists());
}

#[test]
fn test_validate_reports_all_unknown_dependencies() {
    let fixture = TestFixture::new()
        .with_project("core", descriptors::with("core", "pm.dependencies=nope"))
        .with_project("app", descriptors::with("app", "pm.dependencies=core other"));

    fixture
        .command()
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[ERR] Validation failed"))
        .stderr(predicate::str::contains(
            "project <core> uses unknown dependency <nope>",
        ))
        .stderr(predicate::str::contains(
            "project <app> uses unknown dependency <other>",
        ));
}

#[test]
fn test_validate_reports_missing_required_properties() {
    let fixture = TestFixture::new().with_project("core", "pm.id=core\nmvn.group.id=com.x\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("mvn.artifact.id"))
        .stderr(predicate::str::contains("mvn.version"));
}

#[test]
fn test_validate_reports_malformed_registry_entries() {
    let fixture = TestFixture::new()
        .with_build_versions("st4=org.antlr ST4\nguava=com.google.guava guava\n")
        .with_project("core", descriptors::minimal("core"));

    fixture
        .command()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("st4"))
        .stderr(predicate::str::contains("guava"));
}
