use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REGISTRY: &str = r#"[
    { "name": "auth", "platform": "next", "github": "bifrost-dev/auth", "description": "Authentication" },
    { "name": "seo", "platform": "astro", "github": "bifrost-dev/seo", "description": "SEO helpers" }
]"#;

// Helper function to initialize the command to test.
fn bifrost_plugin(project: &Path, registry: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bifrost-plugin"));
    cmd.current_dir(project)
        .env("BIFROST_REGISTRY", registry)
        .env("NO_COLOR", "1");
    cmd
}

fn project_with_platform(platform: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("config.bifrost"),
        format!(r#"{{ "name": "demo", "platform": "{}" }}"#, platform),
    )
    .expect("write config");
    fs::write(dir.path().join("registry.bifrost"), REGISTRY).expect("write registry");
    dir
}

#[test]
fn test_help_command() {
    let dir = tempfile::tempdir().expect("tempdir");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugin installer for bifrost projects"));
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let expected = format!("bifrost-plugin {}", env!("CARGO_PKG_VERSION"));

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_missing_project_config_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .arg("auth")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config.bifrost not found"));
}

#[test]
fn test_unknown_plugin_fails() {
    let dir = project_with_platform("next");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .arg("payments")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"payments\" not found in registry"));
}

#[test]
fn test_platform_mismatch_fails_before_any_change() {
    let dir = project_with_platform("next");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .args(["seo", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Platform mismatch"));

    let entries = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 2);
}

#[test]
fn test_no_compatible_plugins_exits_cleanly() {
    let dir = project_with_platform("remix");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .assert()
        .success()
        .stderr(predicate::str::contains("No plugins available for platform: remix"));
}

#[test]
fn test_malformed_project_config_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("config.bifrost"), "{ not json").expect("write");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .arg("auth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parsing error"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let dir = tempfile::tempdir().expect("tempdir");

    bifrost_plugin(dir.path(), &dir.path().join("registry.bifrost"))
        .args(["-v", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
