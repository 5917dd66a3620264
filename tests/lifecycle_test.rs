//! Integration tests for the full install/uninstall lifecycle.
//!
//! These tests build a realistic project layout (project root with a
//! node_modules tree) in a temp directory, run the lifecycle entry points
//! end to end, and assert the filesystem state after each transition.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use ns_hook::hooks::install::{postinstall, postinstall_with};
use ns_hook::hooks::install_log::INSTALL_LOG_NAME;
use ns_hook::hooks::uninstall::{preuninstall, preuninstall_with};
use ns_hook::locator::find_project_dir;
use ns_hook::resolver::HooksDirStrategy;

const PLUGIN_MANIFEST: &str = r#"{
    "name": "nativescript-sample",
    "version": "2.0.0",
    "nativescript": {
        "hooks": [
            {"type": "before-prepare", "script": "lib/before-prepare.js", "inject": true},
            {"type": "after-prepare", "script": "lib/after-prepare.js"},
            {"type": "before-build", "script": "lib/build.js", "inject": true}
        ]
    }
}"#;

/// Build `<tmp>/workspace/app/node_modules/nativescript-sample` with the
/// standard fixture manifest. Returns (project_dir, pkg_dir).
fn setup_project(tmp: &TempDir) -> (PathBuf, PathBuf) {
    let project = tmp.path().join("workspace").join("app");
    fs::create_dir_all(&project).unwrap();
    fs::write(
        project.join("package.json"),
        r#"{"name": "app", "dependencies": {"nativescript-sample": "2.0.0"}}"#,
    )
    .unwrap();

    let pkg = project.join("node_modules").join("nativescript-sample");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("package.json"), PLUGIN_MANIFEST).unwrap();

    (project, pkg)
}

fn trampolines(project: &Path) -> Vec<PathBuf> {
    vec![
        project.join("hooks/before-prepare/nativescript-sample.js"),
        project.join("hooks/after-prepare/nativescript-sample.js"),
        project.join("hooks/before-build/nativescript-sample.js"),
    ]
}

#[test]
fn locator_skips_the_container_from_inside_it() {
    let tmp = TempDir::new().unwrap();
    let (project, pkg) = setup_project(&tmp);

    assert_eq!(find_project_dir(&pkg), Some(project));
}

#[test]
fn install_then_uninstall_leaves_no_trampolines() {
    let tmp = TempDir::new().unwrap();
    let (project, pkg) = setup_project(&tmp);

    postinstall(&pkg).unwrap();
    for path in trampolines(&project) {
        assert!(path.is_file(), "expected {} after install", path.display());
    }

    let outcome = preuninstall(&pkg).unwrap();
    assert!(outcome.is_clean());
    assert_eq!(outcome.removed.len(), 3);
    for path in trampolines(&project) {
        assert!(!path.exists(), "leftover {}", path.display());
    }
}

#[test]
fn uninstall_is_idempotent_across_repeated_runs() {
    let tmp = TempDir::new().unwrap();
    let (project, pkg) = setup_project(&tmp);

    postinstall(&pkg).unwrap();
    preuninstall(&pkg).unwrap();

    let second = preuninstall(&pkg).unwrap();
    assert!(second.is_clean());
    assert!(second.removed.is_empty());

    // Type directories may remain, but no trampolines do.
    for path in trampolines(&project) {
        assert!(!path.exists());
    }
}

#[test]
fn explicit_strategy_round_trip_clears_the_log() {
    let tmp = TempDir::new().unwrap();
    let (_, pkg) = setup_project(&tmp);
    let hooks_dir = tmp.path().join("cli-hooks");
    let strategy = HooksDirStrategy::Explicit(hooks_dir.clone());

    let report = postinstall_with(&pkg, &strategy).unwrap();
    assert_eq!(report.written.len(), 3);
    assert!(pkg.join(INSTALL_LOG_NAME).is_file());

    let outcome = preuninstall_with(&pkg, &strategy).unwrap();
    assert!(outcome.is_clean());
    assert_eq!(outcome.removed, report.written);
    assert!(
        !pkg.join(INSTALL_LOG_NAME).exists(),
        "log must be consumed by uninstall"
    );

    // Nothing our install created survives under the hooks dir.
    for path in &report.written {
        assert!(!path.exists());
    }
}

#[test]
fn explicit_strategy_survives_manifest_rewrites_between_phases() {
    let tmp = TempDir::new().unwrap();
    let (_, pkg) = setup_project(&tmp);
    let strategy = HooksDirStrategy::Explicit(tmp.path().join("cli-hooks"));

    let report = postinstall_with(&pkg, &strategy).unwrap();

    // Simulate a package upgrade that drops the hooks declaration entirely.
    fs::write(pkg.join("package.json"), r#"{"name": "nativescript-sample"}"#).unwrap();

    let outcome = preuninstall_with(&pkg, &strategy).unwrap();
    assert!(outcome.is_clean());
    assert_eq!(outcome.removed, report.written);
}

#[test]
fn reinstall_after_uninstall_reaches_the_installed_state_again() {
    let tmp = TempDir::new().unwrap();
    let (project, pkg) = setup_project(&tmp);

    postinstall(&pkg).unwrap();
    preuninstall(&pkg).unwrap();
    postinstall(&pkg).unwrap();

    for path in trampolines(&project) {
        assert!(path.is_file());
    }

    let content =
        fs::read_to_string(project.join("hooks/before-build/nativescript-sample.js")).unwrap();
    assert!(content
        .starts_with("module.exports = require(\"nativescript-sample/lib/build.js\");"));
}

#[test]
fn two_plugins_coexist_in_the_same_hooks_dir() {
    let tmp = TempDir::new().unwrap();
    let (project, pkg_a) = setup_project(&tmp);

    let pkg_b = project.join("node_modules").join("other-plugin");
    fs::create_dir_all(&pkg_b).unwrap();
    fs::write(
        pkg_b.join("package.json"),
        r#"{
            "name": "other-plugin",
            "nativescript": {
                "hooks": [{"type": "before-build", "script": "index.js"}]
            }
        }"#,
    )
    .unwrap();

    postinstall(&pkg_a).unwrap();
    postinstall(&pkg_b).unwrap();

    let dir = project.join("hooks/before-build");
    assert!(dir.join("nativescript-sample.js").is_file());
    assert!(dir.join("other-plugin.js").is_file());

    // Removing one plugin leaves the other's trampoline alone.
    preuninstall(&pkg_a).unwrap();
    assert!(!dir.join("nativescript-sample.js").exists());
    assert!(dir.join("other-plugin.js").is_file());
}
