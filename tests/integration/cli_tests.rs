//! Integration tests for the argmatch CLI.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

fn argmatch() -> Command {
    let mut command = Command::cargo_bin("argmatch").unwrap();
    command.arg("--no-color");
    command
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    Command::cargo_bin("argmatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--prefix"))
        .stdout(predicate::str::contains("--verb"))
        .stdout(predicate::str::contains("--allow-unrecognized"))
        .stdout(predicate::str::contains("--allow-multiple"));
}

#[test]
fn test_long_help_lists_bootstrapper_arguments() {
    Command::cargo_bin("argmatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bootstrapper arguments:"))
        .stdout(predicate::str::contains("begin  "))
        .stdout(predicate::str::contains("/d:<value>"));
}

#[test]
fn test_version() {
    Command::cargo_bin("argmatch")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_mode_fails() {
    Command::cargo_bin("argmatch")
        .unwrap()
        .args(["--mode", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_slash_help_lists_bootstrapper_arguments() {
    argmatch()
        .arg("/h")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrapper arguments"))
        .stdout(predicate::str::contains("begin"))
        .stdout(predicate::str::contains("/d:"));
}

#[test]
fn test_question_mark_help_lists_pre_processor_arguments() {
    argmatch()
        .args(["--mode", "pre-processor", "/?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/key:|/k:"))
        .stdout(predicate::str::contains("[required]"));
}

// ============================================================================
// Bootstrapper mode
// ============================================================================

#[test]
fn test_begin_selects_pre_processing() {
    argmatch()
        .args(["begin", "/k:key", "/d:sonar.host.url=http://localhost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phase: pre-processing"))
        .stdout(predicate::str::contains("child argument: /k:key"))
        .stdout(predicate::str::contains("property: sonar.host.url=http://localhost"));
}

#[test]
fn test_end_selects_post_processing() {
    argmatch()
        .arg("end")
        .assert()
        .success()
        .stdout(predicate::str::contains("phase: post-processing"));
}

#[test]
fn test_begin_and_end_together_fail() {
    argmatch()
        .args(["begin", "end"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not both"));
}

#[test]
fn test_bootstrapper_json_lists_instances() {
    argmatch()
        .args(["--format", "json", "begin", "/d:a=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "pre-processing""#))
        .stdout(predicate::str::contains(r#""argument": "/d:""#))
        .stdout(predicate::str::contains(r#""value": "a=1""#));
}

#[test]
fn test_legacy_invocation_warns() {
    argmatch()
        .arg("/k:key")
        .assert()
        .success()
        .stdout(predicate::str::contains("phase: pre-processing"))
        .stderr(predicate::str::contains("deprecated"));
}

// ============================================================================
// Pre-processor mode
// ============================================================================

#[test]
fn test_pre_processor_success() {
    argmatch()
        .args(["--mode", "pre-processor", "/k:my.key", "/n:My Project", "/install:false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project key: my.key"))
        .stdout(predicate::str::contains("project name: My Project"))
        .stdout(predicate::str::contains("install targets: false"));
}

#[test]
fn test_pre_processor_reports_every_problem() {
    argmatch()
        .args(["--mode", "pre-processor", "/unknown", "/n:a", "/n:b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/unknown"))
        .stderr(predicate::str::contains("/n:b"))
        .stderr(predicate::str::contains("Project key"))
        .stderr(predicate::str::contains("3 error(s)"));
}

#[test]
fn test_install_value_with_whitespace_is_accepted() {
    argmatch()
        .args(["--mode", "pre-processor", "/k:key", "/install: false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install targets: false"));
}

#[test]
fn test_pre_processor_json_failure() {
    argmatch()
        .args(["--format", "json", "--mode", "pre-processor"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""success": false"#))
        .stdout(predicate::str::contains("A required argument is missing: Project key"));
}

// ============================================================================
// Generic mode
// ============================================================================

#[test]
fn test_generic_requires_a_table() {
    argmatch()
        .args(["--mode", "generic", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prefix"));
}

#[test]
fn test_generic_unrecognized_token_fails() {
    argmatch()
        .args(["--mode", "generic", "-p", "/a:", "/a:XXX", "/unrecognized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/unrecognized"));
}

#[test]
fn test_generic_unrecognized_token_allowed() {
    argmatch()
        .args(["--mode", "generic", "-a", "-p", "/a:", "/a:XXX", "/unrecognized"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/a:\tXXX"))
        .stdout(predicate::str::contains("unrecognized").not());
}

#[test]
fn test_generic_duplicates_fail_unless_allowed() {
    argmatch()
        .args(["--mode", "generic", "-p", "zzz", "zzzv1", "zzzv2", "zzzv3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zzzv2"))
        .stderr(predicate::str::contains("zzzv3"));

    argmatch()
        .args(["--mode", "generic", "-M", "-p", "zzz", "zzzv1", "zzzv2", "zzzv3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zzz\tv1\nzzz\tv2\nzzz\tv3"));
}

#[test]
fn test_generic_json_lists_instances() {
    argmatch()
        .args(["--format", "json", "--mode", "generic", "--verb", "begin", "-a"])
        .args(["beginX", "begin", "beginY"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""argument": "begin""#))
        .stdout(predicate::str::contains("beginX").not());
}

#[test]
fn test_generic_empty_prefix_is_rejected() {
    argmatch()
        .args(["--mode", "generic", "--prefix", "", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument descriptor"));
}
