// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Smoke tests for the `w` binary.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn w(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_w"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run w")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn banner_without_arguments() {
    let output = w(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "WALKER\nIt walks.\n");
}

#[test]
fn usage_when_input_is_missing() {
    let output = w(&["e"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("w e [CODE] [ARGUMENTS]"));
}

#[test]
fn unknown_option() {
    let output = w(&["x", "{+;1;2}"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("No such option"));
}

#[test]
fn inline_code_prints_its_result() {
    let output = w(&["e", "{+;1;{+;2;3}}"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "6\n");
}

#[test]
fn trailing_arguments_become_args() {
    let output = w(&["e", "{args;1}{args;0}", "a", "b"]);
    assert_eq!(stdout(&output), "ba\n");
}

#[test]
fn printing_comes_before_the_result() {
    let output = w(&["e", "{print;hi }done"]);
    assert_eq!(stdout(&output), "hi done\n");
}

#[test]
fn uncaught_error_fails_the_run() {
    let output = w(&["e", "{throw;broken}"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("uncaught error: broken"));
}

#[test]
fn file_program_does_not_print_its_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.w");
    std::fs::write(&path, "{println;{args;0}}result\n").unwrap();
    let output = w(&["f", path.to_str().unwrap(), "hello"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello\n");
}

#[test]
fn missing_file_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.w");
    let output = w(&["f", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
