//! CLI tests for the `usagi` binary.
//!
//! Spawns the binary with scripted stdin and verifies stdout and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use usagi::exit_codes;
use usagi::test_support::TestDir;

fn run_usagi(dir: &TestDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_usagi"))
        .current_dir(dir.path())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn usagi");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("usagi output")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn end_of_input_prints_final_list_and_exits_ok() {
    let dir = TestDir::new().expect("tempdir");
    let output = run_usagi(&dir, &[], "milk\ny\neggs\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Welcome to Usagi's Shopping List!\n"));
    assert!(stdout.ends_with("Final list:\nYour shopping list:\n1. milk\n2. eggs\n"));
}

#[test]
fn quit_exits_ok_without_final_list() {
    let dir = TestDir::new().expect("tempdir");
    let output = run_usagi(&dir, &["--no-banner"], "milk\n/quit\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = stdout_of(&output);
    assert!(stdout.ends_with("Goodbye!\n"));
    assert!(!stdout.contains("Final list"));
}

#[test]
fn save_command_writes_relative_to_working_dir() {
    let dir = TestDir::new().expect("tempdir");
    let output = run_usagi(&dir, &["--no-banner"], "apples\ny\nbread\n/save out.txt\nn\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(dir.read_file("out.txt").expect("read"), "apples\nbread\n");
}

#[test]
fn load_flag_preloads_items() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_file("weekly.txt", "tea\r\n\r\nsugar\r\n").expect("seed");
    let output = run_usagi(&dir, &["--no-banner", "--load", "weekly.txt"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Loaded items from 'weekly.txt' (now 2 items)\n"));
    assert!(stdout.ends_with("1. tea\n2. sugar\n"));
}

#[test]
fn config_preload_and_banner_are_applied() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_file("weekly.txt", "milk\n").expect("seed");
    dir.write_file("usagi.toml", "banner = false\npreload = [\"weekly.txt\"]\n")
        .expect("write config");

    let output = run_usagi(&dir, &[], "bread\nn\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("Welcome"));
    assert!(stdout.ends_with("1. milk\n2. bread\n"));
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let dir = TestDir::new().expect("tempdir");
    dir.write_file("usagi.toml", "banner = 3\n").expect("seed");
    let output = run_usagi(&dir, &[], "");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load config"));
}
