//! Process level tests: arguments, exit status and the split between stdout and stderr.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const MONTY: &str = env!("CARGO_BIN_EXE_monty");

fn write_script(dir: &TempDir, name: &str, program: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, program).expect("script should be written to the temp dir");
    path
}

fn run_script(program: &str) -> Output {
    let dir = TempDir::new().expect("TempDir should create test directory");
    let path = write_script(&dir, "script.m", program);
    Command::new(MONTY)
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("monty should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_successful_run() {
    let output = run_script("push 1\npush 2\npush 3\npall\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3\n2\n1\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_runtime_error_exits_with_failure() {
    let output = run_script("push 1\npint\nswap\npall\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n");
    assert_eq!(stderr(&output), "L3: can't swap, stack too short\n");
}

#[test]
fn test_unknown_instruction() {
    let output = run_script("push 1\npush 2\nfoo\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "L3: unknown instruction foo\n");
}

#[test]
fn test_ignored_text_is_a_warning() {
    let output = run_script("push 5 five\npint\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5\n");
    assert_eq!(stderr(&output), "L1: ignoring text: five\n");
}

#[test]
fn test_options_come_from_the_environment() {
    let dir = TempDir::new().expect("TempDir should create test directory");
    let path = write_script(&dir, "script.m", "push 5 five\npush 6\npint\n");

    let output = Command::new(MONTY)
        .arg(&path)
        .env_remove("RUST_LOG")
        .env("MONTY_NO_WARNINGS", "1")
        .env("MONTY_QUEUE", "true")
        .output()
        .expect("monty should start");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_file_name_starting_with_a_dash() {
    let dir = TempDir::new().expect("TempDir should create test directory");
    write_script(&dir, "-x.m", "push 7\npint\n");

    let output = Command::new(MONTY)
        .arg("-x.m")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("monty should start");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "7\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_help_is_a_file_name() {
    let dir = TempDir::new().expect("TempDir should create test directory");

    let output = Command::new(MONTY)
        .arg("--help")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("monty should start");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "Error: Can't open file --help\n");
}

#[test]
fn test_unknown_instruction_echoes_source_bytes() {
    let dir = TempDir::new().expect("TempDir should create test directory");
    let path = dir.path().join("script.m");
    fs::write(&path, b"push 1\np\xe9ll\n").expect("script should be written to the temp dir");

    let output = Command::new(MONTY)
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("monty should start");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stderr, b"L2: unknown instruction p\xe9ll\n");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("TempDir should create test directory");
    let path = dir.path().join("missing.m");

    let output = Command::new(MONTY)
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .expect("monty should start");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!("Error: Can't open file {}\n", path.display())
    );
}

#[test]
fn test_wrong_argument_count() {
    let output = Command::new(MONTY).output().expect("monty should start");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), format!("USAGE: {} file\n", MONTY));

    let output = Command::new(MONTY)
        .args(["a.m", "b.m"])
        .output()
        .expect("monty should start");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), format!("USAGE: {} file\n", MONTY));

    let dir = TempDir::new().expect("TempDir should create test directory");
    let path = write_script(&dir, "ok.m", "push 1\npint\n");
    let output = Command::new(MONTY)
        .arg(&path)
        .arg("--queue")
        .output()
        .expect("monty should start");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), format!("USAGE: {} file\n", MONTY));
}
