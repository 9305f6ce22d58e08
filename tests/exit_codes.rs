//! Exit code integration tests.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Syntax or usage error                     |
//! |  2   | Invalid argument value or out of memory   |
//! |  3   | Filesystem error (stat, statvfs, unlink)  |
//! |  4   | Unparsable date                           |

mod common;

use assert_cmd::Command;
use cli::ExitCode;
use predicates::prelude::*;

fn fileprune() -> Command {
    Command::cargo_bin("fileprune").expect("fileprune binary")
}

fn assert_exit(args: &[&str], expected: ExitCode) -> assert_cmd::assert::Assert {
    fileprune().args(args).assert().code(expected.as_i32())
}

#[test]
fn success_is_zero() {
    assert_exit(&["-p", "-c", "2"], ExitCode::Ok);
}

#[test]
fn conflicting_run_modes_are_usage_errors() {
    assert_exit(&["-n", "-p", "-c", "2"], ExitCode::Usage)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("fileprune: "));
}

#[test]
fn unknown_options_are_usage_errors() {
    assert_exit(&["--no-such-option", "file"], ExitCode::Usage);
}

#[test]
fn print_schedule_without_count_is_a_usage_error() {
    assert_exit(&["-p", "-a", "3"], ExitCode::Usage)
        .stderr(predicate::str::contains("requires a count"));
}

#[test]
fn date_mode_without_print_is_a_usage_error() {
    assert_exit(&["-d", "2024-01-01"], ExitCode::Usage);
}

#[test]
fn malformed_values_are_argument_errors() {
    for args in [
        ["-c", "0", "file"],
        ["-c", "ten", "file"],
        ["-s", "5x", "file"],
        ["-a", "3d", "file"],
        ["-e", "0", "file"],
        ["-g", "-4", "file"],
        ["-t", "z", "file"],
    ] {
        assert_exit(&args, ExitCode::InvalidArgument)
            .stderr(predicate::str::starts_with("fileprune: invalid "));
    }
}

#[test]
fn unprintable_schedule_depth_is_an_argument_error() {
    assert_exit(&["-p", "-c", "100000000000000"], ExitCode::InvalidArgument)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("fileprune: out of memory"));
}

#[test]
fn missing_file_is_a_filesystem_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");
    let missing = missing.to_string_lossy().into_owned();
    assert_exit(&["-n", missing.as_str()], ExitCode::FileIo)
        .stderr(predicate::str::starts_with(format!("fileprune: stat({missing}): ")));
}

#[test]
fn unparsable_date_is_a_date_error() {
    assert_exit(&["-d", "-N", "2024-13-01"], ExitCode::DateParse)
        .stderr(predicate::str::contains("2024-13-01"));
}

#[test]
fn failed_run_still_flushes_diagnostics() {
    let dir = tempfile::tempdir().expect("tempdir");
    let present = common::backdated_file(dir.path(), "present", 1, 0);
    let present = present.to_string_lossy().into_owned();
    let missing = dir.path().join("missing");
    let missing = missing.to_string_lossy().into_owned();

    assert_exit(
        &["-n", "--debug=stat2", present.as_str(), missing.as_str()],
        ExitCode::FileIo,
    )
        .stderr(predicate::str::contains("[stat]"))
        .stderr(predicate::str::contains("stat("));
}
