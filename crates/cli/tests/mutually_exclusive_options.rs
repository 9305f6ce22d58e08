//! Tests for mutually exclusive option validation.
//!
//! Run modes, budgets and distributions each form a group in which at most
//! one option may be given.

use cli::parse_args;
use clap::error::ErrorKind;

fn assert_conflict(args: &[&str]) {
    let result = parse_args(args.iter().copied());
    let error = result.expect_err("options should be mutually exclusive");
    assert_eq!(error.kind(), ErrorKind::ArgumentConflict, "{args:?}");
}

#[test]
fn print_delete_and_print_keep_conflict() {
    assert_conflict(&["fileprune", "-n", "-N", "a"]);
}

#[test]
fn print_keep_and_print_schedule_conflict() {
    assert_conflict(&["fileprune", "--print-keep", "--print-schedule", "-c", "3"]);
}

#[test]
fn count_and_size_conflict() {
    assert_conflict(&["fileprune", "-c", "3", "-s", "10k", "a"]);
}

#[test]
fn size_and_free_space_conflict() {
    assert_conflict(&["fileprune", "--size=1m", "--free-space=1g", "a"]);
}

#[test]
fn count_and_age_conflict() {
    assert_conflict(&["fileprune", "-c", "3", "-a", "2w", "a"]);
}

#[test]
fn exponential_and_gaussian_conflict() {
    assert_conflict(&["fileprune", "-e", "2", "-g", "30", "a"]);
}

#[test]
fn fibonacci_and_exponential_conflict() {
    assert_conflict(&["fileprune", "-f", "-e", "3", "a"]);
}

#[test]
fn one_option_per_group_is_accepted() {
    let parsed = parse_args(["fileprune", "-N", "-a", "1y", "-g", "90", "-K", "a"])
        .expect("options from different groups combine");
    assert!(parsed.print_keep);
    assert_eq!(parsed.age.as_deref(), Some("1y"));
    assert_eq!(parsed.gaussian.as_deref(), Some("90"));
    assert!(parsed.keep_files);
}
