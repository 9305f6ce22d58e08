#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of `fileprune`. It parses the
//! arguments with a [`clap`](https://docs.rs/clap/) builder command,
//! validates them into an immutable [`PruneConfig`], and drives one run:
//! collect records, generate the retention schedule, match records against
//! it, enforce the budget, and print or delete.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so the binary and the tests share one entry
//! point. The run executes inside [`logging::scoped`]; diagnostics accepted
//! by the `-v`, `--info` and `--debug` settings are written to standard
//! error once the run ends, whether it succeeded or not.
//!
//! # Errors
//!
//! Every failure is a [`CliError`] and maps onto an [`ExitCode`]:
//!
//! | Code | Meaning |
//! |---|---|
//! | 0 | success |
//! | 1 | usage or configuration error |
//! | 2 | malformed option value, or a schedule too large to hold |
//! | 3 | filesystem error (`fileprune: OP(TARGET): OS error`) |
//! | 4 | unparsable date |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["fileprune", "-p", "-f", "-c", "5"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert_eq!(stdout, b"1\n1\n2\n3\n5\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

mod arguments;
mod command;
mod config;
mod error;
mod execution;
mod exit_code;
mod report;

pub use arguments::{ParsedArgs, parse_args};
pub use config::{InputKind, PruneConfig, RunMode};
pub use error::CliError;
pub use exit_code::ExitCode;

/// Name used in diagnostics and `--version`.
pub(crate) const PROGRAM_NAME: &str = "fileprune";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller. Help and version output go to `stdout` with status `0`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            write_clap_error(stderr, &error);
            return ExitCode::Usage.as_i32();
        }
    };

    if parsed.show_help {
        return write_informational(stdout, &command::help_text());
    }
    if parsed.show_version {
        return write_informational(stdout, &command::version_text());
    }

    let config = match PruneConfig::from_parsed(parsed) {
        Ok(config) => config,
        Err(error) => return write_error(stderr, &error),
    };

    let verbosity = config.verbosity().clone();
    let outcome = logging::scoped(verbosity, || execution::execute(&config, stdout));
    write_diagnostics(stderr);

    match outcome {
        Ok(()) => ExitCode::Ok.as_i32(),
        Err(error) => write_error(stderr, &error),
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn write_informational<Out: Write>(stdout: &mut Out, text: &str) -> i32 {
    if stdout.write_all(text.as_bytes()).is_err() {
        return ExitCode::Usage.as_i32();
    }
    ExitCode::Ok.as_i32()
}

fn write_clap_error<Err: Write>(stderr: &mut Err, error: &clap::Error) {
    let rendered = error.render().to_string();
    let detail = rendered.strip_prefix("error: ").unwrap_or(&rendered);
    let _ = write!(stderr, "{PROGRAM_NAME}: {detail}");
}

fn write_error<Err: Write>(stderr: &mut Err, error: &CliError) -> i32 {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
    if error.shows_usage() {
        let _ = stderr.write_all(command::USAGE.as_bytes());
    }
    error.exit_code().as_i32()
}

fn write_diagnostics<Err: Write>(stderr: &mut Err) {
    for event in logging::drain_events() {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: {event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with_args(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(args.iter().copied(), &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).expect("stdout utf8"),
            String::from_utf8(stderr).expect("stderr utf8"),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, stdout, stderr) = run_with_args(&["fileprune", "--help"]);
        assert_eq!(code, 0);
        assert!(stdout.starts_with("usage: fileprune"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn version_goes_to_stdout() {
        let (code, stdout, _) = run_with_args(&["fileprune", "-V"]);
        assert_eq!(code, 0);
        assert_eq!(stdout, format!("fileprune {}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn conflicting_options_exit_with_usage_error() {
        let (code, stdout, stderr) = run_with_args(&["fileprune", "-n", "-N", "x"]);
        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        assert!(stderr.starts_with("fileprune: "));
    }

    #[test]
    fn configuration_errors_print_the_synopsis() {
        let (code, _, stderr) = run_with_args(&["fileprune", "-p"]);
        assert_eq!(code, 1);
        assert!(stderr.contains("requires a count"));
        assert!(stderr.contains("usage: fileprune"));
    }

    #[test]
    fn value_errors_exit_with_code_two() {
        let (code, _, stderr) = run_with_args(&["fileprune", "-c", "0", "x"]);
        assert_eq!(code, 2);
        assert_eq!(
            stderr,
            "fileprune: invalid count argument '0': value must be greater than zero\n"
        );
    }

    #[test]
    fn schedule_verbosity_is_reported_on_stderr() {
        let (code, stdout, stderr) =
            run_with_args(&["fileprune", "-p", "-c", "2", "--info=schedule"]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "0\n1\n");
        assert!(stderr.contains("fileprune: generated retention schedule"));
    }
}
