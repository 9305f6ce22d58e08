use std::ffi::OsString;

use crate::PROGRAM_NAME;
use crate::command::clap_command;

/// Command-line options as recognised by the parser, before validation.
///
/// Values are kept as the strings the user typed so that
/// [`PruneConfig`](crate::PruneConfig) can report malformed ones with the
/// right exit code. Mutually exclusive groups have already been enforced
/// by `clap`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `-h/--help` was given.
    pub show_help: bool,
    /// `-V/--version` was given.
    pub show_version: bool,

    /// `-n`: print the names that would be deleted.
    pub print_delete: bool,
    /// `-N`: print the names that would be retained.
    pub print_keep: bool,
    /// `-p`: print the schedule instead of matching files.
    pub print_schedule: bool,

    /// `-c COUNT`.
    pub count: Option<String>,
    /// `-s SIZE`.
    pub size: Option<String>,
    /// `-S SIZE`.
    pub free_space: Option<String>,
    /// `-a AGE`.
    pub age: Option<String>,

    /// `-e BASE`.
    pub exponential: Option<String>,
    /// `-g SD`.
    pub gaussian: Option<String>,
    /// `-f`.
    pub fibonacci: bool,

    /// `-F`.
    pub force: bool,
    /// `-K`.
    pub keep_files: bool,
    /// `-t a|m|c`.
    pub time: Option<String>,
    /// `-d`: operands are dates.
    pub dates: bool,
    /// `-D FMT`.
    pub date_format: Option<String>,

    /// Number of `-v` flags.
    pub verbose: u8,
    /// `--info` tokens, split on commas.
    pub info: Vec<String>,
    /// `--debug` tokens, split on commas.
    pub debug: Vec<String>,

    /// Files or date labels, in command-line order.
    pub operands: Vec<OsString>,
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
///
/// The first item is the program name. An empty iterator is treated as a
/// bare `fileprune` invocation.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let strings = |matches: &mut clap::ArgMatches, id: &str| -> Vec<String> {
        matches
            .remove_many::<String>(id)
            .map(Iterator::collect)
            .unwrap_or_default()
    };

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        print_delete: matches.get_flag("print-delete"),
        print_keep: matches.get_flag("print-keep"),
        print_schedule: matches.get_flag("print-schedule"),
        count: matches.remove_one::<String>("count"),
        size: matches.remove_one::<String>("size"),
        free_space: matches.remove_one::<String>("free-space"),
        age: matches.remove_one::<String>("age"),
        exponential: matches.remove_one::<String>("exponential"),
        gaussian: matches.remove_one::<String>("gaussian"),
        fibonacci: matches.get_flag("fibonacci"),
        force: matches.get_flag("force"),
        keep_files: matches.get_flag("keep-files"),
        time: matches.remove_one::<String>("time"),
        dates: matches.get_flag("dates"),
        date_format: matches.remove_one::<String>("date-format"),
        verbose: matches.get_count("verbose"),
        info: strings(&mut matches, "info"),
        debug: strings(&mut matches, "debug"),
        operands: matches
            .remove_many::<OsString>("operands")
            .map(Iterator::collect)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_parses_to_defaults() {
        assert_eq!(parse_args(["fileprune"]).expect("parse"), ParsedArgs::default());
        assert_eq!(
            parse_args(Vec::<OsString>::new()).expect("parse"),
            ParsedArgs::default()
        );
    }

    #[test]
    fn short_and_long_forms_agree() {
        let short = parse_args(["fileprune", "-n", "-c", "5", "-e", "3", "-F", "a", "b"])
            .expect("parse");
        let long = parse_args([
            "fileprune",
            "--print-delete",
            "--count=5",
            "--exponential",
            "3",
            "--force",
            "a",
            "b",
        ])
        .expect("parse");
        assert_eq!(short, long);
        assert!(short.print_delete);
        assert_eq!(short.count.as_deref(), Some("5"));
        assert_eq!(short.exponential.as_deref(), Some("3"));
        assert_eq!(short.operands, [OsString::from("a"), OsString::from("b")]);
    }

    #[test]
    fn attached_short_values_are_accepted() {
        let parsed = parse_args(["fileprune", "-s10m", "-tc", "x"]).expect("parse");
        assert_eq!(parsed.size.as_deref(), Some("10m"));
        assert_eq!(parsed.time.as_deref(), Some("c"));
    }

    #[test]
    fn negative_exponent_reaches_validation() {
        let parsed = parse_args(["fileprune", "-e", "-2", "x"]).expect("parse");
        assert_eq!(parsed.exponential.as_deref(), Some("-2"));
    }

    #[test]
    fn verbosity_options_accumulate() {
        let parsed = parse_args([
            "fileprune",
            "-vv",
            "--info=del,keep2",
            "--debug",
            "match",
            "--debug=budget",
            "x",
        ])
        .expect("parse");
        assert_eq!(parsed.verbose, 2);
        assert_eq!(parsed.info, ["del", "keep2"]);
        assert_eq!(parsed.debug, ["match", "budget"]);
    }

    #[test]
    fn date_operands_keep_embedded_spaces() {
        let parsed = parse_args(["fileprune", "-d", "-N", "2024-01-02 10:30", "2024-01-01"])
            .expect("parse");
        assert!(parsed.dates);
        assert_eq!(parsed.operands[0], OsString::from("2024-01-02 10:30"));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let error = parse_args(["fileprune", "--bogus"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
