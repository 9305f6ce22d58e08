use clap::builder::OsStringValueParser;
use clap::{Arg, ArgAction, ArgGroup, Command};

use crate::PROGRAM_NAME;

/// Synopsis printed after configuration errors and at the top of `--help`.
pub(crate) const USAGE: &str = concat!(
    "usage: fileprune [-n|-N|-p] [-c count|-s size[k|m|g|t]|-S size[k|m|g|t]|-a age[w|m|y]]\n",
    "                 [-e exp|-g sd|-f] [-t a|m|c] [-FK] [-v] file ...\n",
    "   or: fileprune -d -n|-N [-c count|-a age[w|m|y]] [-e exp|-g sd|-f]\n",
    "                 [-D format] [-FK] [-v] date ...\n",
);

const OPTIONS: &str = concat!(
    "\n",
    "Run mode (default: delete files):\n",
    "  -n, --print-delete      Do not delete files; print the names to delete.\n",
    "  -N, --print-keep        Do not delete files; print the names to retain.\n",
    "  -p, --print-schedule    Print the schedule for the given count.\n",
    "\n",
    "Budget:\n",
    "  -c, --count=COUNT       Keep at most COUNT files.\n",
    "  -s, --size=SIZE         Keep at most SIZE bytes (suffix k, m, g or t).\n",
    "  -S, --free-space=SIZE   Delete until more than SIZE bytes are free.\n",
    "  -a, --age=AGE           Delete files older than AGE days\n",
    "                          (suffix w for weeks, m for months, y for years).\n",
    "\n",
    "Distribution (default: one bucket per day):\n",
    "  -e, --exponential=BASE  Space buckets by powers of BASE.\n",
    "  -g, --gaussian=SD       Space buckets under a half-normal curve with\n",
    "                          standard deviation SD days.\n",
    "  -f, --fibonacci         Space buckets by the Fibonacci numbers.\n",
    "\n",
    "Modifiers:\n",
    "  -F, --force             Prune unscheduled files even within the budget.\n",
    "  -K, --keep-files        Keep scheduled files even over the budget.\n",
    "  -t, --time=a|m|c        Age files by access, modification (default)\n",
    "                          or status-change time.\n",
    "  -d, --dates             Operands are dates rather than files.\n",
    "  -D, --date-format=FMT   Parse dates with a custom format description.\n",
    "\n",
    "Diagnostics:\n",
    "  -v, --verbose           Increase verbosity; may be repeated.\n",
    "      --info=FLAGS        Enable informational output (del, keep,\n",
    "                          schedule, stats, all).\n",
    "      --debug=FLAGS       Enable debug output (budget, match, space,\n",
    "                          stat, all).\n",
    "  -h, --help              Show this help message and exit.\n",
    "  -V, --version           Output version information and exit.\n",
);

/// Full `--help` text.
pub(crate) fn help_text() -> String {
    format!("{USAGE}{OPTIONS}")
}

/// Banner printed by `--version`.
pub(crate) fn version_text() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

fn flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .short(short)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn value(id: &'static str, short: char, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .short(short)
        .value_name(value_name)
        .help(help)
        .num_args(1)
        .action(ArgAction::Set)
}

/// Builds the `clap` command used for parsing.
///
/// Help and version handling are disabled so the front-end renders them
/// itself. The three option groups are mutually exclusive within
/// themselves; the remaining cross-option rules are checked when the
/// configuration is built.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .override_usage(USAGE.trim_start_matches("usage: ").trim_end())
        .arg(flag("help", 'h', "Show this help message and exit."))
        .arg(flag("version", 'V', "Output version information and exit."))
        .arg(flag("print-delete", 'n', "Print the names to delete."))
        .arg(flag("print-keep", 'N', "Print the names to retain."))
        .arg(flag("print-schedule", 'p', "Print the schedule."))
        .group(
            ArgGroup::new("mode")
                .args(["print-delete", "print-keep", "print-schedule"])
                .multiple(false),
        )
        .arg(value("count", 'c', "COUNT", "Keep at most COUNT files."))
        .arg(value("size", 's', "SIZE", "Keep at most SIZE bytes."))
        .arg(value(
            "free-space",
            'S',
            "SIZE",
            "Delete until more than SIZE bytes are free.",
        ))
        .arg(value("age", 'a', "AGE", "Delete files older than AGE days."))
        .group(
            ArgGroup::new("budget")
                .args(["count", "size", "free-space", "age"])
                .multiple(false),
        )
        .arg(
            value("exponential", 'e', "BASE", "Space buckets by powers of BASE.")
                .allow_negative_numbers(true),
        )
        .arg(
            value("gaussian", 'g', "SD", "Space buckets under a half-normal curve.")
                .allow_negative_numbers(true),
        )
        .arg(flag("fibonacci", 'f', "Space buckets by the Fibonacci numbers."))
        .group(
            ArgGroup::new("distribution")
                .args(["exponential", "gaussian", "fibonacci"])
                .multiple(false),
        )
        .arg(flag("force", 'F', "Prune unscheduled files even within the budget."))
        .arg(flag("keep-files", 'K', "Keep scheduled files even over the budget."))
        .arg(value("time", 't', "a|m|c", "Timestamp used to age files."))
        .arg(flag("dates", 'd', "Operands are dates rather than files."))
        .arg(value(
            "date-format",
            'D',
            "FMT",
            "Parse dates with a custom format description.",
        ))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Enable informational output.")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug output.")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("operands")
                .value_name("FILE|DATE")
                .action(ArgAction::Append)
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        clap_command().debug_assert();
    }

    #[test]
    fn help_lists_every_short_option() {
        let help = help_text();
        for short in [
            "-n", "-N", "-p", "-c", "-s", "-S", "-a", "-e", "-g", "-f", "-F", "-K", "-t", "-d",
            "-D", "-v", "-h", "-V",
        ] {
            assert!(help.contains(&format!("  {short},")), "missing {short}");
        }
    }

    #[test]
    fn version_names_the_program() {
        assert!(version_text().starts_with("fileprune "));
    }
}
