use std::ffi::OsString;

use engine::{Budget, RetentionPolicy};
use limits::{parse_age_days, parse_count, parse_positive_real, parse_size};
use logging::VerbosityConfig;
use metadata::{DatePattern, TimeBasis};
use schedule::Distribution;

use crate::arguments::ParsedArgs;
use crate::error::CliError;

/// What a run does with its decisions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RunMode {
    /// Delete files.
    #[default]
    Execute,
    /// Print the names that would be deleted.
    PrintDelete,
    /// Print the names that would be retained.
    PrintKeep,
    /// Print the schedule thresholds.
    PrintSchedule,
}

impl RunMode {
    /// Print modes never touch the filesystem.
    #[must_use]
    pub const fn is_dry_run(self) -> bool {
        !matches!(self, Self::Execute)
    }
}

/// Where records come from.
#[derive(Clone, Debug)]
pub enum InputKind {
    /// Operands are files, aged by the given timestamp.
    Files(TimeBasis),
    /// Operands are date labels.
    Dates(DatePattern),
}

impl Default for InputKind {
    fn default() -> Self {
        Self::Files(TimeBasis::default())
    }
}

/// Validated configuration of one run.
///
/// Built once from [`ParsedArgs`] and never modified afterwards.
#[derive(Clone, Debug, Default)]
pub struct PruneConfig {
    mode: RunMode,
    distribution: Distribution,
    policy: RetentionPolicy,
    input: InputKind,
    verbosity: VerbosityConfig,
    operands: Vec<OsString>,
}

impl PruneConfig {
    /// Validates `parsed` and converts every option value.
    ///
    /// Malformed values are reported first, in option order, followed by
    /// violations of the rules that tie options together.
    pub fn from_parsed(parsed: ParsedArgs) -> Result<Self, CliError> {
        let budget = budget(&parsed)?;
        let distribution = distribution(&parsed)?;
        let time_basis = parsed
            .time
            .as_deref()
            .map(|text| {
                text.parse::<TimeBasis>()
                    .map_err(|_| CliError::argument("time", text, "expected a, m or c"))
            })
            .transpose()?;
        let verbosity = verbosity(&parsed)?;

        let mode = if parsed.print_delete {
            RunMode::PrintDelete
        } else if parsed.print_keep {
            RunMode::PrintKeep
        } else if parsed.print_schedule {
            RunMode::PrintSchedule
        } else {
            RunMode::Execute
        };

        if mode == RunMode::PrintSchedule && !matches!(budget, Budget::Count(_)) {
            return Err(configuration(
                "the schedule print option requires a count specification",
            ));
        }
        if parsed.operands.is_empty() && mode != RunMode::PrintSchedule {
            return Err(configuration("required file or date arguments are missing"));
        }
        if parsed.date_format.is_some() && !parsed.dates {
            return Err(configuration("the -D option requires -d"));
        }

        let input = if parsed.dates {
            let print_names = matches!(mode, RunMode::PrintDelete | RunMode::PrintKeep);
            let file_only = time_basis.is_some()
                || matches!(budget, Budget::TotalSize(_) | Budget::FreeSpace(_));
            if !print_names || file_only {
                return Err(configuration(
                    "the -d option requires -N or -n and cannot be used with -t, -s or -S",
                ));
            }
            let pattern = match parsed.date_format.as_deref() {
                Some(description) => DatePattern::custom(description)?,
                None => DatePattern::Iso,
            };
            InputKind::Dates(pattern)
        } else {
            InputKind::Files(time_basis.unwrap_or_default())
        };

        Ok(Self {
            mode,
            distribution,
            policy: RetentionPolicy::new(budget)
                .force(parsed.force)
                .keep_files(parsed.keep_files),
            input,
            verbosity,
            operands: parsed.operands,
        })
    }

    /// Selected run mode.
    #[must_use]
    pub const fn mode(&self) -> RunMode {
        self.mode
    }

    /// Bucket spacing.
    #[must_use]
    pub const fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Budget and modifiers handed to the enforcer.
    #[must_use]
    pub const fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Source of the records.
    #[must_use]
    pub const fn input(&self) -> &InputKind {
        &self.input
    }

    /// Diagnostic categories to report.
    #[must_use]
    pub const fn verbosity(&self) -> &VerbosityConfig {
        &self.verbosity
    }

    /// Operands in command-line order.
    #[must_use]
    pub fn operands(&self) -> &[OsString] {
        &self.operands
    }
}

fn configuration(message: &str) -> CliError {
    CliError::Configuration(message.to_owned())
}

fn budget(parsed: &ParsedArgs) -> Result<Budget, CliError> {
    if let Some(text) = parsed.count.as_deref() {
        let count = parse_count(text).map_err(|error| CliError::limit("count", text, error))?;
        return Ok(Budget::Count(count.get()));
    }
    if let Some(text) = parsed.size.as_deref() {
        let size = parse_size(text).map_err(|error| CliError::limit("size", text, error))?;
        return Ok(Budget::TotalSize(size.get()));
    }
    if let Some(text) = parsed.free_space.as_deref() {
        let size =
            parse_size(text).map_err(|error| CliError::limit("free-space", text, error))?;
        return Ok(Budget::FreeSpace(size.get()));
    }
    if let Some(text) = parsed.age.as_deref() {
        let days = parse_age_days(text).map_err(|error| CliError::limit("age", text, error))?;
        return Ok(Budget::MaxAge(days.get()));
    }
    Ok(Budget::Unlimited)
}

fn distribution(parsed: &ParsedArgs) -> Result<Distribution, CliError> {
    if let Some(text) = parsed.exponential.as_deref() {
        let base = parse_positive_real(text)
            .map_err(|error| CliError::limit("exponential", text, error))?;
        return Distribution::exponential(base)
            .map_err(|error| CliError::schedule("exponential", text, error));
    }
    if let Some(text) = parsed.gaussian.as_deref() {
        let sd =
            parse_positive_real(text).map_err(|error| CliError::limit("gaussian", text, error))?;
        return Distribution::gaussian(sd)
            .map_err(|error| CliError::schedule("gaussian", text, error));
    }
    if parsed.fibonacci {
        return Ok(Distribution::Fibonacci);
    }
    Ok(Distribution::Uniform)
}

fn verbosity(parsed: &ParsedArgs) -> Result<VerbosityConfig, CliError> {
    let mut config = VerbosityConfig::from_verbose_level(parsed.verbose);
    for token in &parsed.info {
        config
            .apply_info_flag(token)
            .map_err(|reason| CliError::argument("info", token, reason))?;
    }
    for token in &parsed.debug {
        config
            .apply_debug_flag(token)
            .map_err(|reason| CliError::argument("debug", token, reason))?;
    }
    Ok(config)
}
