use std::io;
use std::path::PathBuf;

use engine::EngineError;
use limits::LimitParseError;
use metadata::MetadataError;
use schedule::ScheduleError;
use thiserror::Error;

use crate::exit_code::ExitCode;

/// Failures that end a run, grouped by the exit code they produce.
#[derive(Debug, Error)]
pub enum CliError {
    /// The combination of options is not allowed.
    #[error("{0}")]
    Configuration(String),
    /// An option value could not be parsed or is out of range.
    #[error("invalid {option} argument '{value}': {reason}")]
    ArgumentValue {
        /// Long name of the option, without dashes.
        option: &'static str,
        /// The value as given.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// A filesystem operation failed.
    #[error("{operation}({}): {source}", target.display())]
    Io {
        /// Name of the failing operation (`stat`, `unlink`, `statvfs`).
        operation: &'static str,
        /// Path the operation was applied to.
        target: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A date-list operand did not match the date pattern.
    #[error("{0}")]
    Parse(String),
    /// The schedule could not be generated.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl CliError {
    /// Builds an [`CliError::ArgumentValue`] for `--option value`.
    pub fn argument(option: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::ArgumentValue {
            option,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Builds an [`CliError::ArgumentValue`] from a limit parse failure.
    pub fn limit(option: &'static str, value: &str, error: LimitParseError) -> Self {
        Self::argument(option, value, error)
    }

    /// Builds an [`CliError::ArgumentValue`] from a rejected distribution
    /// parameter.
    pub fn schedule(option: &'static str, value: &str, error: ScheduleError) -> Self {
        Self::argument(option, value, error)
    }

    /// Exit code reported for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Configuration(_) => ExitCode::Usage,
            Self::ArgumentValue { .. } | Self::Schedule(_) => ExitCode::InvalidArgument,
            Self::Io { .. } => ExitCode::FileIo,
            Self::Parse(_) => ExitCode::DateParse,
        }
    }

    /// Whether the usage synopsis should follow the message.
    #[must_use]
    pub const fn shows_usage(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Io {
                operation,
                target,
                source,
            } => Self::Io {
                operation,
                target,
                source,
            },
        }
    }
}

impl From<MetadataError> for CliError {
    fn from(error: MetadataError) -> Self {
        match error {
            MetadataError::Stat { path, source } => Self::Io {
                operation: "stat",
                target: path,
                source,
            },
            error @ MetadataError::Date { .. } => Self::Parse(error.to_string()),
            MetadataError::Pattern { pattern, reason } => Self::ArgumentValue {
                option: "date-format",
                value: pattern,
                reason,
            },
        }
    }
}
