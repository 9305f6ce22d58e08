//! Exit codes returned by the `fileprune` binary.
//!
//! # Examples
//!
//! ```
//! use cli::ExitCode;
//!
//! assert_eq!(ExitCode::FileIo.as_i32(), 3);
//! assert_eq!(ExitCode::from_i32(4), Some(ExitCode::DateParse));
//! ```

use std::fmt;

/// Process exit status of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,

    /// Syntax or usage error.
    ///
    /// Returned for conflicting options, a print-schedule request without a
    /// count, missing operands and misused date-list options.
    Usage = 1,

    /// A count, size, age, exponent, deviation or time-basis argument was
    /// malformed.
    InvalidArgument = 2,

    /// Stat, free-space query or deletion failed.
    FileIo = 3,

    /// A date-list operand could not be parsed.
    DateParse = 4,
}

impl ExitCode {
    /// Numeric value handed to the operating system.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short description of the failure class.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Usage => "syntax or usage error",
            Self::InvalidArgument => "invalid argument value",
            Self::FileIo => "error in file IO",
            Self::DateParse => "unparsable date",
        }
    }

    /// Returns `true` for [`ExitCode::Ok`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Maps a raw status back to its variant.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::Usage),
            2 => Some(Self::InvalidArgument),
            3 => Some(Self::FileIo),
            4 => Some(Self::DateParse),
            _ => None,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.as_i32())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
