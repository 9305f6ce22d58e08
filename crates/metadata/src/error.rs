use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building records or touching the filesystem.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// An operand could not be stat'ed.
    #[error("stat({}): {source}", path.display())]
    Stat {
        /// The operand as given.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A date-list operand did not match the date pattern.
    #[error("unable to parse date [{input}] as {expected}: {reason}")]
    Date {
        /// The operand as given.
        input: String,
        /// Human readable form of the pattern that was tried.
        expected: String,
        /// Why parsing failed.
        reason: String,
    },
    /// A custom date pattern was not a valid format description.
    #[error("invalid date format '{pattern}': {reason}")]
    Pattern {
        /// The pattern as given.
        pattern: String,
        /// Why the description was rejected.
        reason: String,
    },
}
