//! Common error types for the engine crate.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort enforcement.
///
/// Deletions performed before the failure stay applied.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A deletion or free-space query failed.
    #[error("{operation}({}): {source}", target.display())]
    Io {
        /// Name of the failed operation, such as `unlink` or `statvfs`.
        operation: &'static str,
        /// File or directory the operation was applied to.
        target: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl EngineError {
    pub(crate) fn io(operation: &'static str, target: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            target: target.to_path_buf(),
            source,
        }
    }

    /// Name of the failed operation.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Io { operation, .. } => operation,
        }
    }

    /// Path the failed operation was applied to.
    #[must_use]
    pub fn target(&self) -> &Path {
        match self {
            Self::Io { target, .. } => target,
        }
    }
}
