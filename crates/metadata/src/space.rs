use std::io;
use std::path::{Path, PathBuf};

use engine::SpaceProbe;

/// Free-space probe backed by `statvfs(2)`.
///
/// Reports the blocks available to unprivileged users times the fragment
/// size. Every call queries the filesystem again.
#[derive(Clone, Debug)]
pub struct StatvfsProbe {
    location: PathBuf,
}

impl StatvfsProbe {
    /// Probes the filesystem holding `location`.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Probes the directory that contains `operand`.
    pub fn for_operand(operand: &Path) -> Self {
        let directory = match operand.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => operand,
        };
        Self::new(directory)
    }
}

impl SpaceProbe for StatvfsProbe {
    fn available_bytes(&mut self) -> io::Result<u64> {
        query_available(&self.location)
    }

    fn location(&self) -> &Path {
        &self.location
    }
}

#[cfg(unix)]
fn query_available(location: &Path) -> io::Result<u64> {
    let stats = rustix::fs::statvfs(location)?;
    Ok(stats.f_bavail.saturating_mul(stats.f_frsize))
}

#[cfg(not(unix))]
fn query_available(_location: &Path) -> io::Result<u64> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "free-space queries are not supported on this platform",
    ))
}
