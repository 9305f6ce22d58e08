//! Seams to the filesystem.
//!
//! The enforcer never touches the filesystem itself; it deletes through a
//! [`Deleter`] and measures free space through a [`SpaceProbe`].

use std::io;
use std::path::Path;

use crate::record::FileRecord;

/// Physically removes a record.
pub trait Deleter {
    /// Removes `record` from storage.
    fn delete(&mut self, record: &FileRecord) -> io::Result<()>;
}

/// Reports the space available on the filesystem holding the records.
pub trait SpaceProbe {
    /// Bytes currently available to unprivileged users.
    fn available_bytes(&mut self) -> io::Result<u64>;

    /// Path that is queried, used in error messages.
    fn location(&self) -> &Path;
}

/// Probe for runs without a free-space budget. Every query fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpaceProbe;

impl SpaceProbe for NoSpaceProbe {
    fn available_bytes(&mut self) -> io::Result<u64> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no free-space probe configured",
        ))
    }

    fn location(&self) -> &Path {
        Path::new("")
    }
}
