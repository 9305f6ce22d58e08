use std::fmt;
use std::fs::Metadata;
use std::io;
use std::str::FromStr;
use std::time::SystemTime;

use thiserror::Error;

/// Which timestamp of a file defines its age.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TimeBasis {
    /// Last access time (`-t a`).
    Access,
    /// Last modification time (`-t m`).
    #[default]
    Modification,
    /// Last status change time (`-t c`). Platforms without a change time
    /// report the creation time instead.
    Change,
}

impl TimeBasis {
    /// Extracts the selected timestamp from `metadata`.
    pub fn timestamp(self, metadata: &Metadata) -> io::Result<SystemTime> {
        match self {
            Self::Access => metadata.accessed(),
            Self::Modification => metadata.modified(),
            Self::Change => change_time(metadata),
        }
    }
}

#[cfg(unix)]
fn change_time(metadata: &Metadata) -> io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let seconds = metadata.ctime();
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    let stamp = if seconds >= 0 {
        SystemTime::UNIX_EPOCH.checked_add(Duration::new(seconds.unsigned_abs(), nanos))
    } else {
        SystemTime::UNIX_EPOCH
            .checked_sub(Duration::from_secs(seconds.unsigned_abs()))
            .and_then(|base| base.checked_add(Duration::from_nanos(u64::from(nanos))))
    };
    stamp.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "change time out of range"))
}

#[cfg(not(unix))]
fn change_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.created()
}

impl fmt::Display for TimeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Access => "access",
            Self::Modification => "modification",
            Self::Change => "change",
        })
    }
}

/// Error returned for an unknown time basis flag.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid time specification '{0}': expected a, m or c")]
pub struct ParseTimeBasisError(String);

impl FromStr for TimeBasis {
    type Err = ParseTimeBasisError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "a" => Ok(Self::Access),
            "m" => Ok(Self::Modification),
            "c" => Ok(Self::Change),
            other => Err(ParseTimeBasisError(other.to_owned())),
        }
    }
}
