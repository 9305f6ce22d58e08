//! Shared helpers for the binary tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;

const DAY: u64 = 86_400;

/// Creates `name` under `dir` with `size` bytes, modified `days` whole days
/// (plus a minute) before now, so its age is `days + 1`.
pub fn backdated_file(dir: &Path, name: &str, size: usize, days: u64) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![b'x'; size]).expect("write fixture");
    backdate(&path, days);
    path
}

/// Sets the modification time of `path` to `days` days and a minute ago.
pub fn backdate(path: &Path, days: u64) {
    let stamp = SystemTime::now() - Duration::from_secs(days * DAY + 60);
    filetime::set_file_mtime(path, FileTime::from_system_time(stamp)).expect("set mtime");
}

/// Operand strings for `paths`.
pub fn operands(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect()
}

/// Splits stdout into lines.
pub fn lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}
