use std::fs;
use std::io;
use std::path::Path;

use engine::{Deleter, FileRecord};

/// Deletes records from the filesystem.
///
/// Directories are removed recursively; symbolic links are removed
/// themselves and never followed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsDeleter;

impl Deleter for FsDeleter {
    fn delete(&mut self, record: &FileRecord) -> io::Result<()> {
        remove_path(record.name())
    }
}

/// Removes `path`, recursing into it when it is a directory.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
