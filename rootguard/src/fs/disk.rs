//! The real filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{EntryKind, FileSystem};

/// [`FileSystem`] backed by `std::fs`.
///
/// # Examples
///
/// ```no_run
/// use rootguard::fs::{FileSystem, OnDiskFs};
/// use std::path::Path;
///
/// let root = OnDiskFs.make_dir_canonical(Path::new(".")).unwrap();
/// assert!(root.as_path().is_absolute());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnDiskFs;

impl FileSystem for OnDiskFs {
    fn entry_kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        match fs::symlink_metadata(path) {
            Ok(meta) => {
                let file_type = meta.file_type();
                Ok(Some(if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_dir() {
                    EntryKind::Dir
                } else {
                    EntryKind::File
                }))
            }
            // A regular file used as a directory component reports NotADirectory
            // on some platforms; either way nothing exists at the path.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.raw_os_error() == Some(not_a_directory()) => Ok(None),
            Err(e) => Err(Error::from_io(path, e)),
        }
    }

    fn read_link(&self, path: &Path) -> Result<PathBuf> {
        fs::read_link(path).map_err(|e| Error::from_io(path, e))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::from_io(path, e))
    }

    fn real_path(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
    }
}

#[cfg(unix)]
const fn not_a_directory() -> i32 {
    20 // ENOTDIR
}

#[cfg(windows)]
const fn not_a_directory() -> i32 {
    267 // ERROR_DIRECTORY
}

#[cfg(not(any(unix, windows)))]
const fn not_a_directory() -> i32 {
    -1
}
