//! Filesystem abstraction consulted by the confinement checks.
//!
//! The checks only ever read: they ask what kind of entry sits at a path,
//! read symlink targets, and turn directories into [`CanonicalDir`]s. Two
//! implementations are provided:
//!
//! - [`OnDiskFs`]: the real filesystem via `std::fs`
//! - [`MemoryFs`]: an in-memory tree, handy for tests and dry runs
//!
//! Implementations must be safe to query from several threads at once.

mod disk;
mod memory;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::{normalize, CanonicalDir, PathResolver};

pub use disk::OnDiskFs;
pub use memory::MemoryFs;

/// What kind of entry a path names, without following a final symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file (or anything else that is not a directory or link).
    File,
    /// A directory.
    Dir,
    /// A symbolic link.
    Symlink,
}

/// Read-only filesystem queries needed to resolve and confine paths.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Describe the entry at `path` without following a final symlink.
    ///
    /// Returns `Ok(None)` when nothing exists there.
    ///
    /// # Errors
    ///
    /// Returns an error when the filesystem cannot be queried (permission
    /// denied, I/O fault). Absence is not an error.
    fn entry_kind(&self, path: &Path) -> Result<Option<EntryKind>>;

    /// Read the target of the symlink at `path`, exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a symlink or cannot be read.
    fn read_link(&self, path: &Path) -> Result<PathBuf>;

    /// Read the full contents of the file at `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Resolve `path` to an absolute path with every symlink followed.
    ///
    /// The path must exist. Relative paths are taken relative to the
    /// filesystem's notion of the current directory.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if the path does not exist, or any error raised
    /// while querying the filesystem.
    fn real_path(&self, path: &Path) -> Result<PathBuf> {
        let absolute = normalize::absolutize(Path::new(std::path::MAIN_SEPARATOR_STR), path);
        let real = PathResolver::default().follow(self, &absolute)?;
        if self.entry_kind(&real)?.is_none() {
            return Err(Error::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(real)
    }

    /// Whether anything exists at `path`. Query failures count as absence.
    fn exists(&self, path: &Path) -> bool {
        matches!(self.entry_kind(path), Ok(Some(_)))
    }

    /// Whether `path` names a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool {
        self.real_path(path)
            .and_then(|real| self.entry_kind(&real))
            .is_ok_and(|kind| kind == Some(EntryKind::Dir))
    }

    /// Whether `path` itself is a symlink.
    fn is_symlink(&self, path: &Path) -> bool {
        matches!(self.entry_kind(path), Ok(Some(EntryKind::Symlink)))
    }

    /// Confirm that `path` is an existing directory and canonicalize it.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if nothing exists at `path` and
    /// `RootNotDirectory` if it exists but is not a directory.
    fn make_dir_canonical(&self, path: &Path) -> Result<CanonicalDir> {
        let real = self.real_path(path)?;
        if self.entry_kind(&real)? != Some(EntryKind::Dir) {
            return Err(Error::RootNotDirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(CanonicalDir::new_unchecked(real))
    }
}
