//! Candidate path resolution.
//!
//! This module provides the `PathResolver` type, which turns a candidate path
//! referenced from a configuration file into its absolute, collapsed and
//! symlink-followed form.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{EntryKind, FileSystem};
use crate::path::normalize;
use crate::path::types::{CanonicalDir, ResolvedPath};

/// Default limit on symlink hops while resolving a single path.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// Resolves candidate paths against a root.
///
/// Resolution happens in two stages:
/// 1. **Lexical**: relative candidates are joined onto the root and `.`/`..`
///    segments are collapsed without touching the filesystem.
/// 2. **Physical**: the collapsed path is walked one component at a time.
///    Existing symlinks are replaced by their (collapsed) targets; the walk
///    stops following links at the first component that does not exist and
///    appends the rest verbatim.
///
/// Absence is never an error. Only filesystem faults, symlink loops and
/// overly long symlink chains are.
///
/// # Examples
///
/// ```
/// use rootguard::fs::MemoryFs;
/// use rootguard::path::{CanonicalDir, PathResolver};
/// use std::path::{Path, PathBuf};
///
/// let mut fs = MemoryFs::new();
/// fs.create_dir_all("/shared").symlink("/shared", "/cfg/link");
///
/// let root = CanonicalDir::new(&fs, Path::new("/cfg")).unwrap();
/// let resolved = PathResolver::new()
///     .resolve(&fs, &root, Path::new("link/not-yet/../file.yaml"))
///     .unwrap();
/// assert_eq!(resolved.to_path_buf(), PathBuf::from("/shared/file.yaml"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathResolver {
    /// Maximum number of symlinks followed for one path.
    max_symlink_depth: usize,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
        }
    }
}

impl PathResolver {
    /// Create a new path resolver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the maximum symlink depth.
    ///
    /// This limits how many symlinks will be followed while resolving one
    /// path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootguard::path::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_max_symlink_depth(8);
    /// assert_eq!(resolver.max_symlink_depth(), 8);
    /// ```
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// The configured symlink limit.
    #[must_use]
    pub fn max_symlink_depth(&self) -> usize {
        self.max_symlink_depth
    }

    /// Resolve `candidate` against `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the filesystem cannot be queried, a symlink loop is
    /// found, or more than `max_symlink_depth` links would be followed.
    pub fn resolve<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        root: &CanonicalDir,
        candidate: &Path,
    ) -> Result<ResolvedPath> {
        let lexical = normalize::absolutize(root.as_path(), candidate);
        let (real, kind) = self.walk(fs, &lexical)?;
        log::debug!(
            "resolved '{}' against '{}' to '{}'",
            candidate.display(),
            root,
            real.display()
        );

        Ok(match kind {
            Some(EntryKind::Dir) => ResolvedPath::from_dir(real),
            _ => ResolvedPath::from_leaf(real),
        })
    }

    /// Follow every existing symlink in an absolute, cleaned path.
    ///
    /// # Errors
    ///
    /// Same as [`PathResolver::resolve`].
    pub fn follow<F: FileSystem + ?Sized>(&self, fs: &F, path: &Path) -> Result<PathBuf> {
        self.walk(fs, &normalize::clean(path)).map(|(real, _)| real)
    }

    /// Walk `path` component by component, returning the resolved path and the
    /// kind of its final entry (`None` if it does not exist).
    fn walk<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        path: &Path,
    ) -> Result<(PathBuf, Option<EntryKind>)> {
        let (mut resolved, mut pending) = split_anchor(path);
        let mut kind = Some(EntryKind::Dir);
        let mut hops = 0;
        let mut seen = HashSet::new();

        while let Some(name) = pending.pop() {
            let next = resolved.join(&name);
            match fs.entry_kind(&next)? {
                Some(EntryKind::Symlink) => {
                    // The full remaining path identifies the walk state; seeing
                    // it twice means the links never terminate.
                    let state = pending.iter().rev().fold(next.clone(), |p, c| p.join(c));
                    if !seen.insert(state) {
                        return Err(Error::SymlinkLoop { path: next });
                    }
                    hops += 1;
                    if hops > self.max_symlink_depth {
                        return Err(Error::InvalidPath {
                            path: path.to_path_buf(),
                            reason: format!(
                                "Too many symlinks (max {})",
                                self.max_symlink_depth
                            ),
                        });
                    }

                    let target = fs.read_link(&next)?;
                    let target = normalize::absolutize(&resolved, &target);
                    let (anchor, rest) = split_anchor(&target);
                    resolved = anchor;
                    pending.extend(rest);
                    kind = Some(EntryKind::Dir);
                }
                Some(found) => {
                    resolved = next;
                    kind = Some(found);
                }
                None => {
                    resolved = next;
                    while let Some(rest) = pending.pop() {
                        resolved.push(rest);
                    }
                    kind = None;
                }
            }
        }

        Ok((resolved, kind))
    }
}

/// Split a cleaned absolute path into its anchor (prefix and root) and its
/// normal components, the latter as a stack with the first component on top.
fn split_anchor(path: &Path) -> (PathBuf, Vec<OsString>) {
    let mut anchor = PathBuf::new();
    let mut names = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => names.push(name.to_os_string()),
            other => anchor.push(other),
        }
    }
    names.reverse();
    (anchor, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    fn root(fs: &MemoryFs, path: &str) -> CanonicalDir {
        CanonicalDir::new(fs, Path::new(path)).unwrap()
    }

    #[test]
    fn test_resolver_default() {
        let resolver = PathResolver::default();
        assert_eq!(resolver.max_symlink_depth(), DEFAULT_MAX_SYMLINK_DEPTH);
    }

    #[test]
    fn test_resolve_relative_against_root() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all("/tmp/foo");
        let resolved = PathResolver::new()
            .resolve(&fs, &root(&fs, "/tmp/foo"), Path::new("a/./b/../c"))
            .unwrap();
        assert_eq!(resolved.dir(), Path::new("/tmp/foo/a"));
        assert_eq!(resolved.file_name(), "c");
    }

    #[test]
    fn test_resolve_existing_directory_has_empty_file() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all("/tmp/foo/sub");
        let resolved = PathResolver::new()
            .resolve(&fs, &root(&fs, "/tmp/foo"), Path::new("sub"))
            .unwrap();
        assert!(resolved.is_dir());
        assert_eq!(resolved.dir(), Path::new("/tmp/foo/sub"));
    }

    #[test]
    fn test_resolve_empty_candidate_is_root() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all("/tmp/foo");
        let resolved = PathResolver::new()
            .resolve(&fs, &root(&fs, "/tmp/foo"), Path::new(""))
            .unwrap();
        assert_eq!(resolved.to_path_buf(), PathBuf::from("/tmp/foo"));
    }

    #[test]
    fn test_resolve_follows_final_symlink_chain() {
        let mut fs = MemoryFs::new();
        fs.write_file("/elsewhere/target", "x")
            .symlink("/elsewhere/target", "/cfg/hop2")
            .symlink("hop2", "/cfg/hop1");
        let resolved = PathResolver::new()
            .resolve(&fs, &root(&fs, "/cfg"), Path::new("hop1"))
            .unwrap();
        assert_eq!(resolved.to_path_buf(), PathBuf::from("/elsewhere/target"));
    }

    #[test]
    fn test_resolve_relative_target_uses_link_directory() {
        let mut fs = MemoryFs::new();
        fs.write_file("/cfg/shared/base.yaml", "x")
            .symlink("../shared/base.yaml", "/cfg/app/base.yaml");
        let resolved = PathResolver::new()
            .resolve(&fs, &root(&fs, "/cfg"), Path::new("app/base.yaml"))
            .unwrap();
        assert_eq!(resolved.to_path_buf(), PathBuf::from("/cfg/shared/base.yaml"));
    }

    #[test]
    fn test_resolve_dangling_link_stays_lexical_after_target() {
        let mut fs = MemoryFs::new();
        fs.symlink("/gone/away", "/cfg/dangling");
        let resolved = PathResolver::new()
            .resolve(&fs, &root(&fs, "/cfg"), Path::new("dangling"))
            .unwrap();
        assert_eq!(resolved.to_path_buf(), PathBuf::from("/gone/away"));
    }

    #[test]
    fn test_resolve_detects_loop() {
        let mut fs = MemoryFs::new();
        fs.symlink("/cfg/b", "/cfg/a").symlink("/cfg/a", "/cfg/b");
        let result = PathResolver::new().resolve(&fs, &root(&fs, "/cfg"), Path::new("a"));
        assert!(matches!(result, Err(Error::SymlinkLoop { .. })));
    }

    #[test]
    fn test_resolve_respects_max_depth() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all("/cfg/target");
        let mut current = "/cfg/target".to_string();
        for i in 0..5 {
            let link = format!("/cfg/link{i}");
            fs.symlink(&current, &link);
            current = link;
        }

        let cfg = root(&fs, "/cfg");
        let deep = PathResolver::new().with_max_symlink_depth(10);
        assert!(deep.resolve(&fs, &cfg, Path::new("link4")).is_ok());

        let shallow = PathResolver::new().with_max_symlink_depth(2);
        assert!(matches!(
            shallow.resolve(&fs, &cfg, Path::new("link4")),
            Err(Error::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_revisiting_a_link_with_different_suffix_is_not_a_loop() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all("/d/other")
            .symlink("/d", "/a")
            .symlink("/a/other", "/d/back");
        let real = PathResolver::new()
            .follow(&fs, Path::new("/a/back"))
            .unwrap();
        assert_eq!(real, PathBuf::from("/d/other"));
    }

    #[test]
    fn test_follow_is_idempotent() {
        let mut fs = MemoryFs::new();
        fs.write_file("/x/y", "").symlink("/x", "/l");
        let resolver = PathResolver::new();
        let once = resolver.follow(&fs, Path::new("/l/y")).unwrap();
        let twice = resolver.follow(&fs, &once).unwrap();
        assert_eq!(once, twice);
    }
}
