//! Restricted loading of referenced files.
//!
//! A [`RestrictedLoader`] is the unit a configuration loader works with: one
//! filesystem, one confirmed root and one checker, fixed for the whole load
//! operation. Every reference goes through the checker before anything is
//! read, and referenced directories become child loaders with the same
//! checker.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::checker::RestrictionChecker;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::{CanonicalDir, PathRelationship, PathResolver};
use crate::restrictions::LoadRestrictions;

/// Loads files referenced from a configuration root under fixed restrictions.
///
/// # Examples
///
/// ```
/// use rootguard::fs::MemoryFs;
/// use rootguard::{LoadRestrictions, RestrictedLoader};
/// use std::path::Path;
/// use std::sync::Arc;
///
/// let mut fs = MemoryFs::new();
/// fs.write_file("/app/base/kustomization.yaml", "resources: []")
///     .write_file("/etc/passwd", "root:x:0:0");
///
/// let loader = RestrictedLoader::new(
///     Arc::new(fs),
///     Path::new("/app"),
///     LoadRestrictions::RootOnly,
/// )
/// .unwrap();
///
/// let child = loader.child(Path::new("base")).unwrap();
/// assert_eq!(child.load(Path::new("kustomization.yaml")).unwrap(), b"resources: []");
/// assert!(loader.load(Path::new("../etc/passwd")).is_err());
/// ```
#[derive(Clone)]
pub struct RestrictedLoader {
    fs: Arc<dyn FileSystem>,
    root: CanonicalDir,
    checker: RestrictionChecker,
    resolver: PathResolver,
}

impl fmt::Debug for RestrictedLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestrictedLoader")
            .field("root", &self.root)
            .field("checker", &self.checker)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl RestrictedLoader {
    /// Create a loader rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLoadRestrictions` if `restrictions` is `Unknown`,
    /// `RootNotDirectory` if `root` is not a directory, `PathNotFound` if it
    /// does not exist, or any filesystem error.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        root: &Path,
        restrictions: LoadRestrictions,
    ) -> Result<Self> {
        let checker = RestrictionChecker::try_from(restrictions)?;
        Self::with_checker(fs, root, checker, PathResolver::default())
    }

    /// Create a loader with an explicit checker and resolver.
    ///
    /// # Errors
    ///
    /// Same as [`RestrictedLoader::new`], minus the restrictions check.
    pub fn with_checker(
        fs: Arc<dyn FileSystem>,
        root: &Path,
        checker: RestrictionChecker,
        resolver: PathResolver,
    ) -> Result<Self> {
        let root = CanonicalDir::new(fs.as_ref(), root)?;
        log::debug!("loader rooted at '{root}' with {}", checker.restrictions());
        Ok(Self {
            fs,
            root,
            checker,
            resolver,
        })
    }

    /// The confirmed root of this loader.
    #[must_use]
    pub fn root(&self) -> &CanonicalDir {
        &self.root
    }

    /// The restrictions this loader enforces.
    #[must_use]
    pub fn restrictions(&self) -> LoadRestrictions {
        self.checker.restrictions()
    }

    /// The checker this loader enforces.
    #[must_use]
    pub fn checker(&self) -> RestrictionChecker {
        self.checker
    }

    /// Check `candidate` and return the path to use in its place.
    ///
    /// # Errors
    ///
    /// Returns `NotInRootBounds` when the reference is not permitted, or any
    /// resolution error.
    pub fn check(&self, candidate: &Path) -> Result<PathBuf> {
        self.checker
            .check_with(&self.resolver, self.fs.as_ref(), &self.root, candidate)
    }

    /// Check `candidate` and read the file it permits.
    ///
    /// Relative paths returned by the `None` policy are read relative to the
    /// loader's root.
    ///
    /// # Errors
    ///
    /// Returns the checker's error, or the filesystem error from reading.
    pub fn load(&self, candidate: &Path) -> Result<Vec<u8>> {
        let permitted = self.check(candidate)?;
        let target = self.anchor(&permitted);
        log::debug!("loading '{}'", target.display());
        self.fs.read_file(&target)
    }

    /// Check a referenced directory and return a loader rooted there.
    ///
    /// The child keeps this loader's filesystem, checker and resolver.
    ///
    /// # Errors
    ///
    /// Returns the checker's error, `RootNotDirectory` if the reference is
    /// not a directory, or `LoaderCycle` if the new root is this root or one of
    /// its ancestors.
    pub fn child(&self, candidate: &Path) -> Result<Self> {
        let permitted = self.check(candidate)?;
        let target = self.anchor(&permitted);
        let root = CanonicalDir::new(self.fs.as_ref(), &target)?;

        if PathRelationship::contains(root.as_path(), self.root.as_path()) {
            log::warn!(
                "refusing child loader at '{root}': it contains the current root '{}'",
                self.root
            );
            return Err(Error::LoaderCycle {
                path: root.into_path_buf(),
                root: self.root.as_path().to_path_buf(),
            });
        }

        log::debug!("child loader rooted at '{root}'");
        Ok(Self {
            fs: Arc::clone(&self.fs),
            root,
            checker: self.checker,
            resolver: self.resolver,
        })
    }

    fn anchor(&self, path: &Path) -> PathBuf {
        if path.has_root() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
