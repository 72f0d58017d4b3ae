//! Restriction checkers.
//!
//! A checker decides whether a path referenced from a configuration file may
//! be used, and if so, which path the caller should read instead of the raw
//! reference. Three strategies share one signature ([`RestrictionFn`]):
//!
//! - [`restriction_root_only`]: resolve fully (symlinks followed), then
//!   require the result to be in or below the root.
//! - [`restriction_dominated_shallowly`]: require the reference itself,
//!   lexically collapsed, to be in or below the root; then resolve, letting
//!   symlinks found there point anywhere.
//! - [`restriction_none`]: accept anything, untouched.
//!
//! The order of the lexical and physical steps differs between the two
//! confining strategies and is what gives each its meaning.
//!
//! # Examples
//!
//! ```
//! use rootguard::fs::MemoryFs;
//! use rootguard::path::CanonicalDir;
//! use rootguard::{LoadRestrictions, RestrictionChecker};
//! use std::path::{Path, PathBuf};
//!
//! let mut fs = MemoryFs::new();
//! fs.write_file("/tmp/foo/whatever/beans", "");
//! let root = CanonicalDir::new(&fs, Path::new("/tmp/foo")).unwrap();
//!
//! let checker = RestrictionChecker::try_from(LoadRestrictions::RootOnly).unwrap();
//! let path = checker
//!     .check(&fs, &root, Path::new("whatever/../whatever/beans"))
//!     .unwrap();
//! assert_eq!(path, PathBuf::from("/tmp/foo/whatever/beans"));
//!
//! let err = checker.check(&fs, &root, Path::new("/tmp/illegal")).unwrap_err();
//! assert!(err.to_string().contains("file '/tmp/illegal' is not in or below '/tmp/foo'"));
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::{normalize, CanonicalDir, PathRelationship, PathResolver};
use crate::restrictions::LoadRestrictions;

/// Signature shared by every restriction strategy.
pub type RestrictionFn = fn(&dyn FileSystem, &CanonicalDir, &Path) -> Result<PathBuf>;

/// Accept `candidate` unconditionally and return it unmodified.
///
/// # Errors
///
/// Never fails; the `Result` only keeps the signature uniform.
pub fn restriction_none(
    _fs: &dyn FileSystem,
    _root: &CanonicalDir,
    candidate: &Path,
) -> Result<PathBuf> {
    Ok(candidate.to_path_buf())
}

/// Require the fully resolved `candidate` to lie in or below `root`.
///
/// # Errors
///
/// Returns `NotInRootBounds` if the resolved directory is outside `root`, or
/// any resolution error.
pub fn restriction_root_only(
    fs: &dyn FileSystem,
    root: &CanonicalDir,
    candidate: &Path,
) -> Result<PathBuf> {
    RestrictionChecker::RootOnly.check_with(&PathResolver::default(), fs, root, candidate)
}

/// Require `candidate` itself (not its symlink target) to lie in or below
/// `root`, then return its real location.
///
/// # Errors
///
/// Returns `NotInRootBounds` if the lexically collapsed candidate is outside
/// `root`, or any resolution error.
pub fn restriction_dominated_shallowly(
    fs: &dyn FileSystem,
    root: &CanonicalDir,
    candidate: &Path,
) -> Result<PathBuf> {
    RestrictionChecker::DominatedShallowly.check_with(&PathResolver::default(), fs, root, candidate)
}

/// The restriction strategy chosen for a load operation.
///
/// Unlike [`LoadRestrictions`] this has no "unknown" state: building one from
/// `LoadRestrictions::Unknown` fails, so a checker in hand always denotes a
/// usable policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestrictionChecker {
    /// See [`restriction_root_only`].
    RootOnly,
    /// See [`restriction_dominated_shallowly`].
    DominatedShallowly,
    /// See [`restriction_none`].
    None,
}

impl TryFrom<LoadRestrictions> for RestrictionChecker {
    type Error = Error;

    fn try_from(restrictions: LoadRestrictions) -> Result<Self> {
        match restrictions {
            LoadRestrictions::Unknown => Err(Error::UnknownLoadRestrictions),
            LoadRestrictions::RootOnly => Ok(Self::RootOnly),
            LoadRestrictions::DominatedShallowly => Ok(Self::DominatedShallowly),
            LoadRestrictions::None => Ok(Self::None),
        }
    }
}

impl From<RestrictionChecker> for LoadRestrictions {
    fn from(checker: RestrictionChecker) -> Self {
        checker.restrictions()
    }
}

impl RestrictionChecker {
    /// The setting this checker implements.
    #[must_use]
    pub const fn restrictions(self) -> LoadRestrictions {
        match self {
            Self::RootOnly => LoadRestrictions::RootOnly,
            Self::DominatedShallowly => LoadRestrictions::DominatedShallowly,
            Self::None => LoadRestrictions::None,
        }
    }

    /// The strategy as a plain function value.
    #[must_use]
    pub const fn function(self) -> RestrictionFn {
        match self {
            Self::RootOnly => restriction_root_only,
            Self::DominatedShallowly => restriction_dominated_shallowly,
            Self::None => restriction_none,
        }
    }

    /// Check `candidate` against `root` with a default resolver.
    ///
    /// # Errors
    ///
    /// Returns `NotInRootBounds` when the policy rejects the path, or any
    /// error raised while resolving it.
    pub fn check<F: FileSystem + ?Sized>(
        self,
        fs: &F,
        root: &CanonicalDir,
        candidate: &Path,
    ) -> Result<PathBuf> {
        self.check_with(&PathResolver::default(), fs, root, candidate)
    }

    /// Check `candidate` against `root` using `resolver`.
    ///
    /// # Errors
    ///
    /// Same as [`RestrictionChecker::check`].
    pub fn check_with<F: FileSystem + ?Sized>(
        self,
        resolver: &PathResolver,
        fs: &F,
        root: &CanonicalDir,
        candidate: &Path,
    ) -> Result<PathBuf> {
        let result = match self {
            Self::None => Ok(candidate.to_path_buf()),
            Self::RootOnly => {
                let resolved = resolver.resolve(fs, root, candidate)?;
                if PathRelationship::is_within(resolved.dir(), root.as_path()) {
                    Ok(resolved.into_path_buf())
                } else {
                    Err(self.violation(root, candidate))
                }
            }
            Self::DominatedShallowly => {
                let lexical = normalize::absolutize(root.as_path(), candidate);
                if PathRelationship::is_within(&lexical, root.as_path()) {
                    resolver
                        .resolve(fs, root, candidate)
                        .map(crate::path::ResolvedPath::into_path_buf)
                } else {
                    Err(self.violation(root, candidate))
                }
            }
        };

        match &result {
            Ok(path) => log::debug!(
                "{}: accepted '{}' as '{}'",
                self.restrictions(),
                candidate.display(),
                path.display()
            ),
            Err(e) => log::debug!("{}: rejected '{}': {e}", self.restrictions(), candidate.display()),
        }
        result
    }

    fn violation(self, root: &CanonicalDir, candidate: &Path) -> Error {
        Error::NotInRootBounds {
            path: candidate.to_path_buf(),
            root: root.as_path().to_path_buf(),
            restrictions: self.restrictions(),
        }
    }
}
