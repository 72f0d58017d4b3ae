//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on containment and resolver behavior.

use super::normalize::{absolutize, clean};
use super::relationship::PathRelationship;
use super::resolver::PathResolver;
use super::types::CanonicalDir;
use crate::fs::MemoryFs;
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_with_dots_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            Just("..".to_string()),
            Just(".".to_string()),
            path_component_strategy(),
        ],
        0..10,
    )
    .prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Path relationship is reflexive: path is always within itself
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
        prop_assert!(PathRelationship::is_within(&path, &path));
    }

    // Anchoring never leaves a relative or dotted result
    #[test]
    fn absolutize_is_clean_and_absolute(
        base in absolute_path_strategy(),
        rel in relative_with_dots_strategy(),
    ) {
        let anchored = absolutize(&base, &rel);
        prop_assert!(anchored.is_absolute());
        prop_assert_eq!(clean(&anchored), anchored);
    }

    // Relative paths without backsteps always stay within their base
    #[test]
    fn plain_relative_stays_within_base(
        base in absolute_path_strategy(),
        parts in prop::collection::vec(path_component_strategy(), 0..6),
    ) {
        let rel: PathBuf = parts.iter().collect();
        prop_assert!(PathRelationship::is_within(&absolutize(&base, &rel), &base));
    }

    // On a filesystem without links, resolution equals lexical anchoring
    #[test]
    fn resolution_without_links_is_lexical(
        base in absolute_path_strategy(),
        rel in relative_with_dots_strategy(),
    ) {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(&base);
        let root = CanonicalDir::new(&fs, &base).unwrap();
        let resolved = PathResolver::new().resolve(&fs, &root, &rel).unwrap();
        prop_assert_eq!(resolved.to_path_buf(), absolutize(&base, &rel));
    }

    // Resolution is idempotent
    #[test]
    fn resolution_idempotent(
        base in absolute_path_strategy(),
        rel in relative_with_dots_strategy(),
    ) {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(&base);
        fs.symlink("/", base.join("up"));
        let root = CanonicalDir::new(&fs, &base).unwrap();
        let resolver = PathResolver::new();
        let first = resolver.resolve(&fs, &root, &rel).unwrap();
        let second = resolver.resolve(&fs, &root, &rel).unwrap();
        prop_assert_eq!(&first, &second);
        let again = resolver.resolve(&fs, &root, &first.to_path_buf()).unwrap();
        prop_assert_eq!(again.to_path_buf(), first.to_path_buf());
    }
}
