//! Property-based tests for path handling.
//!
//! The normalize module carries its own normalization properties. This module
//! covers the walker and relationship checks.

use super::normalize::resolve_components;
use super::relationship::PathRelationship;
use super::walker::ancestors;
use crate::platform::Os;
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,20}".prop_filter("no dot-only components", |s| s != "." && s != "..")
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The walk is finite: one entry per component plus the root
    #[test]
    fn ancestors_are_finite(path in absolute_path_strategy()) {
        let count = ancestors(&path).count();
        prop_assert_eq!(count, path.components().count());
    }

    // Each step removes exactly one component
    #[test]
    fn ancestors_strictly_decrease_in_depth(path in absolute_path_strategy()) {
        let depths: Vec<usize> = ancestors(&path).map(|p| p.components().count()).collect();
        for pair in depths.windows(2) {
            prop_assert_eq!(pair[0], pair[1] + 1);
        }
    }

    // The last element is the root, whose parent is itself
    #[test]
    fn ancestors_end_at_root(path in absolute_path_strategy()) {
        let last = ancestors(&path).last().unwrap();
        prop_assert!(last.parent().is_none());
        prop_assert_eq!(last, PathBuf::from("/"));
    }

    // Every yielded directory contains the starting path
    #[test]
    fn ancestors_contain_start(path in absolute_path_strategy()) {
        for ancestor in ancestors(&path) {
            prop_assert!(PathRelationship::is_within(&path, &ancestor, Os::Linux));
        }
    }

    // Path relationship is reflexive
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        let rel = PathRelationship::between(&path, &path, Os::Linux);
        prop_assert_eq!(rel, PathRelationship::Same);
    }

    // Relationship is antisymmetric
    #[test]
    fn path_relationship_antisymmetric(
        a in absolute_path_strategy(),
        b in absolute_path_strategy(),
    ) {
        let forward = PathRelationship::between(&a, &b, Os::Linux);
        let backward = PathRelationship::between(&b, &a, Os::Linux);
        let expected = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(backward, expected);
    }

    // Appending components always yields a descendant
    #[test]
    fn appended_path_is_within(
        base in absolute_path_strategy(),
        extra in prop::collection::vec(path_component_strategy(), 1..4),
    ) {
        let mut child = base.clone();
        for part in extra {
            child.push(part);
        }
        prop_assert!(PathRelationship::is_within(&child, &base, Os::Linux));
        prop_assert!(!PathRelationship::is_within(&base, &child, Os::Linux));
    }

    // Lexical resolution never changes an already clean path
    #[test]
    fn clean_paths_are_fixed_points(path in absolute_path_strategy()) {
        prop_assert_eq!(resolve_components(&path), path);
    }
}
