//! Property tests for change detection over real directory trees.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use hashdeploy::domain::services::ChangeDetector;
use hashdeploy::domain::value_objects::{IgnorePatterns, PathMappings};
use hashdeploy::infrastructure::JsonManifestRepository;

fn tree() -> impl Strategy<Value = BTreeSet<String>> {
    let segment = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    let file = (proptest::collection::vec(segment, 0..=2), "[a-z]{1,6}\\.(txt|log|html)")
        .prop_map(|(dirs, name)| {
            let mut parts = dirs;
            parts.push(name);
            parts.join("/")
        });
    proptest::collection::btree_set(file, 1..12)
}

/// Directory names carry no extension, so files never collide with them.
fn write_tree(root: &std::path::Path, files: &BTreeSet<String>) {
    for rel in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, rel).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after persisting a detection, the next detection is empty.
    #[test]
    fn property_detection_is_idempotent(files in tree()) {
        let dir = tempdir().unwrap();
        write_tree(dir.path(), &files);

        let detector = ChangeDetector::new(
            dir.path(),
            IgnorePatterns::empty(),
            PathMappings::empty(),
            ".deploy-hashes.json",
            JsonManifestRepository::new(),
        );
        let first = detector.detect().unwrap();
        detector.persist(&first.manifest).unwrap();

        let second = detector.detect().unwrap();
        prop_assert!(second.changes.is_empty());
        prop_assert_eq!(second.manifest, first.manifest);
    }

    /// PROPERTY: ignored paths never appear in the change set or manifest,
    /// even when an earlier manifest recorded them.
    #[test]
    fn property_ignored_paths_never_leak(files in tree()) {
        let dir = tempdir().unwrap();
        write_tree(dir.path(), &files);

        let unfiltered = ChangeDetector::new(
            dir.path(),
            IgnorePatterns::empty(),
            PathMappings::empty(),
            ".deploy-hashes.json",
            JsonManifestRepository::new(),
        );
        unfiltered.generate_only().unwrap();

        let ignore = IgnorePatterns::new(["*.log"]).unwrap();
        let detector = ChangeDetector::new(
            dir.path(),
            ignore.clone(),
            PathMappings::empty(),
            ".deploy-hashes.json",
            JsonManifestRepository::new(),
        );
        let detection = detector.detect().unwrap();

        for path in &detection.changes.changed {
            prop_assert!(!ignore.is_ignored(path), "{} leaked into changes", path);
        }
        for path in &detection.changes.deleted {
            prop_assert!(!ignore.is_ignored(path), "{} leaked into deletions", path);
        }
        for path in detection.manifest.keys() {
            prop_assert!(!ignore.is_ignored(path), "{} leaked into manifest", path);
        }
        prop_assert!(detection.changes.is_empty());

        let expected: BTreeSet<String> = files
            .into_iter()
            .filter(|p| !p.ends_with(".log"))
            .collect();
        let scanned: BTreeSet<String> = detection.manifest.keys().map(String::from).collect();
        prop_assert_eq!(scanned, expected);
    }
}
