//! Integration test for integration path discovery

use crate::fixtures::{create_package_fixture, write_file};
use remodel::services::catalogue::EXTRA_PATHS;
use remodel::{IntegPath, discover_integ_paths, find_integ_files};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

fn by_path(paths: Vec<IntegPath>) -> BTreeMap<PathBuf, bool> {
    paths.into_iter().map(|p| (p.path, p.copy)).collect()
}

#[test]
fn test_discover_matches_exactly() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_package_fixture(temp_dir.path()).unwrap();

    let discovered = discover_integ_paths(&root).unwrap();
    assert_eq!(discovered.len(), 4, "unexpected entries: {discovered:?}");

    let found = by_path(discovered);
    let expected: BTreeMap<PathBuf, bool> = [
        (root.join("aws-s3/test/integ.bucket.ts"), false),
        (root.join("aws-s3/test/integ.bucket.lit.ts"), true),
        (root.join("aws-s3/test/integ.bucket.snapshot"), false),
        (root.join("aws-ec2/test/nested/integ.vpc.ts"), false),
    ]
    .into_iter()
    .collect();

    assert_eq!(found, expected);
}

#[test]
fn test_snapshot_directory_not_descended() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_package_fixture(temp_dir.path()).unwrap();

    let discovered = discover_integ_paths(&root).unwrap();
    assert!(
        discovered
            .iter()
            .all(|p| !p.path.ends_with("integ.bucket.snapshot/integ.nested.ts")),
        "files inside a snapshot must not be listed"
    );
}

#[test]
fn test_discover_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("a/b/c")).unwrap();
    write_file(temp_dir.path().join("a/b/index.ts"), "").unwrap();

    let discovered = discover_integ_paths(temp_dir.path()).unwrap();
    assert!(discovered.is_empty());
}

#[test]
fn test_find_integ_files_appends_catalogue() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_package_fixture(temp_dir.path()).unwrap();

    let all = find_integ_files(&root).unwrap();
    assert_eq!(all.len(), 4 + EXTRA_PATHS.len());

    // catalogue entries follow the discovered ones, in table order
    let tail = &all[4..];
    assert_eq!(
        tail[0].path,
        root.join("aws-cloudfront/test/test-origin.ts")
    );
    assert_eq!(
        tail.last().unwrap().path,
        root.join("lambda-layer-kubectl/test/lambda-handler")
    );
}

#[test]
fn test_find_integ_files_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_package_fixture(temp_dir.path()).unwrap();

    let first = by_path(find_integ_files(&root).unwrap());
    let second = by_path(find_integ_files(&root).unwrap());
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_followed() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_package_fixture(temp_dir.path()).unwrap();
    let outside = temp_dir.path().join("outside");
    write_file(outside.join("integ.linked.ts"), "").unwrap();
    std::os::unix::fs::symlink(&outside, root.join("linked")).unwrap();

    let found = by_path(discover_integ_paths(&root).unwrap());
    assert_eq!(found.get(&root.join("linked/integ.linked.ts")), Some(&false));
}
