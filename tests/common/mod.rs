#![allow(dead_code)]

use canopy::{Entry, TreeConfig};
use std::fs;
use tempfile::TempDir;

/// Default TreeConfig: unbounded, hidden entries excluded, no filter.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig::default()
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Root entry for a fixture.
pub fn root_of(tmp: &TempDir) -> Entry {
    Entry::root(tmp.path()).unwrap()
}

/// (name, depth) pairs of the traversal for `config`.
pub fn walk_names(tmp: &TempDir, config: &TreeConfig) -> Vec<(String, usize)> {
    canopy::walk(&root_of(tmp), config)
        .map(|n| (n.entry.name().to_string(), n.depth))
        .collect()
}

/// Rendered lines with the root line dropped.
pub fn body_lines(tmp: &TempDir, config: &TreeConfig) -> Vec<String> {
    let mut lines = canopy::tree_to_lines(&root_of(tmp), config);
    lines.remove(0);
    lines
}

/// Owned (name, depth) pairs, for terse expectations.
pub fn pairs(items: &[(&str, usize)]) -> Vec<(String, usize)> {
    items.iter().map(|(n, d)| (n.to_string(), *d)).collect()
}
