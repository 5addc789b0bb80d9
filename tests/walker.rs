mod common;

use canopy::tree::{collect_tree, filter_nodes, GlobFilter, TreeWalker};
use canopy::{walk, NodeSource, Traversal, TreeConfig};
use common::{create_fixture, default_tree_config, pairs, root_of, walk_names};

// --- Ordering ---

#[test]
fn test_pre_order_dirs_then_files_natural() {
    let tmp = create_fixture(&[
        "file10",
        "File1",
        "file2",
        "dir2/b.txt",
        "dir2/a10.txt",
        "dir2/a9.txt",
        "Dir10/",
        "dir1/nested/",
    ]);
    let got = walk_names(&tmp, &default_tree_config());
    assert_eq!(
        got,
        pairs(&[
            ("dir1", 1),
            ("nested", 2),
            ("dir2", 1),
            ("a9.txt", 2),
            ("a10.txt", 2),
            ("b.txt", 2),
            ("Dir10", 1),
            ("File1", 1),
            ("file2", 1),
            ("file10", 1),
        ])
    );
}

#[test]
fn test_depth_steps_never_skip_levels() {
    let tmp = create_fixture(&["a/b/c/d/e.txt", "a/x.txt", "f/g/h.txt", "z.txt"]);
    let got = walk_names(&tmp, &default_tree_config());
    let mut prev = 0;
    for (name, depth) in got {
        assert!(depth <= prev + 1, "{name} jumped from depth {prev} to {depth}");
        prev = depth;
    }
}

#[test]
fn test_walk_is_idempotent() {
    let tmp = create_fixture(&["a/b.txt", "a/c/", "d.txt", ".e/f.txt"]);
    let cfg = default_tree_config();
    assert_eq!(walk_names(&tmp, &cfg), walk_names(&tmp, &cfg));
}

// --- Depth Limiting ---

#[test]
fn test_depth_limit_prunes_descendants() {
    let tmp = create_fixture(&["a/b/c.txt", "a/d.txt", "e.txt"]);
    let cfg = TreeConfig {
        max_depth: Some(1),
        ..default_tree_config()
    };
    assert_eq!(walk_names(&tmp, &cfg), pairs(&[("a", 1), ("e.txt", 1)]));
}

#[test]
fn test_depth_limit_2() {
    let tmp = create_fixture(&["a/b/deep.txt", "a/top.txt"]);
    let cfg = TreeConfig {
        max_depth: Some(2),
        ..default_tree_config()
    };
    let got = walk_names(&tmp, &cfg);
    assert!(got.iter().all(|(_, d)| *d <= 2));
    assert_eq!(got, pairs(&[("a", 1), ("b", 2), ("top.txt", 2)]));
}

// --- Hidden ---

#[test]
fn test_hidden_directory_subtree_is_excluded() {
    let tmp = create_fixture(&[".cache/data.bin", ".env", "src/.keep", "src/lib.rs"]);
    let got = walk_names(&tmp, &default_tree_config());
    assert_eq!(got, pairs(&[("src", 1), ("lib.rs", 2)]));
}

#[test]
fn test_hidden_included_with_flag() {
    let tmp = create_fixture(&[".cache/data.bin", ".env", "src/lib.rs"]);
    let cfg = TreeConfig {
        show_hidden: true,
        ..default_tree_config()
    };
    assert_eq!(
        walk_names(&tmp, &cfg),
        pairs(&[
            (".cache", 1),
            ("data.bin", 2),
            ("src", 1),
            ("lib.rs", 2),
            (".env", 1),
        ])
    );
}

// --- Dirs Only ---

#[test]
fn test_dirs_only_skips_files() {
    let tmp = create_fixture(&["src/main.rs", "src/bin/", "tests/", "README.md"]);
    let cfg = TreeConfig {
        dirs_only: true,
        ..default_tree_config()
    };
    assert_eq!(
        walk_names(&tmp, &cfg),
        pairs(&[("src", 1), ("bin", 2), ("tests", 1)])
    );
}

// --- Glob Filtering ---

#[test]
fn test_filter_keeps_connected_ancestor_chain() {
    let tmp = create_fixture(&[
        "a/b/c/target.txt",
        "a/b/c/other.txt",
        "a/b/sibling/",
        "a/lonely.txt",
        "z/unrelated.txt",
    ]);
    let cfg = TreeConfig {
        pattern: "target.txt".to_string(),
        ..default_tree_config()
    };
    assert_eq!(
        walk_names(&tmp, &cfg),
        pairs(&[("a", 1), ("b", 2), ("c", 3), ("target.txt", 4)])
    );
}

#[test]
fn test_filter_respects_depth_limit() {
    let tmp = create_fixture(&["a/b/match.rs", "top.rs"]);
    let cfg = TreeConfig {
        pattern: "*.rs".to_string(),
        max_depth: Some(2),
        ..default_tree_config()
    };
    assert_eq!(walk_names(&tmp, &cfg), pairs(&[("top.rs", 1)]));
}

#[test]
fn test_filter_with_dirs_only_matches_directory_names() {
    let tmp = create_fixture(&["src/tests/", "src/lib/", "docs/tests/", "tests.txt"]);
    let cfg = TreeConfig {
        pattern: "tests".to_string(),
        dirs_only: true,
        ..default_tree_config()
    };
    assert_eq!(
        walk_names(&tmp, &cfg),
        pairs(&[("docs", 1), ("tests", 2), ("src", 1), ("tests", 2)])
    );
}

#[test]
fn test_filter_without_match_is_empty_traversal() {
    let tmp = create_fixture(&["a/b.txt", "c.txt"]);
    let cfg = TreeConfig {
        pattern: "*.nothing".to_string(),
        ..default_tree_config()
    };
    assert!(walk(&root_of(&tmp), &cfg).is_empty());
}

#[test]
fn test_filtered_walk_is_batch() {
    let tmp = create_fixture(&["a/x.rs"]);
    let cfg = TreeConfig {
        pattern: "*.rs".to_string(),
        ..default_tree_config()
    };
    assert!(matches!(walk(&root_of(&tmp), &cfg), Traversal::Filtered(_)));
    assert!(matches!(
        walk(&root_of(&tmp), &default_tree_config()),
        Traversal::Streaming(_)
    ));
}

#[test]
fn test_filter_nodes_matches_walk() {
    let tmp = create_fixture(&["a/b/one.md", "a/c/two.txt", "d/three.md"]);
    let root = root_of(&tmp);
    let cfg = default_tree_config();
    let batch: Vec<(String, usize)> = filter_nodes(collect_tree(&root, &cfg), &GlobFilter::new("*.md"))
        .into_iter()
        .map(|n| (n.entry.name().to_string(), n.depth))
        .collect();
    let cfg = TreeConfig {
        pattern: "*.md".to_string(),
        ..cfg
    };
    assert_eq!(batch, walk_names(&tmp, &cfg));
}

// --- Empty / File Roots ---

#[test]
fn test_empty_directory_is_empty_traversal() {
    let tmp = create_fixture(&[]);
    assert!(walk(&root_of(&tmp), &default_tree_config()).is_empty());
}

#[test]
fn test_file_root_is_empty_traversal() {
    let tmp = create_fixture(&["only.txt"]);
    let root = canopy::Entry::root(tmp.path().join("only.txt")).unwrap();
    assert!(walk(&root, &default_tree_config()).is_empty());
}

// --- Lookahead ---

#[test]
fn test_streaming_peek_matches_naive_scan() {
    let tmp = create_fixture(&["a/b/c.txt", "a/d/", "e/f.txt", "g.txt"]);
    let root = root_of(&tmp);
    let cfg = default_tree_config();
    let all = collect_tree(&root, &cfg);

    let mut walker = TreeWalker::new(&root, &cfg);
    let mut consumed = 0;
    while let Some(node) = walker.next() {
        consumed += 1;
        let rest = &all[consumed..];
        for depth in 1..=node.depth + 1 {
            // Next node at `depth` before the group at that level closes.
            let expected = rest
                .iter()
                .take_while(|n| n.depth >= depth)
                .find(|n| n.depth == depth)
                .map(|n| n.entry.name().to_string());
            let got = walker.peek(depth).map(|n| n.entry.name().to_string());
            assert_eq!(got, expected, "peek({depth}) after {}", node.entry.name());
        }
    }
    assert_eq!(consumed, all.len());
}
