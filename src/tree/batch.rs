use std::collections::VecDeque;

use super::glob::GlobFilter;
use super::walk::TreeWalker;
use super::{peek_pending, NodeSource, TraversalNode, TreeConfig};
use crate::entry::Entry;

/// A materialized traversal, consumed front to back.
#[derive(Debug, Clone, Default)]
pub struct NodeList {
    nodes: VecDeque<TraversalNode>,
}

impl NodeList {
    pub fn new(nodes: Vec<TraversalNode>) -> Self {
        Self {
            nodes: nodes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Iterator for NodeList {
    type Item = TraversalNode;

    fn next(&mut self) -> Option<TraversalNode> {
        self.nodes.pop_front()
    }
}

impl NodeSource for NodeList {
    fn peek(&self, depth: usize) -> Option<&TraversalNode> {
        peek_pending(&self.nodes, depth)
    }
}

/// Collect the whole depth/hidden/dirs-only pruned traversal below `root`.
pub fn collect_tree(root: &Entry, config: &TreeConfig) -> Vec<TraversalNode> {
    if !root.is_dir() {
        return Vec::new();
    }
    TreeWalker::new(root, config).collect()
}

/// Keep the nodes `filter` matches plus the directories connecting them to
/// the root, in their original order.
///
/// For each match, the nodes between the previous kept node and the match are
/// scanned backwards; every directory shallower than the last one taken is an
/// ancestor. Ancestors before the previous kept node were already taken for
/// an earlier match, so no directory is kept twice.
pub fn filter_nodes(nodes: Vec<TraversalNode>, filter: &GlobFilter) -> Vec<TraversalNode> {
    if filter.matches_all() {
        return nodes;
    }

    let mut keep = vec![false; nodes.len()];
    let mut last_kept: Option<usize> = None;

    for (idx, node) in nodes.iter().enumerate() {
        if !filter.is_match(&node.entry) {
            continue;
        }
        let start = last_kept.map_or(0, |i| i + 1);
        let mut base = node.depth;
        for (offset, candidate) in nodes[start..idx].iter().enumerate().rev() {
            if base <= 1 {
                break;
            }
            if candidate.depth < base && candidate.entry.is_dir() {
                keep[start + offset] = true;
                base = candidate.depth;
            }
        }
        keep[idx] = true;
        last_kept = Some(idx);
    }

    nodes
        .into_iter()
        .zip(keep)
        .filter_map(|(node, kept)| kept.then_some(node))
        .collect()
}
