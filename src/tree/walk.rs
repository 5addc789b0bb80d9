use std::collections::VecDeque;
use tracing::{debug, trace};

use super::{peek_pending, NodeSource, TraversalNode, TreeConfig};
use crate::entry::Entry;

/// Streaming pre-order walker.
///
/// `pending` holds every node that has been listed but not yet yielded.
/// Consuming a directory lists its children and places them at the front,
/// so the deque always reads: the current node's children, then its
/// remaining siblings, then each ancestor's remaining siblings. Depths along
/// the deque never increase, which is what [`NodeSource::peek`] relies on.
pub struct TreeWalker {
    pending: VecDeque<TraversalNode>,
    max_depth: Option<usize>,
    show_hidden: bool,
    dirs_only: bool,
}

impl TreeWalker {
    /// Start a walk below `root`. The root itself is never yielded.
    pub fn new(root: &Entry, config: &TreeConfig) -> Self {
        let mut walker = Self {
            pending: VecDeque::new(),
            max_depth: config.max_depth,
            show_hidden: config.show_hidden,
            dirs_only: config.dirs_only,
        };
        walker.expand(root, 0);
        walker
    }

    /// Whether every node has been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    fn descends_into(&self, entry: &Entry, depth: usize) -> bool {
        if !entry.is_dir() || self.max_depth.is_some_and(|max| depth >= max) {
            return false;
        }
        if entry.loops_back() {
            debug!(path = %entry.path().display(), "not descending into link to ancestor");
            return false;
        }
        true
    }

    fn expand(&mut self, parent: &Entry, depth: usize) {
        if !self.descends_into(parent, depth) {
            return;
        }
        let children = match parent.visible_children(self.show_hidden) {
            Ok(children) => children,
            Err(err) => {
                debug!(error = %err, "cannot list children");
                return;
            }
        };

        let dirs_only = self.dirs_only;
        for entry in children.rev().filter(|e| !dirs_only || e.is_dir()) {
            self.pending.push_front(TraversalNode {
                entry,
                depth: depth + 1,
            });
        }
        trace!(dir = %parent.path().display(), pending = self.pending.len(), "expanded");
    }
}

impl Iterator for TreeWalker {
    type Item = TraversalNode;

    fn next(&mut self) -> Option<TraversalNode> {
        let node = self.pending.pop_front()?;
        self.expand(&node.entry, node.depth);
        Some(node)
    }
}

impl NodeSource for TreeWalker {
    fn peek(&self, depth: usize) -> Option<&TraversalNode> {
        peek_pending(&self.pending, depth)
    }
}
