//! Tree traversal: ordering, depth limiting, hidden/dirs-only pruning and glob
//! filtering of a directory hierarchy.
//!
//! Two consumption modes share the [`NodeSource`] interface:
//!
//! - [`TreeWalker`] streams nodes from an explicit worklist, listing each
//!   directory only when it is reached.
//! - [`NodeList`] holds a fully materialized sequence, required by the
//!   ancestor-preserving glob pass in [`filter_nodes`].

mod batch;
mod glob;
mod walk;

use crate::entry::Entry;

pub use batch::{collect_tree, filter_nodes, NodeList};
pub use glob::GlobFilter;
pub use walk::TreeWalker;

/// An entry and its distance below the root (direct children are depth 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalNode {
    pub entry: Entry,
    pub depth: usize,
}

/// Configuration for tree traversal.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Deepest level to emit (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Whether to include dot-entries and their subtrees.
    pub show_hidden: bool,
    /// Whether to skip files entirely.
    pub dirs_only: bool,
    /// Shell-style wildcard; `*` keeps everything.
    pub pattern: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_hidden: false,
            dirs_only: false,
            pattern: "*".to_string(),
        }
    }
}

/// A traversal consumed one node at a time, with lookahead by depth.
pub trait NodeSource: Iterator<Item = TraversalNode> {
    /// The next pending node at `depth` that still belongs to the current
    /// ancestor chain, without consuming anything.
    ///
    /// `Some` means the group at that level has more siblings to come.
    fn peek(&self, depth: usize) -> Option<&TraversalNode>;
}

/// Scan pending nodes for `depth`. A shallower node closes the group, so the
/// scan stops there.
fn peek_pending<'a>(
    pending: impl IntoIterator<Item = &'a TraversalNode>,
    depth: usize,
) -> Option<&'a TraversalNode> {
    for node in pending {
        if node.depth == depth {
            return Some(node);
        }
        if node.depth < depth {
            return None;
        }
    }
    None
}

/// The result of [`walk`].
pub enum Traversal {
    /// Unfiltered walk, read incrementally.
    Streaming(TreeWalker),
    /// Glob-filtered walk, materialized.
    Filtered(NodeList),
    /// Nothing below the root survived: a file root, an empty directory, or a
    /// filter that matched nothing.
    Empty,
}

impl Traversal {
    pub fn is_empty(&self) -> bool {
        matches!(self, Traversal::Empty)
    }
}

impl Iterator for Traversal {
    type Item = TraversalNode;

    fn next(&mut self) -> Option<TraversalNode> {
        match self {
            Traversal::Streaming(walker) => walker.next(),
            Traversal::Filtered(list) => list.next(),
            Traversal::Empty => None,
        }
    }
}

impl NodeSource for Traversal {
    fn peek(&self, depth: usize) -> Option<&TraversalNode> {
        match self {
            Traversal::Streaming(walker) => walker.peek(depth),
            Traversal::Filtered(list) => list.peek(depth),
            Traversal::Empty => None,
        }
    }
}

/// Walk the hierarchy below `root` in pre-order, directories before files.
///
/// Without a pattern the walk streams; with one, the whole tree is collected
/// first and reduced to the matches plus their ancestor directories.
pub fn walk(root: &Entry, config: &TreeConfig) -> Traversal {
    if !root.is_dir() {
        return Traversal::Empty;
    }

    let walker = TreeWalker::new(root, config);
    let filter = GlobFilter::new(&config.pattern);
    if filter.matches_all() {
        if walker.is_exhausted() {
            return Traversal::Empty;
        }
        return Traversal::Streaming(walker);
    }

    let nodes = filter_nodes(walker.collect(), &filter);
    tracing::debug!(kept = nodes.len(), pattern = %config.pattern, "glob filter applied");
    if nodes.is_empty() {
        Traversal::Empty
    } else {
        Traversal::Filtered(NodeList::new(nodes))
    }
}
