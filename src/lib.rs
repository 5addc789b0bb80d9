#![forbid(unsafe_code)]
//! Canopy: print a directory hierarchy as a Unicode tree, with natural
//! ordering, depth limits, hidden-entry suppression and glob filtering.

pub mod cli;
pub mod entry;
pub mod error;
pub mod logging;
pub mod render;
pub mod sort;
pub mod tree;

pub use entry::Entry;
pub use error::{Result, TreeError};
pub use render::{render_tree, tree_to_lines};
pub use tree::{walk, NodeSource, Traversal, TraversalNode, TreeConfig};
