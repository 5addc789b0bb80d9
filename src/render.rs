//! Tree rendering: one text line per node, with indentation and connector
//! glyphs derived from sibling lookahead.

use crate::entry::Entry;
use crate::tree::{walk, NodeSource, TraversalNode, TreeConfig};
use std::io::{self, Write};

pub const DIR_ICON: &str = "\u{1F4C1}"; // 📁
pub const FILE_ICON: &str = "\u{1F4C4}"; // 📄
pub const BRANCH: &str = "\u{2502}"; // │
pub const FORK: &str = "\u{251c}\u{2500} "; // ├─
pub const TERMINAL: &str = "\u{2514}\u{2500} "; // └─
pub const ARROW: &str = "->";

const CONTINUATION: &str = "\u{2502}  ";
const BLANK: &str = "   ";

/// Sanitize control characters so a name can never break a line or inject
/// terminal control sequences.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Icon and name, plus `-> target` for symlink-like entries.
pub fn entry_label(entry: &Entry) -> String {
    let icon = if entry.is_dir() { DIR_ICON } else { FILE_ICON };
    let mut label = format!("{} {}", icon, sanitize_terminal_text(entry.name()));
    if entry.differs_from_resolved() {
        let target = sanitize_terminal_text(&entry.resolved().to_string_lossy());
        label.push_str(&format!(" {} {}", ARROW, target));
    }
    label
}

/// Builds node lines, caching per-level continuation flags.
///
/// `indents[i]` records whether level `i + 1` still has siblings pending. It
/// is filled from [`NodeSource::peek`] when a level is first entered below an
/// ancestor and dropped when the walk climbs back above it. While the walk
/// stays inside that ancestor the answer cannot change, so the cache matches
/// a fresh `peek` for every level.
#[derive(Debug, Default)]
pub struct TreeRenderer {
    indents: Vec<bool>,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `node`, which has just been taken from `pending`.
    pub fn render_line<S: NodeSource + ?Sized>(
        &mut self,
        node: &TraversalNode,
        pending: &S,
    ) -> String {
        let depth = node.depth;
        self.indents.truncate(depth.saturating_sub(1));
        while self.indents.len() + 1 < depth {
            let level = self.indents.len() + 1;
            self.indents.push(pending.peek(level).is_some());
        }

        let mut line = String::new();
        for &more in &self.indents {
            line.push_str(if more { CONTINUATION } else { BLANK });
        }
        line.push_str(if pending.peek(depth).is_some() {
            FORK
        } else {
            TERMINAL
        });
        line.push_str(&entry_label(&node.entry));
        line
    }
}

/// Write the root line and then one line per node. Returns the line count.
pub fn write_tree<W, S>(out: &mut W, root: &Entry, nodes: &mut S) -> io::Result<usize>
where
    W: Write + ?Sized,
    S: NodeSource + ?Sized,
{
    writeln!(out, "{}", entry_label(root))?;
    let mut renderer = TreeRenderer::new();
    let mut count = 1;
    while let Some(node) = nodes.next() {
        let line = renderer.render_line(&node, &*nodes);
        writeln!(out, "{}", line)?;
        count += 1;
    }
    Ok(count)
}

/// Walk `root` with `config` and write the rendered tree to `out`.
pub fn render_tree<W: Write + ?Sized>(
    out: &mut W,
    root: &Entry,
    config: &TreeConfig,
) -> io::Result<usize> {
    let mut traversal = walk(root, config);
    write_tree(out, root, &mut traversal)
}

/// Render the whole tree into a vector of lines (root line first).
pub fn tree_to_lines(root: &Entry, config: &TreeConfig) -> Vec<String> {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_tree(&mut buf, root, config);
    String::from_utf8_lossy(&buf)
        .lines()
        .map(String::from)
        .collect()
}
