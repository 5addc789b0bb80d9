use globset::{Glob, GlobMatcher};
use tracing::debug;

use crate::entry::Entry;

enum Matcher {
    All,
    Glob(GlobMatcher),
    /// Patterns `globset` rejects (e.g. an unclosed `[`) compare literally.
    Literal(String),
}

/// Shell-style wildcard tested against an entry's full path and its name.
pub struct GlobFilter {
    matcher: Matcher,
}

impl GlobFilter {
    /// An empty pattern behaves like `*`.
    pub fn new(pattern: &str) -> Self {
        let matcher = if pattern.is_empty() || pattern == "*" {
            Matcher::All
        } else {
            match Glob::new(pattern) {
                Ok(glob) => Matcher::Glob(glob.compile_matcher()),
                Err(err) => {
                    debug!(pattern, error = %err, "invalid glob, matching literally");
                    Matcher::Literal(pattern.to_string())
                }
            }
        };
        Self { matcher }
    }

    /// Whether this filter keeps every entry.
    pub fn matches_all(&self) -> bool {
        matches!(self.matcher, Matcher::All)
    }

    pub fn is_match(&self, entry: &Entry) -> bool {
        let full = entry.path().to_string_lossy().replace('\\', "/");
        match &self.matcher {
            Matcher::All => true,
            Matcher::Glob(glob) => glob.is_match(&full) || glob.is_match(entry.name()),
            Matcher::Literal(text) => full == *text || entry.name() == text,
        }
    }
}
