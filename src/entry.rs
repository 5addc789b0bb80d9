//! Filesystem entries: identity, classification and ordered children.

use crate::error::{Result, TreeError};
use crate::sort::entry_cmp;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One file or directory, classified once at creation.
///
/// `path` is the literal location (the resolved parent joined with the
/// entry's name); `resolved` is where that location actually points. The two
/// differ for symbolic links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    resolved: PathBuf,
    name: String,
    is_dir: bool,
}

impl Entry {
    /// Resolve a user-supplied path against the working directory.
    ///
    /// The root's display name is its full resolved path.
    pub fn root(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let resolved = fs::canonicalize(path).map_err(|source| TreeError::InvalidRoot {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: resolved.to_string_lossy().into_owned(),
            is_dir: resolved.is_dir(),
            path: resolved.clone(),
            resolved,
        })
    }

    fn child(parent: &Path, name: &OsStr) -> Self {
        let path = parent.join(name);
        // stat, not lstat: a link to a directory is a directory.
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        Self {
            resolved: resolve(parent, &path),
            name: name.to_string_lossy().into_owned(),
            is_dir,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// True for symlink-like entries whose literal and resolved paths disagree.
    pub fn differs_from_resolved(&self) -> bool {
        self.path != self.resolved
    }

    /// A linked directory that points at one of its own ancestors.
    /// Descending into it would never terminate.
    pub fn loops_back(&self) -> bool {
        self.is_dir
            && self.differs_from_resolved()
            && self
                .path
                .parent()
                .is_some_and(|parent| parent.starts_with(&self.resolved))
    }

    /// List the immediate children: directories first, then files, each group
    /// in natural order.
    ///
    /// Entries that cannot be read (permission denied, removed mid-listing) are
    /// skipped; an unreadable directory simply has no children.
    pub fn children(&self) -> Result<Children> {
        if !self.is_dir {
            return Err(TreeError::NotADirectory(self.path.clone()));
        }

        let mut entries = Vec::new();
        for result in WalkDir::new(&self.resolved).min_depth(1).max_depth(1) {
            match result {
                Ok(dent) => entries.push(Entry::child(&self.resolved, dent.file_name())),
                Err(err) => {
                    debug!(dir = %self.path.display(), error = %err, "skipping unreadable entry");
                }
            }
        }
        entries.sort_by(entry_cmp);

        Ok(Children {
            inner: entries.into_iter(),
        })
    }

    /// Like [`Entry::children`], dropping dot-entries unless `include_hidden`.
    pub fn visible_children(
        &self,
        include_hidden: bool,
    ) -> Result<impl DoubleEndedIterator<Item = Entry>> {
        Ok(self
            .children()?
            .filter(move |entry| include_hidden || !entry.is_hidden()))
    }
}

/// Canonical target of `path`, or for a dangling link the target it names.
fn resolve(parent: &Path, path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| fs::read_link(path).map(|target| parent.join(target)))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Ordered children of a directory [`Entry`].
#[derive(Debug)]
pub struct Children {
    inner: std::vec::IntoIter<Entry>,
}

impl Iterator for Children {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Children {
    fn next_back(&mut self) -> Option<Entry> {
        self.inner.next_back()
    }
}
