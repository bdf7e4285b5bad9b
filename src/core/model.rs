//! Match record model
//!
//! A match record is the unit of output: the accumulated path of a fully
//! matched entry plus the entry's kind.

use serde::Serialize;

/// The kind of a directory entry, as reported by the entry itself
/// (symlinks are never resolved to their targets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl EntryKind {
    /// True only for real directories; a symlink to a directory is not one.
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Dir)
    }
}

/// One fully matched path, ready for emission.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord<'a> {
    /// Accumulated path from the search root, '/'-joined, with a trailing
    /// separator on directories.
    pub path: &'a str,

    /// Kind of the final matched component.
    pub kind: EntryKind,
}
