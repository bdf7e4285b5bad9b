//! Directory-listing capability
//!
//! The walker consumes listings through the `DirLister` trait so tests can
//! substitute synthetic trees and fault injection for the real filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::model::EntryKind;

/// One entry of a directory listing. Not retained beyond the iteration
/// that produced it.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Failure modes of a directory listing. `Open` abandons one subtree;
/// `Read` (a fault in the entry stream itself) aborts the whole run.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed to open: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory entries: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Yields the entries of a directory, unordered.
pub trait DirLister {
    fn list(&self, dir: &Path) -> Result<Vec<DirEntry>, ListError>;
}

/// The real filesystem lister over `std::fs::read_dir`.
///
/// Entry kinds come from the entry's own file type: a symlink keeps kind
/// `Symlink` even when its target is a directory, so links are never
/// recursed into.
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<DirEntry>, ListError> {
        let read_dir = fs::read_dir(dir).map_err(|source| ListError::Open {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| ListError::Read {
                path: dir.to_path_buf(),
                source,
            })?;

            let kind = match entry.file_type() {
                Ok(t) if t.is_dir() => EntryKind::Dir,
                Ok(t) if t.is_symlink() => EntryKind::Symlink,
                Ok(t) if t.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }
}
