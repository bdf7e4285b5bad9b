//! Query-aware tree walk
//!
//! Incrementally matches the query against the file tree, depth-first.
//! Sections of the query surrounded by '/'s must all match within the same
//! path element: "d/ex/" matches "dev/example/foo", but not "dev/eta/text".
//!
//! Traversal state is the per-call (path buffer, query cursor) pair; the
//! recursion stack itself is the walk. Each level appends its entry name to
//! the shared buffer and truncates back afterwards, so a parent's prefix is
//! never rewritten.

use std::io;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::core::config::Config;
use crate::core::model::{EntryKind, MatchRecord};
use crate::core::paths::root_buffer;
use crate::core::query::Query;
use crate::core::render::Emitter;
use crate::search::fs::{DirLister, ListError};
use crate::search::matcher;

/// Upper bound on the accumulated path, in bytes.
pub const MAX_PATH_BYTES: usize = 4096;

/// Fatal walk failures. Unreadable directories are not errors: they are
/// reported on stderr and the walk continues at sibling level.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("path exceeds maximum length of {limit} bytes: {path}")]
    PathTooLong { path: String, limit: usize },

    #[error(transparent)]
    List(#[from] ListError),

    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

/// Depth-first recursive walker over a directory-listing capability.
pub struct Walker<'a, L, W: Write> {
    config: &'a Config,
    query: &'a Query,
    lister: &'a L,
    emitter: Emitter<W>,
}

impl<'a, L: DirLister, W: Write> Walker<'a, L, W> {
    pub fn new(config: &'a Config, query: &'a Query, lister: &'a L, emitter: Emitter<W>) -> Self {
        Self {
            config,
            query,
            lister,
            emitter,
        }
    }

    /// Walk the configured root, emitting every full match.
    pub fn run(&mut self) -> Result<(), WalkError> {
        let mut path = root_buffer(&self.config.root);
        self.walk(&mut path, 0)
    }

    /// Visit one directory. `path` holds the directory's accumulated path
    /// with a trailing separator; `cursor` is how much of the query the
    /// lineage above has satisfied.
    fn walk(&mut self, path: &mut String, cursor: usize) -> Result<(), WalkError> {
        let entries = match self.lister.list(Path::new(path.as_str())) {
            Ok(entries) => entries,
            Err(err @ ListError::Open { .. }) => {
                eprintln!("ffind: {}", err);
                return Ok(());
            }
            Err(err @ ListError::Read { .. }) => return Err(err.into()),
        };

        // If the rest of the query has any '/', the preceding portion must
        // be completely matched by the next directory name.
        let expects_dir = self.query.segment_pending(cursor);

        for entry in entries {
            let name = entry.name.as_str();

            if name.is_empty() {
                continue;
            }
            if name.starts_with('.') {
                if !self.config.dotfiles {
                    continue;
                }
                if name == "." || name == ".." {
                    continue;
                }
            }
            if entry.kind == EntryKind::Symlink && !self.config.follow_links {
                continue;
            }

            let mut new_cursor = matcher::advance(self.query, name, cursor);
            let is_dir = entry.kind.is_dir();

            let saved_len = path.len();
            path.push_str(name);
            if is_dir {
                path.push('/');
            }
            if path.len() > MAX_PATH_BYTES {
                return Err(WalkError::PathTooLong {
                    path: path.clone(),
                    limit: MAX_PATH_BYTES,
                });
            }

            // A directory that makes partial progress into a pending
            // segment without reaching its '/' cannot satisfy the segment;
            // skip it entirely. The very start of the query is exempt.
            let pruned = expects_dir
                && new_cursor > 0
                && self.query.char_at(new_cursor) != Some('/')
                && is_dir;

            if !pruned {
                if self.query.is_complete(new_cursor) && (!self.config.only_dirs || is_dir) {
                    let record = MatchRecord {
                        path: path.as_str(),
                        kind: entry.kind,
                    };
                    self.emitter
                        .emit(&record)
                        .map_err(|source| WalkError::Write { source })?;
                }

                if is_dir && self.config.recurse {
                    // Crossing into the directory commits a completed
                    // segment: consume its '/' before descending.
                    if self.query.char_at(new_cursor) == Some('/') {
                        new_cursor += 1;
                    }
                    self.walk(path, new_cursor)?;
                }
            }

            path.truncate(saved_len);
        }

        Ok(())
    }
}
