//! Run configuration
//!
//! All options are resolved once by the CLI layer and passed by reference
//! into the walker; nothing here is mutated during a run.

use std::path::PathBuf;

use crate::core::render::OutputFormat;

/// Default consecutive-match toggle character.
pub const DEFAULT_CONSEQ_CHAR: char = '=';

/// Immutable configuration for one search run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search root (already resolved: `~` expanded, default applied).
    pub root: PathBuf,

    /// Raw query text as given on the command line.
    pub query: String,

    /// Include hidden entries (names starting with '.').
    pub dotfiles: bool,

    /// Print only matches whose final component is a directory.
    pub only_dirs: bool,

    /// Fold case on both query and entry names.
    pub case_insensitive: bool,

    /// Consider symlink entries as match candidates.
    pub follow_links: bool,

    /// Descend into subdirectories.
    pub recurse: bool,

    /// Toggle character delimiting consecutive-match runs.
    pub conseq_char: char,

    /// Output format for match records.
    pub format: OutputFormat,
}

impl Config {
    /// Create a config with default flag values for the given root and query.
    pub fn new(root: impl Into<PathBuf>, query: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            query: query.into(),
            dotfiles: false,
            only_dirs: false,
            case_insensitive: false,
            follow_links: false,
            recurse: true,
            conseq_char: DEFAULT_CONSEQ_CHAR,
            format: OutputFormat::default(),
        }
    }
}
