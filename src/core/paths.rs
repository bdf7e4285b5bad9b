//! Root path resolution
//!
//! Helpers for turning the user-supplied root into the seed of the walk's
//! path accumulator.

use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/...` to the user's home directory.
/// Paths without a leading `~` are returned unchanged; `~user` forms are
/// not supported and pass through as-is.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Seed the path accumulator: the root rendered as a string with exactly
/// one trailing separator, so entry names can be appended directly.
pub fn root_buffer(root: &Path) -> String {
    let mut buf = root.to_string_lossy().into_owned();
    if !buf.ends_with('/') {
        buf.push('/');
    }
    buf
}
