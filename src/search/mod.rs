//! Search module - the fuzzy matcher and the query-aware tree walk
//!
//! The matcher advances a cursor over the query for one candidate name;
//! the walker recurses through directories, using the returned cursor to
//! decide whether to print, prune, or descend.

pub mod fs;
pub mod matcher;
pub mod walker;
