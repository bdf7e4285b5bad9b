//! ffind - a fuzzy path finder
//!
//! ffind walks a directory tree and prints paths whose component names
//! fuzzily match a query pattern:
//! - scattered (subsequence) matching by default
//! - consecutive-run matching between toggle characters (default '=')
//! - '/'-delimited query segments that must match within one path component

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
