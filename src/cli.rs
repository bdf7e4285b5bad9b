//! CLI module - Command-line interface definitions and handlers

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::config::{Config, DEFAULT_CONSEQ_CHAR};
use crate::core::paths::expand_tilde;
use crate::core::query::Query;
use crate::core::render::{Emitter, OutputFormat};
use crate::search::fs::FsLister;
use crate::search::walker::Walker;

/// ffind - a fuzzy path finder.
#[derive(Parser, Debug)]
#[command(name = "ffind")]
#[command(
    author,
    version,
    about,
    long_about = r#"ffind recursively searches a directory tree for paths whose component
names match a fuzzy query, and prints matches as they are found.

Matching is subsequence-based: each query character must appear in order,
but name characters in between are skipped. Two extra syntaxes tighten it:

- A toggle character (default '=') starts a consecutive run: the query
  characters up to the next toggle must be matched by contiguous name
  characters. "=foo=a" matches "foobar" but not "fxoobar".
- A '/' splits the query into segments; the fragment before a '/' must be
  matched entirely within a single path component. "s/mc" matches
  "src/main.c" via "m" and "c" inside one component.

Examples:
    ffind conf
    ffind -i -r ~/work "s/mc"
    ffind -d --only-dirs =src=
"#
)]
pub struct Cli {
    /// Fuzzy query pattern.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Search root (default: your home directory).
    #[arg(
        short,
        long,
        value_name = "ROOT",
        long_help = "Directory to start the search from.\n\n\
Defaults to your home directory. A leading `~` or `~/` is expanded."
    )]
    pub root: Option<PathBuf>,

    /// Show dotfiles.
    #[arg(
        short,
        long,
        long_help = "Include hidden entries (names starting with '.').\n\n\
The '.' and '..' pseudo-entries are never shown."
    )]
    pub dotfiles: bool,

    /// Case-insensitive search.
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Follow symbolic links.
    #[arg(
        short = 'l',
        long,
        long_help = "Consider symbolic links as match candidates.\n\n\
Links are matched and printed but never descended into, so link cycles\n\
cannot trap the walk."
    )]
    pub follow_links: bool,

    /// Print only directories.
    #[arg(short = 'D', long)]
    pub only_dirs: bool,

    /// Char to toggle consecutive match (default: '=').
    #[arg(short, long, value_name = "CHAR", default_value_t = DEFAULT_CONSEQ_CHAR)]
    pub conseq: char,

    /// Do not descend into subdirectories.
    #[arg(short = 'n', long)]
    pub no_recurse: bool,

    /// Output format (text/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): one matched path per line\n\
- jsonl: one JSON object per match ({\"path\": ..., \"kind\": ...})\n\n\
Both formats are emitted incrementally, so piping into `head` shows\n\
matches as they are discovered."
    )]
    pub format: String,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let root = match cli.root {
        Some(root) => expand_tilde(&root),
        None => dirs::home_dir().context("could not determine the home directory")?,
    };

    let config = Config {
        root,
        query: cli.query,
        dotfiles: cli.dotfiles,
        only_dirs: cli.only_dirs,
        case_insensitive: cli.ignore_case,
        follow_links: cli.follow_links,
        recurse: !cli.no_recurse,
        conseq_char: cli.conseq,
        format,
    };

    let query = Query::from_config(&config);
    let stdout = io::stdout();
    let emitter = Emitter::new(config.format, stdout.lock());
    let mut walker = Walker::new(&config, &query, &FsLister, emitter);
    walker.run()?;

    Ok(())
}
