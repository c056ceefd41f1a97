//! `pluck` CLI — query a JSON document with a dotted path.
//!
//! ## Usage
//!
//! ```sh
//! # Query a file
//! pluck data.json .hello.world.0
//!
//! # Query stdin
//! echo '{"key": "value"}' | pluck .key
//!
//! # The whole document
//! pluck data.json .
//! ```
//!
//! The final argument is always the path query. The resolved value prints in
//! its fully-detailed representation; any failure (missing file, malformed
//! JSON, bad path) exits non-zero with a diagnostic and no partial output.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pluck_core::Value;

#[derive(Parser)]
#[command(
    name = "pluck",
    version,
    about = "Query JSON documents with dotted paths",
    allow_missing_positional = true
)]
struct Cli {
    /// JSON file to read; standard input is used when omitted
    file: Option<PathBuf>,

    /// Dotted path query: `.` is the root, `.key` an object member,
    /// `.0` an array element, and segments chain (`.hello.world.0`)
    query: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let doc: Value<'static> = match &cli.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            pluck_core::from_reader(file)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => pluck_core::from_reader(io::stdin().lock())
            .context("failed to parse standard input")?,
    };

    let value: Value = pluck_core::get(&doc, &cli.query)
        .with_context(|| format!("query {:?} failed", cli.query))?;
    println!("{value:?}");

    Ok(())
}
