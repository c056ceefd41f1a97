//! `pluck-gen` — synthetic JSON generator for stress and benchmark inputs.
//!
//! Two document shapes:
//!
//! - `--depth N`: an object nested N levels deep
//!   (`{"next":{"next":…null}}`), for recursion stress tests.
//! - `--size-mb N`: an approximately N-megabyte array of repeated small
//!   mixed-type objects, the parse-benchmark workload.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

const LINE: &str =
    r#"{"key1": "value","array": [],"obj": {},"atomArray": [11201,1e112,true,false,null,"str"]}"#;

#[derive(Parser)]
#[command(
    name = "pluck-gen",
    version,
    about = "Generate synthetic JSON documents for benchmarks and stress tests"
)]
struct Cli {
    /// Nesting depth of a `{"next": …}` chain document
    #[arg(long, conflicts_with = "size_mb")]
    depth: Option<usize>,

    /// Approximate size in megabytes of a flat array document
    #[arg(long)]
    size_mb: Option<usize>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let doc = match (cli.depth, cli.size_mb) {
        (Some(depth), _) => nested_document(depth),
        (None, Some(size_mb)) => array_document(size_mb),
        (None, None) => anyhow::bail!("nothing to generate: pass --depth or --size-mb"),
    };

    match &cli.output {
        Some(path) => fs::write(path, &doc)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(doc.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

/// `{"next":{"next":…null}}` nested `depth` objects deep.
fn nested_document(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 9 + 12);
    for _ in 0..depth {
        out.push_str(r#"{"next":"#);
    }
    out.push_str("null");
    for _ in 0..depth {
        out.push('}');
    }
    out
}

/// An array of repeated mixed-type objects, roughly `size_mb` megabytes.
fn array_document(size_mb: usize) -> String {
    let copies = (size_mb * 1_000_000) / (LINE.len() + 1);
    let mut out = String::with_capacity(copies * (LINE.len() + 1) + 2);
    out.push('[');
    for i in 0..copies {
        if i > 0 {
            out.push(',');
        }
        out.push_str(LINE);
    }
    out.push(']');
    out
}
