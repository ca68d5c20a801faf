//! Command-line adapter: parses flags and drives a [`Store`] through
//! create/open, append, list and flush.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use store::Store;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "empdb", about = "Flat-file employee database")]
pub struct Args {
    /// Path to the database file.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,
    /// Create a new database file. Fails if the file already exists.
    #[arg(short = 'n', long = "new")]
    pub new: bool,
    /// Add an employee, given as `name,address,hours`. May be repeated.
    #[arg(short = 'a', long = "add", value_name = "NAME,ADDRESS,HOURS")]
    pub add: Vec<String>,
    /// List every employee after applying additions.
    #[arg(short = 'l', long = "list")]
    pub list: bool,
    /// Fsync the database file after writing it.
    #[arg(long)]
    pub sync: bool,
}

/// Runs one invocation, writing the listing (if requested) to `out`.
///
/// The file is rewritten only when the run changed something: `-n` (so a
/// plain `-n` leaves a valid empty database behind) or at least one `-a`.
/// A list-only run never writes.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let path = &args.file;

    let mut store = if args.new {
        Store::create(path).with_context(|| anyhow!("creating {}", path.display()))?
    } else {
        Store::open(path).with_context(|| anyhow!("opening {}", path.display()))?
    };

    store.sync = args.sync;

    for input in &args.add {
        store
            .append_str(input)
            .with_context(|| anyhow!("adding `{input}`"))?;
        info!(count = store.len(), "added employee");
    }

    if args.list {
        write_listing(&store, out)?;
    }

    if args.new || !args.add.is_empty() {
        store
            .flush()
            .with_context(|| anyhow!("writing {}", path.display()))?;
    }

    Ok(())
}

fn write_listing<W: Write>(store: &Store, out: &mut W) -> Result<()> {
    for (index, name, address) in store.list() {
        writeln!(out, "employee: {index}")?;
        writeln!(out, "name: {name}")?;
        writeln!(out, "addr: {address}")?;
        writeln!(out, "------------")?;
    }

    out.flush()?;
    Ok(())
}
