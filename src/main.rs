//! sfind — print pathnames matching a name glob or linked to a reference file.
//!
//! Thin binary entry point. All logic lives in the `sfind` library.

use std::io;

use clap::Parser;
use sfind::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries matches only.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let mode = args.mode()?;

    sfind::search()
        .roots(args.dirs)
        .mode(mode)
        .run(io::stdout().lock())?;

    Ok(())
}
