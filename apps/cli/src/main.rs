//! dashpatch CLI: one-shot patch for the student dashboard page.
//!
//! Removes the manual token button, collapses the id fallbacks, and swaps in
//! the normalized `initApp` block, then rewrites the file in place.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
