//! # Repository Bootstrap CLI
//!
//! This is the binary entry point for the `repo-bootstrap` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Driving the bootstrap sequence (clone, identity configuration,
//!   environment install) based on the parsed arguments.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The individual external-tool invocations live in the `lib.rs` library
//! crate, ensuring that the binary is a thin wrapper around the reusable
//! library functionality.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
