//! Command line interface for rundown
//!
//! This module contains the CLI argument definitions and the command
//! implementations for the import and view subcommands.

mod args;
mod commands;

pub use args::{Cli, Import, View};
pub use commands::{Commands, ImportCommand, ViewCommand};

use crate::error::Result;
use clap::Parser;

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli).await
}
