//! Configuration for the encoder CLI.
//!
//! Handles command-line argument parsing. The encoder takes exactly two
//! paths; logging is controlled through `RUST_LOG`, not flags.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the G-code packet encoder
#[derive(Debug, Parser)]
#[command(name = "gcode-encode")]
#[command(about = "Encode G-code text into firmware packet streams")]
#[command(version)]
pub struct Args {
    /// Source G-code text file
    #[arg(long, help = "Path to the G-code input file")]
    pub input: PathBuf,

    /// Destination binary file
    #[arg(long, help = "Path to write the encoded packet stream")]
    pub output: PathBuf,
}

impl Args {
    /// Parse configuration from the command line.
    pub fn from_env() -> Self {
        Self::parse()
    }
}
