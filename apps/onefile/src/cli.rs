//! Command-line interface definition
//!
//! The pipeline exposes no behavioral options: a bare `onefile` runs all
//! five steps with the fixed configuration. The only flag is ambient
//! observability.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "onefile",
    version,
    about = "Bundle the launcher into one distributable executable"
)]
pub struct Cli {
    /// Enable debug logging to a timestamped log file
    #[arg(long)]
    pub debug: bool,
}
