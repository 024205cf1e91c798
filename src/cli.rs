//! Command-line interface implementation for c4gen.
//! Provides argument parsing using clap.

use crate::docs::DEFAULT_MODEL;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for c4gen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "c4gen: component scaffolding tool for the C4 web component library",
    long_about = None
)]
pub struct Args {
    /// Path to the component library package (contains package.json and src/)
    #[arg(value_name = "PACKAGE_DIR", default_value = ".")]
    pub package_dir: PathBuf,

    /// Model used for AI documentation generation
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
