//! Command-line argument definitions for the minigraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use std::path::{Path, PathBuf};

use clap::Parser;

use minigraph::OutputFormat;

/// Command-line arguments for the minigraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input document
    #[arg(help = "Path to the input YAML or JSON file")]
    pub input: String,

    /// Path to the output file (defaults to the input path with the format's extension)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, pdf, dot)
    #[arg(short, long, default_value = "png")]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns where the rendered output is written.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => PathBuf::from(output),
            None => Path::new(&self.input).with_extension(self.format.extension()),
        }
    }
}
