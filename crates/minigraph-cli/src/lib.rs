//! CLI logic for the minigraph tool.
//!
//! This module contains the core CLI logic: read a document, build its
//! graph, render it and write the result next to the input.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use minigraph::{GraphBuilder, MinigraphError};

/// Run the minigraph CLI application
///
/// This function processes the input file through the minigraph pipeline
/// and writes the rendered graph to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MinigraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), MinigraphError> {
    let output_path = args.output_path();
    info!(
        input_path = args.input,
        output_path = output_path.display().to_string(),
        format:% = args.format;
        "Processing document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process document using GraphBuilder API
    let builder = GraphBuilder::new(app_config);
    let document = builder.parse(&source)?;
    if document.is_empty() {
        warn!(input_path = args.input; "Document has nothing to draw");
    }
    let rendered = builder.render(&document, args.format)?;

    // Write output file
    fs::write(&output_path, rendered)?;

    info!(output_file = output_path.display().to_string(); "Graph exported successfully");

    Ok(())
}
