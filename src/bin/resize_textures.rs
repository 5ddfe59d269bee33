//! Batch-resize a texture directory to square images.

use clap::Parser;
use texprep::cli::{ResizeArgs, run_resize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_resize(ResizeArgs::parse())
}
