//! Slice a horizontal-cross cubemap into six face images.

use clap::Parser;
use texprep::cli::{CubemapArgs, run_cubemap};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_cubemap(CubemapArgs::parse())
}
