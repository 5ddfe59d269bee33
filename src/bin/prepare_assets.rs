//! Download texture packs, sort them by texture type, optionally resize.

use clap::Parser;
use texprep::cli::{PrepareArgs, run_prepare};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_prepare(PrepareArgs::parse())
}
