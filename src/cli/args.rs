use clap::Parser;
use std::path::PathBuf;

use crate::core::params::AssetRoot;
use crate::types::{FailurePolicy, NamingScheme, PathScope};

/// Options shared by every tool.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory all relative paths are resolved against
    #[arg(long, default_value = AssetRoot::DEFAULT_RELATIVE)]
    pub root: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CommonArgs {
    pub fn asset_root(&self) -> AssetRoot {
        AssetRoot::new(&self.root)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cubemap",
    version,
    about = "Slice a horizontal-cross cubemap into six face images"
)]
pub struct CubemapArgs {
    /// Source path to the single cubemap image, relative to --root
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination directory for the six faces, relative to --root
    #[arg(short, long, default_value = "cubemap")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "resize-textures",
    version,
    about = "Resize every texture in a directory to a square"
)]
pub struct ResizeArgs {
    /// Directory holding the textures to resize, relative to --root
    #[arg(short, long)]
    pub input_dir: PathBuf,

    /// Directory where the resized textures are saved, relative to --root
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Edge length of the square output
    #[arg(long, default_value_t = 256)]
    pub target_size: u32,

    /// Extension of the images
    #[arg(long, default_value = "png")]
    pub extension: String,

    /// Output naming (original keeps the source name, size-suffix writes `<stem>_<size>.<ext>`)
    #[arg(long, value_enum, default_value_t = NamingScheme::Original)]
    pub naming: NamingScheme,

    /// What to do when a file fails (fail-fast aborts, collect records it and continues)
    #[arg(long, value_enum, default_value_t = FailurePolicy::FailFast)]
    pub on_error: FailurePolicy,

    /// Path portion searched for "ao" (full includes parent directories of --input-dir)
    #[arg(long, value_enum, default_value_t = PathScope::Full)]
    pub path_scope: PathScope,

    /// Write a JSON report of every processed file, relative to --root
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "prepare-assets",
    version,
    about = "Download texture packs listed in source_textures.txt and sort them by texture type"
)]
pub struct PrepareArgs {
    /// Optional target size to resize the textures to
    #[arg(long)]
    pub target_size: Option<u32>,

    /// JSON alias table replacing the built-in one, relative to --root
    #[arg(long)]
    pub aliases: Option<PathBuf>,

    /// What to do when an item fails (fail-fast aborts, collect records it and continues)
    #[arg(long, value_enum, default_value_t = FailurePolicy::FailFast)]
    pub on_error: FailurePolicy,

    /// Path portion searched for aliases and "ao" (full includes parents of the scratch directory)
    #[arg(long, value_enum, default_value_t = PathScope::Full)]
    pub path_scope: PathScope,

    /// Write a JSON report of the run, relative to --root
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}
