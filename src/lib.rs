#![doc = r#"
texprep — offline texture asset preparation for a terrain renderer.

This crate provides a typed API for the three asset-preparation tools that ship as
binaries alongside it:

- `cubemap`: slice a horizontal-cross cubemap into six face images,
- `prepare-assets`: download zipped texture packs, sort their files into texture
  categories by filename alias, and optionally resize them,
- `resize-textures`: batch-resize a texture directory to square images.

Every path is resolved against an explicit [`AssetRoot`] (default
`assets/textures`), never against ambient process state.

Slice a cubemap
---------------
```rust,no_run
use std::path::Path;

fn main() -> texprep::Result<()> {
    let faces = texprep::slice_cubemap(
        Path::new("assets/textures/skybox.png"),
        Path::new("assets/textures/cubemap"),
    )?;
    assert_eq!(faces.len(), 6); // top, bottom, left, back, right, front
    Ok(())
}
```

The middle row of the cross is read as left, back, right, front.

Batch resize
------------
```rust,no_run
use std::path::Path;
use texprep::{resize_textures, FailurePolicy, NamingScheme, PathScope, ResizeParams};

fn main() -> texprep::Result<()> {
    let params = ResizeParams {
        extension: "png".to_string(),
        target_size: 512,
        naming: NamingScheme::Original,
        on_error: FailurePolicy::Collect,
        path_scope: PathScope::Full,
    };
    let report = resize_textures(Path::new("in"), Path::new("out"), &params)?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Outputs are always `target_size x target_size`. Files whose path contains `"ao"`
are written as single-channel luminance, all others as RGB. The whole path is
matched by default, parent directories included; [`PathScope::Relative`] limits
the match to the input directory and below. An output file that
already exists is an [`Error::Collision`], never an overwrite.

Fetch and sort texture packs
----------------------------
```rust,no_run
use texprep::{prepare_assets, AliasTable, AssetRoot, HttpFetcher, PrepareParams};

fn main() -> texprep::Result<()> {
    let root = AssetRoot::default();
    let params = PrepareParams { target_size: Some(1024), ..PrepareParams::default() };
    let report = prepare_assets(&root, &params, &AliasTable::default(), &HttpFetcher::new()?)?;
    println!("errors={}", report.total_errors());
    Ok(())
}
```

Error handling
--------------
All public functions return `texprep::Result<T>`. The default
[`FailurePolicy::FailFast`] aborts on the first failing item;
[`FailurePolicy::Collect`] records per-item failures in the returned report and
keeps going.

Useful modules
--------------
- [`api`] — high-level entry points and batch reports.
- [`core`] — cubemap layout, alias table, parameters, in-memory processing.
- [`io`] — archive fetching, manifest parsing, file discovery, writers.
- [`cli`] — argument structs and runners behind the binaries.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::alias::{AliasRule, AliasTable, Classification};
pub use core::layout::{CropRect, CubemapLayout};
pub use core::params::{AssetRoot, PrepareParams, ResizeParams};
pub use error::{Error, Result};
pub use types::{ColorMode, CubeFace, FailurePolicy, NamingScheme, PathScope};

// Fetching
pub use io::{ArchiveFetcher, HttpFetcher};

// High-level API re-exports
pub use api::{
    BatchReport, CategoryReport, ItemOutcome, ItemStatus, PrepareReport, prepare_assets,
    resize_textures, slice_cubemap, sort_textures,
};
