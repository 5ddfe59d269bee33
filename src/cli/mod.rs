//! Command Line Interface (CLI) layer for texprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) behind the `cubemap`,
//! `resize-textures` and `prepare-assets` binaries. It wires user-provided
//! options to the library functionality exposed via `texprep::api`.
//!
//! If you are embedding texprep into another application, prefer using
//! the high-level `texprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CommonArgs, CubemapArgs, PrepareArgs, ResizeArgs};
pub use errors::AppError;
pub use runner::{init_logging, run_cubemap, run_prepare, run_resize};
