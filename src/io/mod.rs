//! I/O layer: archive fetching and extraction, the URL manifest, recursive
//! file discovery with no-clobber moves, and image writers.
pub mod fetch;
pub use fetch::{ArchiveFetcher, HttpFetcher, extract_zip};

pub mod manifest;
pub use manifest::{parse_manifest, read_manifest};

pub mod scan;
pub use scan::{find_files_with_extension, move_no_clobber};

pub mod writers;
