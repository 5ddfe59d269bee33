//! Core building blocks: cubemap layout geometry, the texture alias table,
//! parameter structs, and in-memory image processing. These are internal
//! primitives consumed by the high-level `api` module.
pub mod alias;
pub mod layout;
pub mod params;
pub mod processing;
