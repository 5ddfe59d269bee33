//! In-memory image transforms: cubemap face cropping, square Lanczos resize,
//! and the channel conversion applied after a resize.
pub mod color;
pub mod cubemap;
pub mod resize;
