pub mod raster;
pub use raster::{save_image, save_new_image};
