use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Lanczos3 resize of a packed 8-bit buffer.
pub fn resize_u8_pixels(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    pixel_type: PixelType,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, pixel_type)?;
    let mut dst_image = Image::new(target_cols, target_rows, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Resize to exactly `target_size` x `target_size`, ignoring aspect ratio.
///
/// Single-channel sources stay single-channel, sources with alpha are resized
/// as RGBA, everything else as RGB. 16-bit and float sources are reduced to
/// 8 bits first.
pub fn resize_square(image: &DynamicImage, target_size: u32) -> Result<DynamicImage> {
    if target_size == 0 {
        return Err(Error::ZeroSize { size: target_size });
    }
    let (cols, rows) = (image.width(), image.height());
    info!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, target_size, target_size
    );

    let color = image.color();
    let resized = if color.channel_count() == 1 {
        debug!("Resizing as U8 luma");
        let data = resize_u8_pixels(
            image.to_luma8().into_raw(),
            cols,
            rows,
            target_size,
            target_size,
            PixelType::U8,
        )?;
        GrayImage::from_raw(target_size, target_size, data).map(DynamicImage::ImageLuma8)
    } else if color.has_alpha() {
        debug!("Resizing as U8x4 with alpha");
        let data = resize_u8_pixels(
            image.to_rgba8().into_raw(),
            cols,
            rows,
            target_size,
            target_size,
            PixelType::U8x4,
        )?;
        RgbaImage::from_raw(target_size, target_size, data).map(DynamicImage::ImageRgba8)
    } else {
        debug!("Resizing as U8x3");
        let data = resize_u8_pixels(
            image.to_rgb8().into_raw(),
            cols,
            rows,
            target_size,
            target_size,
            PixelType::U8x3,
        )?;
        RgbImage::from_raw(target_size, target_size, data).map(DynamicImage::ImageRgb8)
    };

    resized.ok_or_else(|| Error::Resize("resized buffer does not match target size".to_string()))
}
