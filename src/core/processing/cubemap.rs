use image::{RgbImage, imageops};
use tracing::debug;

use crate::core::layout::CubemapLayout;
use crate::types::CubeFace;

/// Crop all six faces out of a cross-layout cubemap, in `CubeFace::ALL` order.
pub fn crop_faces(image: &RgbImage, layout: &CubemapLayout) -> Vec<(CubeFace, RgbImage)> {
    let (width, height) = image.dimensions();
    CubeFace::ALL
        .iter()
        .map(|&face| {
            let rect = layout.face_rect(face, width, height);
            debug!(
                "Face {}: x={} y={} {}x{}",
                face, rect.x, rect.y, rect.width, rect.height
            );
            let cropped = imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height);
            (face, cropped.to_image())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_faces_are_exact_subrectangles() {
        let image = RgbImage::from_fn(8, 6, |x, y| Rgb([x as u8, y as u8, (x * 10 + y) as u8]));
        let faces = crop_faces(&image, &CubemapLayout::default());
        assert_eq!(faces.len(), 6);

        let layout = CubemapLayout::default();
        for (face, cropped) in &faces {
            let rect = layout.face_rect(*face, 8, 6);
            assert_eq!(cropped.dimensions(), (2, 2));
            for (x, y, px) in cropped.enumerate_pixels() {
                assert_eq!(px, image.get_pixel(rect.x + x, rect.y + y));
            }
        }
    }
}
