//! Geometry of the horizontal-cross cubemap layout.
//!
//! The source image is split into a 4x3 grid. Only six of the twelve cells carry
//! a face:
//!
//! ```text
//!          +-------+
//!          |  top  |
//! +--------+-------+-------+-------+
//! |  left  | back  | right | front |
//! +--------+-------+-------+-------+
//!          | bottom|
//!          +-------+
//! ```
//!
//! The middle row runs left, back, right, front. Many tutorials draw it as
//! left, front, right, back; the source images this crate targets do not.
use crate::types::CubeFace;

/// Pixel rectangle to crop, in source coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CubemapLayout {
    pub columns: u32,
    pub rows: u32,
}

impl Default for CubemapLayout {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 3,
        }
    }
}

impl CubemapLayout {
    /// Grid cell `(column, row)` holding `face`.
    pub fn cell(&self, face: CubeFace) -> (u32, u32) {
        match face {
            CubeFace::Top => (1, 0),
            CubeFace::Bottom => (1, 2),
            CubeFace::Left => (0, 1),
            CubeFace::Back => (1, 1),
            CubeFace::Right => (2, 1),
            CubeFace::Front => (3, 1),
        }
    }

    /// Crop rectangle for `face` in an image of `width` x `height`.
    ///
    /// Offsets are `width / columns` and `height / rows` in floating point. Each
    /// edge is truncated to a whole pixel on its own, so faces of an image that is
    /// not evenly divisible can differ by one pixel.
    pub fn face_rect(&self, face: CubeFace, width: u32, height: u32) -> CropRect {
        let horizontal_offset = width as f64 / self.columns as f64;
        let vertical_offset = height as f64 / self.rows as f64;
        let (col, row) = self.cell(face);

        let left = (col as f64 * horizontal_offset) as u32;
        let right = ((col + 1) as f64 * horizontal_offset) as u32;
        let top = (row as f64 * vertical_offset) as u32;
        let bottom = ((row + 1) as f64 * vertical_offset) as u32;

        CropRect {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}
