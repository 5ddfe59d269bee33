use std::borrow::Cow;
use std::path::Path;

use image::DynamicImage;

use crate::types::{ColorMode, PathScope};

/// Path fragment marking an ambient-occlusion map.
pub const AO_MARKER: &str = "ao";

/// The text the substring heuristics run against.
///
/// `Full` is the path as given. `Relative` starts at `base`'s own name, so the
/// directory the batch was started on still counts but its location on disk
/// does not.
pub fn match_text<'a>(path: &'a Path, base: &Path, scope: PathScope) -> Cow<'a, str> {
    match scope {
        PathScope::Full => path.to_string_lossy(),
        PathScope::Relative => {
            let anchor = base.parent().unwrap_or(base);
            path.strip_prefix(anchor).unwrap_or(path).to_string_lossy()
        }
    }
}

/// Channel layout for a texture, decided from its path alone.
///
/// Any occurrence of `"ao"` counts, so `chaos/foo.png` is also treated as an
/// AO map.
pub fn detect_color_mode(path: &Path, base: &Path, scope: PathScope) -> ColorMode {
    if match_text(path, base, scope).contains(AO_MARKER) {
        ColorMode::Luma
    } else {
        ColorMode::Rgb
    }
}

pub fn convert(image: DynamicImage, mode: ColorMode) -> DynamicImage {
    match mode {
        ColorMode::Luma => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorMode::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}
