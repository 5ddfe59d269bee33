use std::path::Path;

use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use texprep::{CubeFace, slice_cubemap};

/// Distinct solid color per grid cell, indexed by (column, row).
fn cell_color(col: u32, row: u32) -> Rgb<u8> {
    Rgb([(col * 60) as u8, (row * 100) as u8, (40 + col * 10 + row) as u8])
}

fn synthetic_cross(face: u32) -> RgbImage {
    RgbImage::from_fn(face * 4, face * 3, |x, y| cell_color(x / face, y / face))
}

#[test]
fn writes_six_named_faces() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sky.png");
    synthetic_cross(16).save(&input).unwrap();
    let out = dir.path().join("cubemap");

    let written = slice_cubemap(&input, &out).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["top.png", "bottom.png", "left.png", "back.png", "right.png", "front.png"]
    );
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 6);
}

#[test]
fn middle_row_is_left_back_right_front() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sky.png");
    synthetic_cross(8).save(&input).unwrap();
    let out = dir.path().join("faces");
    slice_cubemap(&input, &out).unwrap();

    let expected = [
        (CubeFace::Top, (1, 0)),
        (CubeFace::Bottom, (1, 2)),
        (CubeFace::Left, (0, 1)),
        (CubeFace::Back, (1, 1)),
        (CubeFace::Right, (2, 1)),
        (CubeFace::Front, (3, 1)),
    ];
    for (face, (col, row)) in expected {
        let img = image::open(out.join(face.file_name())).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (8, 8), "{face}");
        assert!(
            img.pixels().all(|p| *p == cell_color(col, row)),
            "{face} does not match cell ({col}, {row})"
        );
    }
}

#[test]
fn faces_reproduce_source_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    let source = RgbImage::from_fn(20, 15, |x, y| Rgb([x as u8 * 12, y as u8 * 16, (x + y) as u8]));
    source.save(&input).unwrap();
    let out = dir.path().join("faces");
    slice_cubemap(&input, &out).unwrap();

    let back = image::open(out.join("back.png")).unwrap().to_rgb8();
    for (x, y, px) in back.enumerate_pixels() {
        assert_eq!(px, source.get_pixel(5 + x, 5 + y));
    }
}

#[test]
fn alpha_source_becomes_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sky.png");
    RgbaImage::from_pixel(12, 9, Rgba([1, 2, 3, 128]))
        .save(&input)
        .unwrap();
    let out = dir.path().join("faces");
    slice_cubemap(&input, &out).unwrap();

    let top = image::open(out.join("top.png")).unwrap();
    assert_eq!(top.color().channel_count(), 3);
    assert_eq!(top.dimensions(), (3, 3));
}

#[test]
fn uneven_source_truncates_edges() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sky.png");
    RgbImage::new(402, 301).save(&input).unwrap();
    let out = dir.path().join("faces");
    slice_cubemap(&input, &out).unwrap();

    for face in CubeFace::ALL {
        let (w, h) = image::open(out.join(face.file_name())).unwrap().dimensions();
        assert!(w.abs_diff(100) <= 1 && h.abs_diff(100) <= 1, "{face}: {w}x{h}");
    }
}

#[test]
fn rerun_replaces_faces_and_reuses_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sky.png");
    synthetic_cross(4).save(&input).unwrap();
    let out = dir.path().join("faces");
    slice_cubemap(&input, &out).unwrap();
    slice_cubemap(&input, &out).unwrap();
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 6);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = slice_cubemap(Path::new("/definitely/not/here.png"), &dir.path().join("o"));
    assert!(err.is_err());
}
