use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Encode `image` to `output`, format chosen from the extension. Replaces any
/// existing file.
pub fn save_image(image: &DynamicImage, output: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output)?;
    let file = File::create(output)?;
    write_image(image, file, format)
}

/// Like [`save_image`], but fails with [`Error::Collision`] if `output` exists.
/// A failed encode leaves no file behind.
pub fn save_new_image(image: &DynamicImage, output: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output)?;
    create_new_with(output, |writer| {
        image.write_to(writer, format)?;
        Ok(())
    })
}

fn write_image(image: &DynamicImage, file: File, format: ImageFormat) -> Result<()> {
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Create `output` exclusively and fill it with `fill`. On any error after
/// creation the file is removed again, so a later run does not see a stale
/// partial file as a collision.
fn create_new_with<F>(output: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = match OpenOptions::new().write(true).create_new(true).open(output) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::Collision {
                path: output.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    let mut writer = BufWriter::new(file);
    let result = fill(&mut writer).and_then(|()| writer.flush().map_err(Error::from));
    drop(writer);
    if result.is_err() {
        let _ = fs::remove_file(output);
    }
    result
}
