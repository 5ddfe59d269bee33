//! High-level, ergonomic library API: slice a cubemap into faces, batch-resize a
//! texture directory, and run the fetch-and-sort flow for texture packs. Prefer
//! these entrypoints over the low-level `core` and `io` modules.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::alias::AliasTable;
use crate::core::layout::CubemapLayout;
use crate::core::params::{AssetRoot, PrepareParams, ResizeParams};
use crate::core::processing::color::{convert, detect_color_mode, match_text};
use crate::core::processing::cubemap::crop_faces;
use crate::core::processing::resize::resize_square;
use crate::error::{Error, Result};
use crate::io::writers::{save_image, save_new_image};
use crate::io::{ArchiveFetcher, extract_zip, find_files_with_extension, move_no_clobber, read_manifest};
use crate::types::{FailurePolicy, NamingScheme, PathScope};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ItemStatus {
    Processed,
    Skipped,
    Failed,
}

/// What happened to one input of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    /// Input file, or the URL for fetch items
    pub path: PathBuf,
    pub status: ItemStatus,
    pub output: Option<PathBuf>,
    pub message: Option<String>,
}

/// Per-item outcomes of a batch plus running totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub items: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn record_processed(&mut self, path: &Path, output: Option<PathBuf>) {
        self.processed += 1;
        self.items.push(ItemOutcome {
            path: path.to_path_buf(),
            status: ItemStatus::Processed,
            output,
            message: None,
        });
    }

    pub fn record_skipped(&mut self, path: &Path, reason: &str) {
        self.skipped += 1;
        self.items.push(ItemOutcome {
            path: path.to_path_buf(),
            status: ItemStatus::Skipped,
            output: None,
            message: Some(reason.to_string()),
        });
    }

    pub fn record_failed(&mut self, path: &Path, error: &Error) {
        self.errors += 1;
        self.items.push(ItemOutcome {
            path: path.to_path_buf(),
            status: ItemStatus::Failed,
            output: None,
            message: Some(error.to_string()),
        });
    }

    pub fn merge(&mut self, other: BatchReport) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.errors += other.errors;
        self.items.extend(other.items);
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }

    /// Fold one item result into the report, or hand the error back when the
    /// policy says to abort.
    fn settle(
        &mut self,
        policy: FailurePolicy,
        path: &Path,
        result: Result<Option<PathBuf>>,
    ) -> Result<()> {
        match result {
            Ok(output) => {
                self.record_processed(path, output);
                Ok(())
            }
            Err(e) if policy == FailurePolicy::Collect && !e.is_precondition() => {
                warn!("Error processing {:?}: {}", path, e);
                self.record_failed(path, &e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Slice a horizontal-cross cubemap into `top.png`, `bottom.png`, `left.png`,
/// `back.png`, `right.png` and `front.png` inside `output_dir`.
///
/// The source is converted to RGB first. Returns the written paths in that
/// order. Existing face files are replaced.
pub fn slice_cubemap(input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let cubemap = image::open(input)?.to_rgb8();
    info!(
        "Slicing cubemap {:?} ({}x{})",
        input,
        cubemap.width(),
        cubemap.height()
    );

    let mut written = Vec::with_capacity(6);
    for (face, image) in crop_faces(&cubemap, &CubemapLayout::default()) {
        let path = output_dir.join(face.file_name());
        save_image(&DynamicImage::ImageRgb8(image), &path)?;
        debug!("Saved {:?}", path);
        written.push(path);
    }
    info!("Wrote {} faces to {:?}", written.len(), output_dir);
    Ok(written)
}

fn resized_file_name(source: &Path, params: &ResizeParams) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: source.display().to_string(),
    })?;
    Ok(match params.naming {
        NamingScheme::Original => PathBuf::from(file_name),
        NamingScheme::SizeSuffix => {
            let stem = source.file_stem().unwrap_or(file_name).to_string_lossy();
            PathBuf::from(format!(
                "{}_{}.{}",
                stem, params.target_size, params.extension
            ))
        }
    })
}

fn resize_one(
    source: &Path,
    input_dir: &Path,
    output_dir: &Path,
    params: &ResizeParams,
) -> Result<PathBuf> {
    let dest = output_dir.join(resized_file_name(source, params)?);
    if dest.exists() {
        return Err(Error::Collision { path: dest });
    }

    let image = image::open(source)?;
    let resized = resize_square(&image, params.target_size)?;
    let mode = detect_color_mode(source, input_dir, params.path_scope);
    debug!("Converting {:?} to {}", source, mode);
    save_new_image(&convert(resized, mode), &dest)?;
    Ok(dest)
}

/// Resize every `.<extension>` file under `input_dir` (recursively) to a
/// `target_size` square and write it into `output_dir`.
///
/// Paths containing `"ao"` (within `params.path_scope`) become single-channel,
/// everything else RGB. A destination that already exists is an [`Error::Collision`].
pub fn resize_textures(
    input_dir: &Path,
    output_dir: &Path,
    params: &ResizeParams,
) -> Result<BatchReport> {
    if !input_dir.is_dir() {
        return Err(Error::NotADirectory {
            path: input_dir.to_path_buf(),
        });
    }
    if params.target_size == 0 {
        return Err(Error::ZeroSize {
            size: params.target_size,
        });
    }
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();
    for source in find_files_with_extension(input_dir, &params.extension)? {
        info!(
            "Current File: {}",
            source.file_stem().unwrap_or_default().to_string_lossy()
        );
        let result = resize_one(&source, input_dir, output_dir, params).map(Some);
        report.settle(params.on_error, &source, result)?;
    }

    info!(
        "Resize complete: processed={} errors={}",
        report.processed, report.errors
    );
    Ok(report)
}

/// Move every `.<extension>` file under `scratch_dir` whose path matches an
/// alias into `scratch_dir/<category>/`.
///
/// With `PathScope::Full` the whole path is matched, so a pattern occurring in
/// a parent of `scratch_dir` applies to every file. Files that match nothing
/// are left where they are.
pub fn sort_textures(
    scratch_dir: &Path,
    table: &AliasTable,
    extension: &str,
    policy: FailurePolicy,
    scope: PathScope,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for path in find_files_with_extension(scratch_dir, extension)? {
        let key = match_text(&path, scratch_dir, scope);
        let Some(class) = table.classify(&key) else {
            debug!("No alias matches {:?}, leaving it in place", key);
            report.record_skipped(&path, "no alias");
            continue;
        };
        if class.is_ambiguous() {
            let others: Vec<&str> = class.shadowed.iter().map(|r| r.pattern.as_str()).collect();
            warn!(
                "{:?} matches alias '{}' ({}) and also {:?}; using '{}'",
                key,
                class.rule.pattern,
                class.category(),
                others,
                class.category()
            );
        }

        let result = (|| -> Result<Option<PathBuf>> {
            let type_dir = scratch_dir.join(class.category());
            fs::create_dir_all(&type_dir)?;
            let file_name = path.file_name().unwrap_or_default();
            let dest = type_dir.join(file_name);
            if dest != path {
                move_no_clobber(&path, &dest)?;
            }
            Ok(Some(dest))
        })();
        report.settle(policy, &path, result)?;
    }
    Ok(report)
}

/// Outcome of one category in [`prepare_assets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: String,
    pub output_dir: PathBuf,
    pub report: BatchReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareReport {
    /// One item per manifest URL
    pub fetch: BatchReport,
    /// One item per discovered texture file
    pub sorted: BatchReport,
    pub categories: Vec<CategoryReport>,
}

impl PrepareReport {
    pub fn total_errors(&self) -> usize {
        self.fetch.errors
            + self.sorted.errors
            + self.categories.iter().map(|c| c.report.errors).sum::<usize>()
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Publish a category without resizing: each file lands in `final_dir` under
/// its stem. A stem already present, including one left by an earlier run, is
/// an [`Error::Collision`].
fn move_stripped(image_dir: &Path, final_dir: &Path, params: &PrepareParams) -> Result<BatchReport> {
    fs::create_dir_all(final_dir)?;
    let mut report = BatchReport::default();
    for path in find_files_with_extension(image_dir, &params.extension)? {
        let result = (|| -> Result<Option<PathBuf>> {
            let stem = path.file_stem().ok_or_else(|| Error::InvalidArgument {
                arg: "texture",
                value: path.display().to_string(),
            })?;
            let dest = final_dir.join(stem);
            move_no_clobber(&path, &dest)?;
            Ok(Some(dest))
        })();
        report.settle(params.on_error, &path, result)?;
    }
    Ok(report)
}

/// Download every archive listed in `<root>/source_textures.txt`, sort the
/// extracted textures by alias, and publish them under `<root>/terrain/`.
///
/// With a target size each category goes through [`resize_textures`];
/// without one the files are moved as-is with their extension stripped. The
/// scratch directory `<root>/downloads` is removed when the run completes.
pub fn prepare_assets(
    root: &AssetRoot,
    params: &PrepareParams,
    table: &AliasTable,
    fetcher: &dyn ArchiveFetcher,
) -> Result<PrepareReport> {
    if let Some(size) = params.target_size {
        if size == 0 {
            return Err(Error::ZeroSize { size });
        }
        info!("Texture resize enabled: target size is {}", size);
    }

    let urls = read_manifest(&root.manifest_path())?;
    let scratch_dir = root.scratch_dir();
    fs::create_dir_all(&scratch_dir)?;

    let mut report = PrepareReport::default();

    info!("Downloading...");
    let start = Instant::now();
    for (idx, url) in urls.iter().enumerate() {
        info!("File {} / {}: {}", idx + 1, urls.len(), url);
        let result = fetcher
            .fetch(url)
            .and_then(|bytes| extract_zip(&bytes, &scratch_dir))
            .map(|_| Some(scratch_dir.clone()));
        report.fetch.settle(params.on_error, Path::new(url), result)?;
    }
    info!(
        "Done! Approximated download time: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );

    let output_dir = root.terrain_dir();
    fs::create_dir_all(&output_dir)?;

    report.sorted = sort_textures(
        &scratch_dir,
        table,
        &params.extension,
        params.on_error,
        params.path_scope,
    )?;

    for category in table.categories() {
        let image_dir = scratch_dir.join(category);
        let final_dir = output_dir.join(category);
        if !image_dir.is_dir() {
            warn!("No '{}' textures found, skipping", category);
            continue;
        }

        let category_report = match params.target_size {
            Some(size) => resize_textures(&image_dir, &final_dir, &params.resize_params(size))?,
            None => move_stripped(&image_dir, &final_dir, params)?,
        };
        info!(
            "Category '{}': processed={} errors={} -> {:?}",
            category, category_report.processed, category_report.errors, final_dir
        );
        report.categories.push(CategoryReport {
            category: category.to_string(),
            output_dir: final_dir,
            report: category_report,
        });
    }

    fs::remove_dir_all(&scratch_dir)?;
    debug!("Removed scratch directory {:?}", scratch_dir);
    Ok(report)
}
