use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::{prepare_assets, resize_textures, slice_cubemap};
use crate::core::alias::AliasTable;
use crate::core::params::{PrepareParams, ResizeParams};
use crate::io::HttpFetcher;

use super::args::{CubemapArgs, PrepareArgs, ResizeArgs};
use super::errors::AppError;

/// Install the fmt subscriber. `RUST_LOG` wins; otherwise `info`, or `debug`
/// with `--log`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn run_cubemap(args: CubemapArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.common.log);
    let root = args.common.asset_root();
    let input = root.resolve(&args.input);
    let output_dir = root.resolve(&args.output_dir);

    let faces = slice_cubemap(&input, &output_dir)?;
    info!("Successfully processed: {:?} -> {} faces in {:?}", input, faces.len(), output_dir);
    Ok(())
}

pub fn run_resize(args: ResizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.common.log);

    if args.target_size == 0 {
        return Err(AppError::ZeroSize {
            size: args.target_size,
        }
        .into());
    }
    if args.extension.is_empty() || args.extension.starts_with('.') {
        return Err(AppError::InvalidExtension {
            extension: args.extension,
        }
        .into());
    }

    let root = args.common.asset_root();
    let input_dir = root.resolve(&args.input_dir);
    let output_dir = root.resolve(&args.output_dir);
    let params = ResizeParams {
        extension: args.extension,
        target_size: args.target_size,
        naming: args.naming,
        on_error: args.on_error,
        path_scope: args.path_scope,
    };

    info!("Resizing {:?} -> {:?}", input_dir, output_dir);
    let report = resize_textures(&input_dir, &output_dir, &params).map_err(AppError::from)?;

    if let Some(path) = &args.report {
        let path = root.resolve(path);
        report.write_json(&path)?;
        info!("Report written to {:?}", path);
    }
    info!("Processed: {}", report.processed);
    info!("Errors: {}", report.errors);

    if report.errors > 0 {
        return Err(AppError::ItemsFailed {
            errors: report.errors,
        }
        .into());
    }
    Ok(())
}

pub fn run_prepare(args: PrepareArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.common.log);

    if args.target_size == Some(0) {
        return Err(AppError::ZeroSize { size: 0 }.into());
    }

    let root = args.common.asset_root();
    let table = match &args.aliases {
        Some(path) => AliasTable::from_json_file(&root.resolve(path))?,
        None => AliasTable::default(),
    };
    let params = PrepareParams {
        target_size: args.target_size,
        on_error: args.on_error,
        path_scope: args.path_scope,
        ..PrepareParams::default()
    };

    let fetcher = HttpFetcher::new()?;
    let report = prepare_assets(&root, &params, &table, &fetcher)?;

    if let Some(path) = &args.report {
        let path = root.resolve(path);
        report.write_json(&path)?;
        info!("Report written to {:?}", path);
    }
    info!("Fetched: {} / {}", report.fetch.processed, report.fetch.items.len());
    info!("Sorted: {} (unmatched: {})", report.sorted.processed, report.sorted.skipped);
    for category in &report.categories {
        info!(
            "{}: {} file(s) in {:?}",
            category.category, category.report.processed, category.output_dir
        );
    }

    let errors = report.total_errors();
    if errors > 0 {
        return Err(AppError::ItemsFailed { errors }.into());
    }
    Ok(())
}
