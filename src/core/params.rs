use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{FailurePolicy, NamingScheme, PathScope};

/// Directory every tool path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRoot {
    pub textures_dir: PathBuf,
}

impl AssetRoot {
    pub const DEFAULT_RELATIVE: &'static str = "assets/textures";

    pub fn new(textures_dir: impl Into<PathBuf>) -> Self {
        Self {
            textures_dir: textures_dir.into(),
        }
    }

    /// Relative paths are joined onto the root; absolute paths pass through.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.textures_dir.join(path)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.textures_dir.join("source_textures.txt")
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.textures_dir.join("downloads")
    }

    pub fn terrain_dir(&self) -> PathBuf {
        self.textures_dir.join("terrain")
    }
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RELATIVE)
    }
}

/// Batch resizer parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeParams {
    /// Extension (without the dot) of the files to pick up
    pub extension: String,
    /// Edge length of the square output
    pub target_size: u32,
    pub naming: NamingScheme,
    pub on_error: FailurePolicy,
    /// Path portion the `"ao"` check looks at
    #[serde(default)]
    pub path_scope: PathScope,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            extension: "png".to_string(),
            target_size: 256,
            naming: NamingScheme::Original,
            on_error: FailurePolicy::FailFast,
            path_scope: PathScope::Full,
        }
    }
}

/// Fetch-and-sort parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareParams {
    /// None keeps downloaded textures at their original size
    pub target_size: Option<u32>,
    pub extension: String,
    pub on_error: FailurePolicy,
    /// Path portion alias patterns and the `"ao"` check look at
    #[serde(default)]
    pub path_scope: PathScope,
}

impl Default for PrepareParams {
    fn default() -> Self {
        Self {
            target_size: None,
            extension: "png".to_string(),
            on_error: FailurePolicy::FailFast,
            path_scope: PathScope::Full,
        }
    }
}

impl PrepareParams {
    /// Parameters handed to the resizer for each category.
    pub fn resize_params(&self, target_size: u32) -> ResizeParams {
        ResizeParams {
            extension: self.extension.clone(),
            target_size,
            naming: NamingScheme::Original,
            on_error: self.on_error,
            path_scope: self.path_scope,
        }
    }
}
