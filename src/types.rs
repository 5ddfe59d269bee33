//! Shared types and enums used across texprep.
//! Includes the cubemap `CubeFace`, the output `ColorMode`, the resizer
//! `NamingScheme`, the batch `FailurePolicy`, and the heuristic `PathScope`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One face of a cross-layout cubemap.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum CubeFace {
    Top,
    Bottom,
    Left,
    Back,
    Right,
    Front,
}

impl CubeFace {
    /// Faces in output order: top, bottom, then the middle row left to right.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Left,
        CubeFace::Back,
        CubeFace::Right,
        CubeFace::Front,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
            CubeFace::Left => "left",
            CubeFace::Back => "back",
            CubeFace::Right => "right",
            CubeFace::Front => "front",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Channel layout of a written texture.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ColorMode {
    Rgb,
    Luma,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Rgb => write!(f, "RGB"),
            ColorMode::Luma => write!(f, "L"),
        }
    }
}

/// How the resizer names its output files.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
pub enum NamingScheme {
    /// Keep the source file name.
    #[default]
    Original,
    /// `<stem>_<size>.<ext>`
    SizeSuffix,
}

/// What a batch does when a single item fails.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
pub enum FailurePolicy {
    /// Abort the whole run on the first error.
    #[default]
    FailFast,
    /// Record the failure for that item and keep going.
    Collect,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::FailFast => write!(f, "FailFast"),
            FailurePolicy::Collect => write!(f, "Collect"),
        }
    }
}

/// How much of a file's path the substring heuristics (AO marker, alias
/// patterns) look at.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
pub enum PathScope {
    /// The whole path as given, including every parent directory.
    #[default]
    Full,
    /// From the batch directory's own name downward.
    Relative,
}

impl std::fmt::Display for PathScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathScope::Full => write!(f, "Full"),
            PathScope::Relative => write!(f, "Relative"),
        }
    }
}
