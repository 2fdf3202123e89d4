//! # Error Module
//!
//! Error types for image comparison.
//!
//! ## Design Principles
//! - **Never coerce** a degenerate comparison into a score of 0 or 1
//! - **Include context** - which input, which adjuster, what size
//! - **No partial results** - every failure is returned before any pixel is summed

use crate::core::AdjusterKind;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level library error
#[derive(Error, Debug)]
pub enum VisualDistanceError {
    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Which of the two compared images an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Errors that occur while adjusting or measuring two images
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("The {side} image is empty (zero width or height)")]
    EmptyImage { side: Side },

    #[error("{adjuster} adjuster produced a zero-area result ({width}x{height}); the images do not overlap")]
    DegenerateAdjustment {
        adjuster: AdjusterKind,
        width: u32,
        height: u32,
    },

    #[error("Adjusted images differ in size: {first_width}x{first_height} vs {second_width}x{second_height}")]
    DimensionMismatch {
        first_width: u32,
        first_height: u32,
        second_width: u32,
        second_height: u32,
    },

    #[error("Resize failed: {0}")]
    ResizeFailed(String),

    #[error("Invalid tolerance: {value} (must be within 0.0-1.0)")]
    InvalidTolerance { value: f64 },
}

/// Errors that occur while decoding an image for comparison
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, VisualDistanceError>;
