//! Decoding images from disk or memory into rasters.
//!
//! Format detection is left to the `image` crate, which sniffs the
//! content rather than trusting the extension.

use super::Raster;
use crate::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Raster {
    /// Decode an image file into a raster anchored at (0,0)
    pub fn open(path: impl AsRef<Path>) -> Result<Raster, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raster = decode(&bytes, path)?;
        debug!(
            path = %path.display(),
            width = raster.width(),
            height = raster.height(),
            "Loaded image"
        );
        Ok(raster)
    }

    /// Decode an in-memory encoded image (PNG, JPEG, ...)
    pub fn from_bytes(bytes: &[u8]) -> Result<Raster, LoadError> {
        decode(bytes, Path::new("<memory>"))
    }
}

fn decode(bytes: &[u8], path: &Path) -> Result<Raster, LoadError> {
    image::load_from_memory(bytes)
        .map(Raster::new)
        .map_err(|e| LoadError::Decode {
            path: PathBuf::from(path),
            reason: e.to_string(),
        })
}
