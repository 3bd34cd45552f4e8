//! Best-effort loading of the small raster logo placed on every chart.
//!
//! A missing or broken logo must never stop a chart from being generated:
//! [`AssetLoader::load`] reports exactly what went wrong as an [`AssetError`],
//! and [`AssetLoader::load_or_none`] turns any failure into "no logo" after
//! logging it. Loads are never retried.

use crate::image::Image;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default upper bound on the size of a logo file
pub const DEFAULT_LOGO_LIMIT: usize = 512 * 1024;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("could not read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset is empty")]
    Empty,

    #[error("asset is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Decode(#[from] image::ImageError),
}

/// Somewhere the bytes of an asset can be fetched from
pub trait AssetSource {
    /// Human readable description used in log messages
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Vec<u8>, AssetError>;
}

/// An asset stored on disk
#[derive(Debug, Clone)]
pub struct FileAsset(pub PathBuf);

impl FileAsset {
    pub fn new<P: AsRef<Path>>(path: P) -> FileAsset {
        FileAsset(path.as_ref().to_path_buf())
    }
}

impl AssetSource for FileAsset {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<u8>, AssetError> {
        std::fs::read(&self.0).map_err(|source| AssetError::Io {
            path: self.0.clone(),
            source,
        })
    }
}

/// An asset already held in memory, e.g. from `include_bytes!`
#[derive(Debug, Clone)]
pub struct MemoryAsset {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl AssetSource for MemoryAsset {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, AssetError> {
        Ok(self.bytes.clone())
    }
}

#[derive(Debug, Clone)]
pub struct AssetLoader {
    /// Assets larger than this many bytes are refused
    pub max_bytes: usize,
}

impl Default for AssetLoader {
    fn default() -> Self {
        AssetLoader {
            max_bytes: DEFAULT_LOGO_LIMIT,
        }
    }
}

impl AssetLoader {
    pub fn new(max_bytes: usize) -> AssetLoader {
        AssetLoader { max_bytes }
    }

    /// Fetch and decode an image
    pub fn load<S: AssetSource + ?Sized>(&self, source: &S) -> Result<Image, AssetError> {
        let bytes = source.fetch()?;
        if bytes.is_empty() {
            return Err(AssetError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(AssetError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }
        Ok(Image::from_bytes(bytes)?)
    }

    /// Fetch and decode an image, degrading to [None] on any failure
    pub fn load_or_none<S: AssetSource + ?Sized>(&self, source: &S) -> Option<Image> {
        match self.load(source) {
            Ok(image) => {
                log::debug!(
                    "loaded logo {} ({}x{})",
                    source.describe(),
                    image.width,
                    image.height
                );
                Some(image)
            }
            Err(e) => {
                log::warn!("continuing without logo {}: {e}", source.describe());
                None
            }
        }
    }
}
