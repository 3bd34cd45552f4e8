use crate::Pt;
use thiserror::Error;

/// All errors that chart generation can produce
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse an image that was added to the document
    Image(#[from] image::ImageError),

    #[error("invalid configuration: {0}")]
    /// The configuration file could not be parsed
    Config(#[from] toml::de::Error),

    #[error("page is listed in the page order but missing from the document")]
    PageMissing,

    #[error("page refers to an image that is missing from the document")]
    ImageMissing,

    #[error("block of height {required} does not fit on an empty page ({available} available)")]
    /// A single block is taller than the printable area of a fresh page, so no
    /// amount of page breaking can place it
    BlockTooTall { required: Pt, available: Pt },
}
