//! Error type shared by the loader, the filter and the saver.
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the edge tool can report. All of them are terminal.
#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("unable to open file: <{}>", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unsupported image format for {}: {detail}", path.display())]
    UnsupportedFormat { path: PathBuf, detail: String },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid image dimensions {width}x{height} (stride {stride})")]
    InvalidDimension {
        width: usize,
        height: usize,
        stride: usize,
    },

    #[error("failed to allocate {bytes} bytes for output image")]
    Allocation { bytes: usize },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {detail}", path.display())]
    Config { path: PathBuf, detail: String },
}

pub type Result<T> = std::result::Result<T, EdgeError>;
