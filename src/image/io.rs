//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/BMP/PGM into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer, format chosen by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use crate::error::{EdgeError, Result};
use image::{ColorType, ExtendedColorType, ImageError, ImageFormat, ImageReader};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output encodings supported by the saver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
    Jpeg,
    Pgm,
}

impl OutputFormat {
    /// Map a file extension (case-insensitive) to an output format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "pgm" => Some(Self::Pgm),
            _ => None,
        }
    }

    /// Pick the format for `path`; a path without extension is written as PGM.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension() {
            None => Ok(Self::Pgm),
            Some(ext) => ext
                .to_str()
                .and_then(Self::from_extension)
                .ok_or_else(|| EdgeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    detail: format!("unknown output extension {:?}", ext),
                }),
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Pgm => "pgm",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Pgm => ImageFormat::Pnm,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
///
/// The format is sniffed from the file content first and falls back to the
/// extension when the content is not recognized.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8> {
    if !path.is_file() {
        return Err(EdgeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = ImageReader::open(path)
        .map_err(|e| io_error(path, e))?
        .with_guessed_format()
        .map_err(|e| io_error(path, e))?;
    let format = reader.format().ok_or_else(|| EdgeError::UnsupportedFormat {
        path: path.to_path_buf(),
        detail: "unknown image format".to_string(),
    })?;

    let img = reader.decode().map_err(|e| decode_error(path, e))?;
    info!("  Image format: {:?}", format);
    info!("  Image size: {}x{}", img.width(), img.height());
    info!("  Color type: {:?}", img.color());

    if img.color() != ColorType::L8 {
        info!("  Converting to grayscale...");
    }
    let gray = img.into_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    GrayImageU8::new(width, height, gray.into_raw())
}

/// Save an 8-bit grayscale buffer; the format follows the file extension.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    ensure_parent_dir(path)?;
    let data = buffer.to_packed();
    image::save_buffer_with_format(
        path,
        &data,
        buffer.width() as u32,
        buffer.height() as u32,
        ExtendedColorType::L8,
        format.image_format(),
    )
    .map_err(|e| EdgeError::Encode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| EdgeError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    fs::write(path, json).map_err(|e| io_error(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
    }
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> EdgeError {
    if source.kind() == std::io::ErrorKind::NotFound {
        return EdgeError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    EdgeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn decode_error(path: &Path, source: ImageError) -> EdgeError {
    let path: PathBuf = path.to_path_buf();
    match source {
        ImageError::Unsupported(e) => EdgeError::UnsupportedFormat {
            path,
            detail: e.to_string(),
        },
        ImageError::IoError(e) => io_error(&path, e),
        other => EdgeError::Decode {
            path,
            source: other,
        },
    }
}
