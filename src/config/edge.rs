use crate::edges::SobelEdgeFilter;
use crate::error::{EdgeError, Result};
use crate::image::io::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sample images tried in order when no input is given.
pub const DEFAULT_INPUTS: [&str; 4] = ["Lena.pgm", "sloth.png", "grey-sloth.png", "th.jpeg"];

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeToolConfig {
    /// Directory input names are resolved against.
    pub input_dir: PathBuf,
    /// Directory the two edge maps are written to.
    pub output_dir: PathBuf,
    /// Input file name inside `input_dir`; `None` searches `DEFAULT_INPUTS`.
    pub input: Option<String>,
    pub output_format: OutputFormat,
    pub filter: SobelEdgeFilter,
    /// Optional JSON run summary.
    pub report: Option<PathBuf>,
}

impl Default for EdgeToolConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            input: None,
            output_format: OutputFormat::Png,
            filter: SobelEdgeFilter::default(),
            report: None,
        }
    }
}

/// Where the two edge maps of one run are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub horizontal: PathBuf,
    pub vertical: PathBuf,
}

impl EdgeToolConfig {
    /// Path of the image to load.
    ///
    /// An explicit input is used as-is (relative to `input_dir`). Otherwise the
    /// first existing sample from `DEFAULT_INPUTS` wins, falling back to the
    /// first sample name so the loader reports it as missing.
    pub fn resolve_input(&self) -> PathBuf {
        if let Some(name) = &self.input {
            return self.input_dir.join(name);
        }
        DEFAULT_INPUTS
            .iter()
            .map(|name| self.input_dir.join(name))
            .find(|path| path.is_file())
            .unwrap_or_else(|| self.input_dir.join(DEFAULT_INPUTS[0]))
    }

    /// `<output_dir>/<stem>_edges_{horizontal,vertical}.<ext>` for `input`.
    pub fn output_paths(&self, input: &Path) -> OutputPaths {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let ext = self.output_format.extension();
        OutputPaths {
            horizontal: self
                .output_dir
                .join(format!("{stem}_edges_horizontal.{ext}")),
            vertical: self.output_dir.join(format!("{stem}_edges_vertical.{ext}")),
        }
    }
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| EdgeError::Config {
        path: path.to_path_buf(),
        detail: format!("failed to read: {e}"),
    })?;
    serde_json::from_str(&data).map_err(|e| EdgeError::Config {
        path: path.to_path_buf(),
        detail: format!("failed to parse: {e}"),
    })
}
