//! One load → filter → save run of the edge tool.
use crate::config::EdgeToolConfig;
use crate::detector::{EdgeDetector, PassTimings};
use crate::edges::{BorderPolicy, GradientResponse};
use crate::error::Result;
use crate::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of a finished run; written as JSON when a report path is set.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRunReport {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub border: BorderPolicy,
    pub response: GradientResponse,
    pub horizontal_output: PathBuf,
    pub vertical_output: PathBuf,
    pub timings: PassTimings,
}

pub fn run_edge_tool(config: &EdgeToolConfig) -> Result<EdgeRunReport> {
    let input = config.resolve_input();
    info!("Loading image: {}", input.display());
    let gray = load_grayscale_image(&input)?;
    info!("Image loaded ({}x{})", gray.width(), gray.height());

    let detector = EdgeDetector::new(config.filter);
    let maps = detector.detect(gray.as_view())?;

    let outputs = config.output_paths(&input);
    save_grayscale_u8(&maps.horizontal, &outputs.horizontal)?;
    info!("Saved: {}", outputs.horizontal.display());
    save_grayscale_u8(&maps.vertical, &outputs.vertical)?;
    info!("Saved: {}", outputs.vertical.display());

    let report = EdgeRunReport {
        input,
        width: gray.width(),
        height: gray.height(),
        border: config.filter.border,
        response: config.filter.response,
        horizontal_output: outputs.horizontal,
        vertical_output: outputs.vertical,
        timings: maps.timings,
    };
    if let Some(path) = &config.report {
        write_json_file(path, &report)?;
        info!("Report written to {}", path.display());
    }
    Ok(report)
}
