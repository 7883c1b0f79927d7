//! JSON run configuration for the edge tool.
pub mod edge;

pub use edge::{load_config, EdgeToolConfig, OutputPaths, DEFAULT_INPUTS};
