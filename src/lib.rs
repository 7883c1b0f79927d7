#![doc = include_str!("../README.md")]

pub mod config;
pub mod detector;
pub mod edges;
pub mod error;
pub mod image;
pub mod runner;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{EdgeDetector, EdgeMaps, PassTimings};
pub use crate::edges::{BorderPolicy, GradientResponse, Kernel3, SobelEdgeFilter};
pub use crate::error::{EdgeError, Result};
pub use crate::runner::{run_edge_tool, EdgeRunReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_edges::prelude::*;
///
/// # fn main() -> sobel_edges::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let maps = EdgeDetector::default().detect(img)?;
/// println!("{}x{} in {:.3} ms", maps.horizontal.width(), maps.horizontal.height(), maps.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8, ImageView};
    pub use crate::{EdgeDetector, EdgeMaps, SobelEdgeFilter};
}
