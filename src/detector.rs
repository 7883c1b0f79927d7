//! Two-pass edge detection: the Gx and Gy Sobel passes over one input.
//!
//! The passes share the input read-only and own their outputs, so they run
//! concurrently under the `parallel` feature and sequentially otherwise with
//! identical results.
use crate::edges::{SobelEdgeFilter, SOBEL_X, SOBEL_Y};
use crate::error::Result;
use crate::image::{GrayImageU8, ImageU8};
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

type PassOutput = Result<(GrayImageU8, f64)>;

/// Wall time spent in each pass, in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTimings {
    pub horizontal_ms: f64,
    pub vertical_ms: f64,
    pub total_ms: f64,
}

/// Output of [`EdgeDetector::detect`].
#[derive(Clone, Debug)]
pub struct EdgeMaps {
    /// Gx response (vertical lines).
    pub horizontal: GrayImageU8,
    /// Gy response (horizontal lines).
    pub vertical: GrayImageU8,
    pub timings: PassTimings,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    filter: SobelEdgeFilter,
}

impl EdgeDetector {
    pub fn new(filter: SobelEdgeFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &SobelEdgeFilter {
        &self.filter
    }

    pub fn detect(&self, image: ImageU8<'_>) -> Result<EdgeMaps> {
        image.validate()?;
        let start = Instant::now();
        info!(
            "Applying Sobel edge detection ({}x{}, border {:?}, response {:?})",
            image.w, image.h, self.filter.border, self.filter.response
        );

        let (horizontal, vertical) = self.run_passes(image);
        let (horizontal, horizontal_ms) = horizontal?;
        let (vertical, vertical_ms) = vertical?;

        let timings = PassTimings {
            horizontal_ms,
            vertical_ms,
            total_ms: elapsed_ms(start),
        };
        info!("Edge detection finished in {:.3} ms", timings.total_ms);
        Ok(EdgeMaps {
            horizontal,
            vertical,
            timings,
        })
    }

    #[cfg(feature = "parallel")]
    fn run_passes(&self, image: ImageU8<'_>) -> (PassOutput, PassOutput) {
        rayon::join(
            || self.timed_pass("horizontal", image, false),
            || self.timed_pass("vertical", image, true),
        )
    }

    #[cfg(not(feature = "parallel"))]
    fn run_passes(&self, image: ImageU8<'_>) -> (PassOutput, PassOutput) {
        (
            self.timed_pass("horizontal", image, false),
            self.timed_pass("vertical", image, true),
        )
    }

    fn timed_pass(&self, name: &str, image: ImageU8<'_>, vertical: bool) -> PassOutput {
        debug!("  Computing {name} edges...");
        let start = Instant::now();
        let kernel = if vertical { &SOBEL_Y } else { &SOBEL_X };
        let out = self.filter.apply(image, kernel)?;
        let ms = elapsed_ms(start);
        debug!("  {name} pass done in {ms:.3} ms");
        Ok((out, ms))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::{BorderPolicy, GradientResponse};
    use crate::error::EdgeError;

    #[test]
    fn detect_matches_individual_passes() {
        let data: Vec<u8> = (0..48u32).map(|i| ((i * 37) % 251) as u8).collect();
        let img = GrayImageU8::new(8, 6, data).unwrap();
        let filter = SobelEdgeFilter::new(BorderPolicy::Replicate, GradientResponse::Magnitude);
        let maps = EdgeDetector::new(filter).detect(img.as_view()).unwrap();
        assert_eq!(maps.horizontal, filter.horizontal(img.as_view()).unwrap());
        assert_eq!(maps.vertical, filter.vertical(img.as_view()).unwrap());
        assert!(maps.timings.total_ms >= 0.0);
    }

    #[test]
    fn detect_rejects_empty_input() {
        let view = ImageU8 {
            w: 4,
            h: 0,
            stride: 4,
            data: &[],
        };
        let err = EdgeDetector::default().detect(view).unwrap_err();
        assert!(matches!(err, EdgeError::InvalidDimension { .. }));
    }
}
