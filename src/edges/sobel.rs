//! Sobel filter on 8-bit grayscale images.
//!
//! - Convolves a single 3×3 integer kernel with the input, handling borders
//!   through [`BorderPolicy`].
//! - Accumulates in `i32` (range [-1020, 1020] for Sobel on 8-bit input) and
//!   maps the sum to `u8` through [`GradientResponse`].
//! - Each output row depends only on three input rows, so rows are filtered
//!   independently (in parallel with the `parallel` feature).
//!
//! Complexity: O(W·H) per pass; memory: one output byte per pixel.
use super::border::{BorderPolicy, GradientResponse};
use super::kernel::{Kernel3, SOBEL_X, SOBEL_Y};
use crate::error::Result;
use crate::image::{GrayImageU8, ImageU8, ImageView};
use serde::{Deserialize, Serialize};

/// Single-kernel 3×3 edge filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SobelEdgeFilter {
    pub border: BorderPolicy,
    pub response: GradientResponse,
}

impl SobelEdgeFilter {
    pub fn new(border: BorderPolicy, response: GradientResponse) -> Self {
        Self { border, response }
    }

    /// Convolve `input` with `kernel` into a newly allocated image of the same size.
    pub fn apply(&self, input: ImageU8<'_>, kernel: &Kernel3) -> Result<GrayImageU8> {
        input.validate()?;
        let mut out = GrayImageU8::try_zeroed(input.w, input.h)?;
        let w = input.w;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.raw_mut()
                .par_chunks_mut(w)
                .enumerate()
                .for_each(|(y, row)| self.filter_row(&input, kernel, y, row));
        }
        #[cfg(not(feature = "parallel"))]
        for (y, row) in out.raw_mut().chunks_mut(w).enumerate() {
            self.filter_row(&input, kernel, y, row);
        }

        Ok(out)
    }

    /// Gx pass: highlights vertical lines.
    pub fn horizontal(&self, input: ImageU8<'_>) -> Result<GrayImageU8> {
        self.apply(input, &SOBEL_X)
    }

    /// Gy pass: highlights horizontal lines.
    pub fn vertical(&self, input: ImageU8<'_>) -> Result<GrayImageU8> {
        self.apply(input, &SOBEL_Y)
    }

    fn filter_row(&self, input: &ImageU8<'_>, kernel: &Kernel3, y: usize, out: &mut [u8]) {
        let (w, h) = (input.w, input.h);
        let fill = self.border.fill();
        let rows = [-1isize, 0, 1].map(|dy| self.border.resolve(y, dy, h).map(|yy| input.row(yy)));

        for (x, out_px) in out.iter_mut().enumerate() {
            let x_idx = [-1isize, 0, 1].map(|dx| self.border.resolve(x, dx, w));
            let mut sum = 0i32;
            for (k_row, row) in kernel.weights.iter().zip(rows.iter()) {
                for (&weight, xi) in k_row.iter().zip(x_idx.iter()) {
                    let sample = match (row, xi) {
                        (Some(r), Some(i)) => r[*i],
                        _ => fill,
                    };
                    sum += weight * sample as i32;
                }
            }
            *out_px = self.response.to_u8(sum);
        }
    }
}
