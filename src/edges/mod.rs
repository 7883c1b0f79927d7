//! Edge filtering: 3×3 Sobel kernels on 8-bit grayscale images.
//!
//! - `kernel`: the Gx/Gy integer kernels (transposes of each other).
//! - `border`: out-of-range tap handling and the sum → `u8` mapping.
//! - `sobel`: the filter itself, one kernel per call.
//!
//! Design goals
//! - Exact integer arithmetic; output is a pure function of the input bytes.
//! - Handle borders by clamping indices (replicate) unless configured otherwise.
//! - Never mutate the input; each call returns a freshly allocated image.

pub mod border;
pub mod kernel;
pub mod sobel;

pub use border::{BorderPolicy, GradientResponse};
pub use kernel::{Kernel3, SOBEL_X, SOBEL_Y};
pub use sobel::SobelEdgeFilter;

#[cfg(test)]
mod tests;
