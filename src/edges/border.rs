use serde::{Deserialize, Serialize};

/// How taps outside the image are sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderPolicy {
    /// Use the nearest edge pixel, independently in x and y.
    #[default]
    Replicate,
    /// Read a fixed value (zero padding is `Constant(0)`).
    Constant(u8),
}

impl BorderPolicy {
    /// Resolve the tap at `i + d` along an axis of length `len`.
    ///
    /// Returns `None` when the tap falls outside and must read `fill()`.
    #[inline]
    pub fn resolve(self, i: usize, d: isize, len: usize) -> Option<usize> {
        let p = i as isize + d;
        if p >= 0 && (p as usize) < len {
            return Some(p as usize);
        }
        match self {
            BorderPolicy::Replicate => Some(if p < 0 { 0 } else { len - 1 }),
            BorderPolicy::Constant(_) => None,
        }
    }

    #[inline]
    pub fn fill(self) -> u8 {
        match self {
            BorderPolicy::Replicate => 0,
            BorderPolicy::Constant(v) => v,
        }
    }
}

/// Mapping from the signed kernel sum to an 8-bit output sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientResponse {
    /// `min(|sum|, 255)`: edge strength regardless of polarity.
    #[default]
    Magnitude,
    /// `clamp(sum, 0, 255)`: falling edges saturate to zero.
    Clamped,
}

impl GradientResponse {
    #[inline]
    pub fn to_u8(self, sum: i32) -> u8 {
        match self {
            GradientResponse::Magnitude => sum.unsigned_abs().min(255) as u8,
            GradientResponse::Clamped => sum.clamp(0, 255) as u8,
        }
    }
}
