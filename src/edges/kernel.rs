//! Fixed 3×3 integer convolution kernels.

/// 3×3 integer kernel indexed as `weights[row][col]`, i.e. `[dy + 1][dx + 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel3 {
    pub weights: [[i32; 3]; 3],
}

/// Horizontal derivative; responds to vertical lines.
pub const SOBEL_X: Kernel3 = Kernel3 {
    weights: [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
};

/// Vertical derivative; responds to horizontal lines.
pub const SOBEL_Y: Kernel3 = Kernel3 {
    weights: [[-1, -2, -1], [0, 0, 0], [1, 2, 1]],
};

impl Kernel3 {
    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }

    pub fn transpose(&self) -> Self {
        let mut weights = [[0; 3]; 3];
        for (r, row) in self.weights.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                weights[c][r] = v;
            }
        }
        Self { weights }
    }

    /// Largest absolute response for 8-bit input.
    pub fn max_response(&self) -> i32 {
        let pos: i32 = self.weights.iter().flatten().filter(|&&v| v > 0).sum();
        let neg: i32 = self.weights.iter().flatten().filter(|&&v| v < 0).sum();
        255 * pos.max(-neg)
    }
}
