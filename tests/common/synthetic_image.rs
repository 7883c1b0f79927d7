/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Left of `split_x` is `left`, the rest is `right`.
pub fn vertical_step_u8(width: usize, height: usize, split_x: usize, left: u8, right: u8) -> Vec<u8> {
    let mut img = vec![left; width * height];
    for row in img.chunks_mut(width) {
        row[split_x..].fill(right);
    }
    img
}

/// Row-major transpose of a packed `width × height` buffer.
pub fn transpose_u8(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut out = vec![0u8; data.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = data[y * width + x];
        }
    }
    out
}
