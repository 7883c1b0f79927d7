use super::*;
use crate::error::EdgeError;
use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};

fn image_from_rows(rows: &[&[u8]]) -> GrayImageU8 {
    let w = rows[0].len();
    let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
    GrayImageU8::new(w, rows.len(), data).unwrap()
}

fn step_image(width: usize, height: usize, split_x: usize, left: u8, right: u8) -> GrayImageU8 {
    let mut img = GrayImageU8::try_zeroed(width, height).unwrap();
    for y in 0..height {
        let row = img.row_mut(y);
        row[..split_x].fill(left);
        row[split_x..].fill(right);
    }
    img
}

fn noise_image(width: usize, height: usize, seed: u32) -> GrayImageU8 {
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    GrayImageU8::new(width, height, data).unwrap()
}

fn transpose(img: &GrayImageU8) -> GrayImageU8 {
    let mut out = GrayImageU8::try_zeroed(img.height(), img.width()).unwrap();
    for y in 0..img.height() {
        for x in 0..img.width() {
            out.set(y, x, img.get(x, y));
        }
    }
    out
}

fn rows_of(img: &GrayImageU8) -> Vec<Vec<u8>> {
    img.rows().map(|r| r.to_vec()).collect()
}

#[test]
fn constant_image_has_no_gradient() {
    let filter = SobelEdgeFilter::default();
    for v in [0u8, 17, 128, 255] {
        let img = GrayImageU8::new(7, 5, vec![v; 35]).unwrap();
        let gx = filter.horizontal(img.as_view()).unwrap();
        let gy = filter.vertical(img.as_view()).unwrap();
        assert!(gx.as_raw().iter().all(|&p| p == 0), "gx nonzero for v={v}");
        assert!(gy.as_raw().iter().all(|&p| p == 0), "gy nonzero for v={v}");
    }
}

#[test]
fn vertical_step_shows_only_in_horizontal_pass() {
    let img = step_image(6, 4, 3, 0, 255);
    let filter = SobelEdgeFilter::default();
    let gx = filter.horizontal(img.as_view()).unwrap();
    let gy = filter.vertical(img.as_view()).unwrap();

    for row in gx.rows() {
        assert_eq!(row, &[0, 0, 255, 255, 0, 0]);
    }
    assert!(gy.as_raw().iter().all(|&p| p == 0));
}

#[test]
fn transposed_input_swaps_kernel_roles() {
    let img = noise_image(9, 6, 42);
    let filter = SobelEdgeFilter::default();
    let gx = filter.apply(img.as_view(), &SOBEL_X).unwrap();
    let t = transpose(&img);
    let gy_t = filter.apply(t.as_view(), &SOBEL_X.transpose()).unwrap();
    assert_eq!(rows_of(&gy_t), rows_of(&transpose(&gx)));
}

#[test]
fn output_dimensions_match_input() {
    let filter = SobelEdgeFilter::default();
    for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 3), (17, 9)] {
        let img = noise_image(w, h, 7);
        for kernel in [SOBEL_X, SOBEL_Y] {
            let out = filter.apply(img.as_view(), &kernel).unwrap();
            assert_eq!((out.width(), out.height()), (w, h));
            assert_eq!(out.stride(), w);
        }
    }
}

#[test]
fn corner_pixel_replicates_into_border_taps() {
    let img = image_from_rows(&[&[50, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
    let replicate = SobelEdgeFilter::default();
    let gx = replicate.horizontal(img.as_view()).unwrap();
    assert_eq!(
        rows_of(&gx),
        vec![vec![150, 150, 0], vec![50, 50, 0], vec![0, 0, 0]]
    );
    let gy = replicate.vertical(img.as_view()).unwrap();
    assert_eq!(
        rows_of(&gy),
        vec![vec![150, 50, 0], vec![150, 50, 0], vec![0, 0, 0]]
    );

    let zero = SobelEdgeFilter::new(BorderPolicy::Constant(0), GradientResponse::Magnitude);
    let gx = zero.horizontal(img.as_view()).unwrap();
    assert_eq!(
        rows_of(&gx),
        vec![vec![0, 100, 0], vec![0, 50, 0], vec![0, 0, 0]]
    );
}

#[test]
fn falling_edge_depends_on_response_mode() {
    let img = step_image(4, 3, 2, 255, 0);
    let magnitude = SobelEdgeFilter::default().horizontal(img.as_view()).unwrap();
    let clamped = SobelEdgeFilter::new(BorderPolicy::Replicate, GradientResponse::Clamped)
        .horizontal(img.as_view())
        .unwrap();
    assert_eq!(magnitude.row(1), &[0, 255, 255, 0]);
    assert!(clamped.as_raw().iter().all(|&p| p == 0));
}

#[test]
fn repeated_runs_are_identical() {
    let img = noise_image(31, 23, 3);
    let filter = SobelEdgeFilter::default();
    let a = filter.vertical(img.as_view()).unwrap();
    let b = filter.vertical(img.as_view()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn strided_view_matches_packed() {
    let img = noise_image(5, 4, 11);
    let stride = 8;
    let mut padded = vec![0xAAu8; stride * 4];
    for (y, row) in img.rows().enumerate() {
        padded[y * stride..y * stride + 5].copy_from_slice(row);
    }
    let view = ImageU8::try_new(5, 4, stride, &padded).unwrap();
    let filter = SobelEdgeFilter::default();
    assert_eq!(
        filter.horizontal(view).unwrap(),
        filter.horizontal(img.as_view()).unwrap()
    );
}

#[test]
fn empty_image_is_rejected() {
    let data: [u8; 0] = [];
    let view = ImageU8 {
        w: 0,
        h: 3,
        stride: 0,
        data: &data,
    };
    let err = SobelEdgeFilter::default().horizontal(view).unwrap_err();
    assert!(matches!(
        err,
        EdgeError::InvalidDimension {
            width: 0,
            height: 3,
            ..
        }
    ));
}
