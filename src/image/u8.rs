use crate::error::{EdgeError, Result};

/// Borrowed 8-bit grayscale view. Rows may be padded (`stride >= w`).
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Build a view after checking the layout against the buffer length.
    pub fn try_new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        let view = Self { w, h, stride, data };
        view.validate()?;
        Ok(view)
    }

    /// Reject empty images, `stride < w` and buffers too short for the last row.
    pub fn validate(&self) -> Result<()> {
        let invalid = || EdgeError::InvalidDimension {
            width: self.w,
            height: self.h,
            stride: self.stride,
        };
        if self.w == 0 || self.h == 0 || self.stride < self.w {
            return Err(invalid());
        }
        let needed = (self.h - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(self.w))
            .ok_or_else(invalid)?;
        if self.data.len() < needed {
            return Err(invalid());
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
