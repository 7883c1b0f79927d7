//! Owned 8-bit grayscale buffer.
//!
//! Filter outputs are allocated here. Allocation goes through
//! `try_reserve_exact` so an oversized request surfaces as
//! [`EdgeError::Allocation`] instead of aborting the process.
use super::{ImageU8, ImageView, ImageViewMut};
use crate::error::{EdgeError, Result};

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap tightly packed bytes (`stride == width`).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::from_raw(width, height, width, data)
    }

    /// Wrap raw bytes with an explicit row stride.
    pub fn from_raw(width: usize, height: usize, stride: usize, data: Vec<u8>) -> Result<Self> {
        ImageU8::try_new(width, height, stride, &data)?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Allocate a zeroed `width × height` buffer with `stride == width`.
    pub fn try_zeroed(width: usize, height: usize) -> Result<Self> {
        Self::try_zeroed_with_stride(width, height, width)
    }

    /// Allocate a zeroed buffer whose rows are `stride` bytes apart.
    pub fn try_zeroed_with_stride(width: usize, height: usize, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 || stride < width {
            return Err(EdgeError::InvalidDimension {
                width,
                height,
                stride,
            });
        }
        let bytes = stride
            .checked_mul(height)
            .ok_or(EdgeError::Allocation { bytes: usize::MAX })?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| EdgeError::Allocation { bytes })?;
        data.resize(bytes, 0);
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes between consecutive rows
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = y * self.stride + x;
        self.data[i] = v;
    }

    /// Raw backing storage, row padding included.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Copy the pixels into a buffer without row padding.
    pub fn to_packed(&self) -> Vec<u8> {
        if self.stride == self.width {
            return self.data[..self.width * self.height].to_vec();
        }
        let mut out = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }

    /// Consume the buffer, returning packed row-major pixels.
    pub fn into_packed(self) -> Vec<u8> {
        if self.stride == self.width {
            let mut data = self.data;
            data.truncate(self.width * self.height);
            data
        } else {
            self.to_packed()
        }
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.width).then_some(&self.data[..self.width * self.height])
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_buffer_packs_rows() {
        let data = vec![1, 2, 9, 3, 4, 9];
        let img = GrayImageU8::from_raw(2, 2, 3, data).unwrap();
        assert_eq!(img.get(1, 1), 4);
        assert_eq!(img.to_packed(), vec![1, 2, 3, 4]);
        assert_eq!(img.into_packed(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn rejects_short_buffer_and_narrow_stride() {
        assert!(matches!(
            GrayImageU8::from_raw(4, 2, 4, vec![0; 7]),
            Err(EdgeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            GrayImageU8::from_raw(4, 2, 3, vec![0; 8]),
            Err(EdgeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn zeroed_rejects_empty_dimensions() {
        assert!(matches!(
            GrayImageU8::try_zeroed(0, 5),
            Err(EdgeError::InvalidDimension { width: 0, .. })
        ));
    }

    #[test]
    fn huge_allocation_reports_allocation_error() {
        let err = GrayImageU8::try_zeroed(usize::MAX / 2, 3).unwrap_err();
        assert!(matches!(err, EdgeError::Allocation { .. }));
    }
}
