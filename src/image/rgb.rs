//! Three-channel 8-bit images in row-major layout.
//!
//! `RgbView` borrows a source frame for the duration of a bake; `RgbBuffer`
//! owns patches, atlases and debug frames. The crate never looks at channel
//! meaning, so BGR data works the same way as long as it is consistent.
use super::traits::{ImageView, ImageViewMut};
use crate::error::BakeError;

pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];

/// Read-only view over a packed or strided RGB frame.
#[derive(Clone, Copy, Debug)]
pub struct RgbView<'a> {
    pub w: usize,
    pub h: usize,
    /// Pixels between consecutive rows
    pub stride: usize,
    pub data: &'a [Rgb],
}

impl<'a> RgbView<'a> {
    /// Wrap a tightly packed pixel slice, checking it holds exactly `w × h` pixels.
    pub fn new(w: usize, h: usize, data: &'a [Rgb]) -> Result<Self, BakeError> {
        if data.len() != w * h {
            return Err(BakeError::DimensionMismatch {
                what: "frame pixel count",
                expected: w * h,
                found: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.stride + x]
    }

    /// Pixel at signed coordinates, or `None` outside the frame.
    #[inline]
    pub fn get_signed(&self, x: isize, y: isize) -> Option<Rgb> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }
}

impl<'a> ImageView for RgbView<'a> {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed RGB buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbBuffer {
    w: usize,
    h: usize,
    data: Vec<Rgb>,
}

impl RgbBuffer {
    /// Zero-initialized (black) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, BLACK)
    }

    pub fn filled(w: usize, h: usize, px: Rgb) -> Self {
        Self {
            w,
            h,
            data: vec![px; w * h],
        }
    }

    /// Build from interleaved bytes (`w × h × 3`).
    pub fn from_raw(w: usize, h: usize, bytes: Vec<u8>) -> Result<Self, BakeError> {
        if bytes.len() != w * h * 3 {
            return Err(BakeError::DimensionMismatch {
                what: "byte count",
                expected: w * h * 3,
                found: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(Self { w, h, data })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgb) {
        let i = y * self.w + x;
        self.data[i] = px;
    }

    pub fn as_view(&self) -> RgbView<'_> {
        RgbView {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }

    /// Interleaved bytes in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }
}

impl ImageView for RgbBuffer {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for RgbBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_short_slice() {
        let data = vec![BLACK; 5];
        let err = RgbView::new(3, 2, &data).unwrap_err();
        assert_eq!(
            err,
            BakeError::DimensionMismatch {
                what: "frame pixel count",
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn signed_lookup_clips_outside() {
        let data = vec![[1, 2, 3]; 4];
        let view = RgbView::new(2, 2, &data).unwrap();
        assert_eq!(view.get_signed(1, 1), Some([1, 2, 3]));
        assert_eq!(view.get_signed(-1, 0), None);
        assert_eq!(view.get_signed(0, 2), None);
    }

    #[test]
    fn raw_bytes_keep_row_major_layout() {
        let bytes: Vec<u8> = (0..12).collect();
        let buf = RgbBuffer::from_raw(2, 2, bytes.clone()).unwrap();
        assert_eq!(buf.get(1, 0), [3, 4, 5]);
        assert_eq!(buf.get(0, 1), [6, 7, 8]);
        assert_eq!(buf.to_raw(), bytes);
        assert_eq!(buf.rows().count(), 2);
    }
}
