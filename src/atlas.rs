//! The fixed 64×32 output texture and patch compositing.
use crate::error::BakeError;
use crate::image::{ImageView, ImageViewMut, Rgb, RgbBuffer, BLACK};
use crate::types::AtlasRegion;

pub const ATLAS_WIDTH: usize = 64;
pub const ATLAS_HEIGHT: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atlas {
    buffer: RgbBuffer,
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}

impl Atlas {
    /// Black atlas, ready for a fresh bake.
    pub fn new() -> Self {
        Self::filled(BLACK)
    }

    pub fn filled(px: Rgb) -> Self {
        Self {
            buffer: RgbBuffer::filled(ATLAS_WIDTH, ATLAS_HEIGHT, px),
        }
    }

    /// Adopt an existing buffer, which must be exactly 64×32.
    pub fn from_buffer(buffer: RgbBuffer) -> Result<Self, BakeError> {
        if buffer.width() != ATLAS_WIDTH {
            return Err(BakeError::DimensionMismatch {
                what: "atlas width",
                expected: ATLAS_WIDTH,
                found: buffer.width(),
            });
        }
        if buffer.height() != ATLAS_HEIGHT {
            return Err(BakeError::DimensionMismatch {
                what: "atlas height",
                expected: ATLAS_HEIGHT,
                found: buffer.height(),
            });
        }
        Ok(Self { buffer })
    }

    pub fn buffer(&self) -> &RgbBuffer {
        &self.buffer
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.buffer.get(x, y)
    }

    /// Pixels of `region` in row-major order.
    pub fn region_pixels(&self, region: &AtlasRegion) -> Vec<Rgb> {
        let (x0, y0) = region.offset;
        let (w, h) = region.size;
        (y0..y0 + h)
            .flat_map(|y| self.buffer.row(y)[x0..x0 + w].iter().copied())
            .collect()
    }

    /// Copy `patch` row by row with its top-left corner at `offset`.
    ///
    /// Existing pixels are overwritten, never blended, so later writes to the
    /// same area win.
    pub fn composite(&mut self, patch: &RgbBuffer, offset: (usize, usize)) -> Result<(), BakeError> {
        let (x0, y0) = offset;
        let right = x0 + patch.width();
        let bottom = y0 + patch.height();
        if right > ATLAS_WIDTH {
            return Err(BakeError::DimensionMismatch {
                what: "patch right edge",
                expected: ATLAS_WIDTH,
                found: right,
            });
        }
        if bottom > ATLAS_HEIGHT {
            return Err(BakeError::DimensionMismatch {
                what: "patch bottom edge",
                expected: ATLAS_HEIGHT,
                found: bottom,
            });
        }
        for (dy, src) in patch.rows().enumerate() {
            self.buffer.row_mut(y0 + dy)[x0..right].copy_from_slice(src);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_writes_only_target_rect() {
        let mut atlas = Atlas::new();
        let patch = RgbBuffer::filled(4, 6, [9, 8, 7]);
        atlas.composite(&patch, (40, 20)).unwrap();
        let region = AtlasRegion::new((40, 20), (4, 6));
        for y in 0..ATLAS_HEIGHT {
            for x in 0..ATLAS_WIDTH {
                let inside = (40..44).contains(&x) && (20..26).contains(&y);
                let expected = if inside { [9, 8, 7] } else { BLACK };
                assert_eq!(atlas.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
        assert!(atlas.region_pixels(&region).iter().all(|&p| p == [9, 8, 7]));
    }

    #[test]
    fn later_writes_win() {
        let mut atlas = Atlas::new();
        atlas
            .composite(&RgbBuffer::filled(8, 8, [1, 1, 1]), (8, 0))
            .unwrap();
        atlas
            .composite(&RgbBuffer::filled(4, 4, [2, 2, 2]), (10, 2))
            .unwrap();
        assert_eq!(atlas.pixel(9, 1), [1, 1, 1]);
        assert_eq!(atlas.pixel(10, 2), [2, 2, 2]);
        assert_eq!(atlas.pixel(13, 5), [2, 2, 2]);
        assert_eq!(atlas.pixel(14, 6), [1, 1, 1]);
    }

    #[test]
    fn patch_must_fit() {
        let mut atlas = Atlas::new();
        let err = atlas
            .composite(&RgbBuffer::new(8, 12), (60, 0))
            .unwrap_err();
        assert_eq!(
            err,
            BakeError::DimensionMismatch {
                what: "patch right edge",
                expected: 64,
                found: 68
            }
        );
        assert_eq!(atlas, Atlas::new());
    }

    #[test]
    fn from_buffer_checks_shape() {
        assert!(Atlas::from_buffer(RgbBuffer::new(64, 32)).is_ok());
        assert!(matches!(
            Atlas::from_buffer(RgbBuffer::new(64, 64)),
            Err(BakeError::DimensionMismatch {
                what: "atlas height",
                ..
            })
        ));
    }
}
