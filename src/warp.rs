//! Perspective resampling of a source quad into a rectangular patch.
use crate::error::BakeError;
use crate::homography::{apply_homography, quad_to_rect};
use crate::image::{ImageViewMut, Rgb, RgbBuffer, RgbView, BLACK};
use crate::types::{Point2D, Quad};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Bilinear,
    Nearest,
}

/// Warp `quad` out of `frame` into a freshly allocated `size` patch.
///
/// Each patch pixel is pulled back through the inverse transform. Samples
/// outside the frame read as black.
pub fn warp_quad(
    frame: &RgbView<'_>,
    quad: &Quad,
    size: (usize, usize),
    interpolation: Interpolation,
) -> Result<RgbBuffer, BakeError> {
    let (w, h) = size;
    if w < 2 || h < 2 {
        return Err(BakeError::DimensionMismatch {
            what: "patch side",
            expected: 2,
            found: w.min(h),
        });
    }
    if quad.is_degenerate() {
        return Err(BakeError::DegenerateQuad);
    }
    let forward = quad_to_rect(quad, w, h).ok_or(BakeError::DegenerateQuad)?;
    let inverse = forward.try_inverse().ok_or(BakeError::DegenerateQuad)?;

    let mut patch = RgbBuffer::new(w, h);
    for y in 0..h {
        let row = patch.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let Some(src) = apply_homography(&inverse, Point2D::new(x as f32, y as f32)) else {
                continue;
            };
            *px = match interpolation {
                Interpolation::Bilinear => sample_bilinear(frame, src),
                Interpolation::Nearest => sample_nearest(frame, src),
            };
        }
    }
    Ok(patch)
}

/// True when `p` lies within one pixel of the frame. Anything further out
/// reads as black and must not reach the integer casts below.
fn within_reach(frame: &RgbView<'_>, p: Point2D) -> bool {
    p.x > -1.0 && p.y > -1.0 && p.x < frame.w as f32 && p.y < frame.h as f32
}

fn sample_nearest(frame: &RgbView<'_>, p: Point2D) -> Rgb {
    if !within_reach(frame, p) {
        return BLACK;
    }
    frame
        .get_signed(p.x.round() as isize, p.y.round() as isize)
        .unwrap_or(BLACK)
}

fn sample_bilinear(frame: &RgbView<'_>, p: Point2D) -> Rgb {
    if !within_reach(frame, p) {
        return BLACK;
    }
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let fx = p.x - x0;
    let fy = p.y - y0;
    let (ix, iy) = (x0 as isize, y0 as isize);

    let fetch = |dx: isize, dy: isize| frame.get_signed(ix + dx, iy + dy).unwrap_or(BLACK);
    let p00 = fetch(0, 0);
    let p10 = fetch(1, 0);
    let p01 = fetch(0, 1);
    let p11 = fetch(1, 1);

    let mut out = BLACK;
    for c in 0..3 {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        let v = top * (1.0 - fy) + bottom * fy;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
