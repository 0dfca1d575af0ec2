//! Source-space quads for body segments.
//!
//! Limbs become oriented strips around the segment between two joints,
//! extremities become small axis-aligned squares, and the head is boxed from
//! a single joint with fixed proportions. Every derivation rejects samples
//! that are not valid.
use crate::error::BakeError;
use crate::skeleton::JointSample;
use crate::types::{Point2D, Quad};

/// Half-width of the head box at the crown (px).
pub const HEAD_HALF_WIDTH: f32 = 12.0;
/// Depth of the side, top and bottom head strips (px).
pub const HEAD_STRIP_DEPTH: f32 = 4.0;
/// Half-size of extremity caps (px).
pub const END_HALF_SIZE: f32 = 2.0;

const MIN_SEGMENT_LEN: f32 = 1e-6;

/// Five faces of the head derived from one head joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadQuads {
    pub face: Quad,
    pub left: Quad,
    pub right: Quad,
    pub top: Quad,
    pub bottom: Quad,
}

/// Strip of `width` pixels centred on the segment between two joints.
///
/// With `d = (p1 - p2) / |p1 - p2|` the offset is `(dy, -dx) * width / 2`
/// and the corners are `{p1 + off, p1 - off, p2 + off, p2 - off}`, so `p1`
/// lands on the top edge of the patch.
pub fn limb_quad(s1: &JointSample, s2: &JointSample, width: f32) -> Result<Quad, BakeError> {
    let p1 = s1.point()?;
    let p2 = s2.point()?;
    if !p1.is_finite() || !p2.is_finite() || !width.is_finite() {
        return Err(BakeError::DegenerateQuad);
    }
    let d = p1 - p2;
    let len = d.norm();
    if len <= MIN_SEGMENT_LEN {
        return Err(BakeError::DegenerateQuad);
    }
    let (dx, dy) = (d.x / len, d.y / len);
    let off = Point2D::new(dy, -dx) * (width * 0.5);
    Ok(Quad::new(p1 + off, p1 - off, p2 + off, p2 - off))
}

/// Axis-aligned square of half-size `s` centred on the joint.
pub fn end_quad(sample: &JointSample, s: f32) -> Result<Quad, BakeError> {
    let p = sample.point()?;
    Ok(Quad::new(
        Point2D::new(p.x - s, p.y - s),
        Point2D::new(p.x + s, p.y - s),
        Point2D::new(p.x - s, p.y + s),
        Point2D::new(p.x + s, p.y + s),
    ))
}

/// Head faces around the projected head joint.
///
/// The box spans `2w` above the joint at half-width `w` and `1.5w` below it
/// at half-width `0.75w`. "Left" is the strip on the image-space `+x` side.
/// Corners are in image order; the head patches are flipped horizontally
/// when warped.
pub fn head_quads(head: &JointSample) -> Result<HeadQuads, BakeError> {
    let h = head.point()?;
    let w = HEAD_HALF_WIDTH;
    let tl = Point2D::new(h.x + w, h.y - w * 2.0);
    let tr = Point2D::new(h.x - w, h.y - w * 2.0);
    let bl = Point2D::new(h.x + w * 0.75, h.y + w * 1.5);
    let br = Point2D::new(h.x - w * 0.75, h.y + w * 1.5);

    let dx = Point2D::new(HEAD_STRIP_DEPTH, 0.0);
    let dy = Point2D::new(0.0, HEAD_STRIP_DEPTH);

    Ok(HeadQuads {
        face: Quad::new(tl, tr, bl, br),
        left: Quad::new(tl + dx, tl, bl + dx, bl),
        right: Quad::new(tr, tr - dx, br, br - dx),
        top: Quad::new(tl - dy, tr - dy, tl, tr),
        bottom: Quad::new(bl, br, bl + dy, br + dy),
    })
}
