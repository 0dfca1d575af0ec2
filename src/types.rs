//! Plain geometric types shared by every stage of the bake.
//!
//! Coordinates are `f32` pixel positions in the source camera image unless
//! stated otherwise. Atlas positions are integer pixel offsets.
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Triangles with twice-area below this (px²) count as collinear.
const MIN_DOUBLE_AREA: f32 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        (*self - *other).norm()
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f32) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

/// Real-world joint position as reported by the tracker (millimetres).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Point3D {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Four source-space corners in destination correspondence order:
/// top-left, top-right, bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Quad(pub [Point2D; 4]);

impl Quad {
    pub const fn new(tl: Point2D, tr: Point2D, bl: Point2D, br: Point2D) -> Self {
        Self([tl, tr, bl, br])
    }

    pub fn corners(&self) -> &[Point2D; 4] {
        &self.0
    }

    /// Swaps left and right corners so the patch comes out flipped horizontally.
    pub fn mirrored_x(&self) -> Quad {
        let [tl, tr, bl, br] = self.0;
        Quad::new(tr, tl, br, bl)
    }

    /// True when any three corners are (nearly) collinear or a corner is not finite.
    pub fn is_degenerate(&self) -> bool {
        if self.0.iter().any(|p| !p.is_finite()) {
            return true;
        }
        const TRIPLES: [(usize, usize, usize); 4] = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
        TRIPLES.iter().any(|&(a, b, c)| {
            let (pa, pb, pc) = (self.0[a], self.0[b], self.0[c]);
            let u = pb - pa;
            let v = pc - pa;
            (u.x * v.y - u.y * v.x).abs() <= MIN_DOUBLE_AREA
        })
    }
}

/// Destination rectangle inside the atlas, in atlas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AtlasRegion {
    pub offset: (usize, usize),
    pub size: (usize, usize),
}

impl AtlasRegion {
    pub const fn new(offset: (usize, usize), size: (usize, usize)) -> Self {
        Self { offset, size }
    }

    pub fn right(&self) -> usize {
        self.offset.0 + self.size.0
    }

    pub fn bottom(&self) -> usize {
        self.offset.1 + self.size.1
    }

    pub fn overlaps(&self, other: &AtlasRegion) -> bool {
        self.offset.0 < other.right()
            && other.offset.0 < self.right()
            && self.offset.1 < other.bottom()
            && other.offset.1 < self.bottom()
    }
}
