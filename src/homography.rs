//! Projective transforms between quadrilaterals.
use crate::types::{Point2D, Quad};
use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

const EPS: f64 = 1e-9;

/// Destination corners of a `w × h` patch in quad correspondence order.
pub fn rect_corners(w: usize, h: usize) -> [Point2D; 4] {
    let (r, b) = (w as f32 - 1.0, h as f32 - 1.0);
    [
        Point2D::new(0.0, 0.0),
        Point2D::new(r, 0.0),
        Point2D::new(0.0, b),
        Point2D::new(r, b),
    ]
}

/// Solve the homography `H` with `H · src[i] ~ dst[i]` for four
/// correspondences, normalizing `H[(2, 2)] = 1`.
///
/// Returns `None` when the 8×8 system is singular, which happens when three
/// of the points on either side are collinear.
pub fn perspective_transform(src: &[Point2D; 4], dst: &[Point2D; 4]) -> Option<Matrix3<f64>> {
    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();
    for i in 0..4 {
        let (x, y) = (src[i].x as f64, src[i].y as f64);
        let (u, v) = (dst[i].x as f64, dst[i].y as f64);
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -x * u;
        a[(r, 7)] = -y * u;
        b[r] = u;

        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -x * v;
        a[(r + 1, 7)] = -y * v;
        b[r + 1] = v;
    }
    let h = a.lu().solve(&b)?;
    if h.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(Matrix3::new(h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0))
}

/// Transform mapping `quad` onto the corners of a `w × h` patch.
pub fn quad_to_rect(quad: &Quad, w: usize, h: usize) -> Option<Matrix3<f64>> {
    perspective_transform(quad.corners(), &rect_corners(w, h))
}

/// Map a single point, or `None` if it lands on the line at infinity.
#[inline]
pub fn apply_homography(h: &Matrix3<f64>, p: Point2D) -> Option<Point2D> {
    let v = h * Vector3::new(p.x as f64, p.y as f64, 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some(Point2D::new((v[0] / w) as f32, (v[1] / w) as f32))
}

pub fn apply_homography_points(h: &Matrix3<f64>, pts: &[Point2D]) -> Option<Vec<Point2D>> {
    pts.iter().map(|&p| apply_homography(h, p)).collect()
}
