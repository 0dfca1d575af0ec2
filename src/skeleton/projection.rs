//! Real-world to image-plane projection.
use super::Projector;
use crate::types::{Point2D, Point3D};
use nalgebra::{Matrix3, Vector3};

const EPS: f32 = 1e-6;

/// Kinect depth camera intrinsics at 640×480.
pub const KINECT_FX: f32 = 594.21;
pub const KINECT_FY: f32 = 591.04;
pub const KINECT_CX: f32 = 339.5;
pub const KINECT_CY: f32 = 242.7;

/// Pinhole projection of tracker coordinates (millimetres, Y up, Z away from
/// the sensor) onto pixel coordinates (Y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinholeProjector {
    pub kmtx: Matrix3<f32>,
}

impl PinholeProjector {
    pub fn new(fx: f32, fy: f32, cx: f32, cy: f32) -> Self {
        Self {
            kmtx: Matrix3::new(fx, 0.0, cx, 0.0, fy, cy, 0.0, 0.0, 1.0),
        }
    }

    pub fn kinect() -> Self {
        Self::new(KINECT_FX, KINECT_FY, KINECT_CX, KINECT_CY)
    }
}

impl Default for PinholeProjector {
    fn default() -> Self {
        Self::kinect()
    }
}

impl Projector for PinholeProjector {
    fn project(&self, p: Point3D) -> Point2D {
        if p.z.abs() <= EPS {
            return Point2D::new(f32::NAN, f32::NAN);
        }
        let v = self.kmtx * Vector3::new(p.x, -p.y, p.z);
        Point2D::new(v[0] / v[2], v[1] / v[2])
    }
}
