use skin_baker::image::RgbBuffer;
use skin_baker::skeleton::{JointName, SkeletonTracker, UserId};
use skin_baker::types::{Point2D, Point3D};
use std::collections::HashMap;

/// Keeps fake joints away from the tracker's zero sentinel.
const LIFT: f32 = 1000.0;

/// Tracker that serves fixed pixel-space joints for a single user.
#[derive(Clone, Debug, Default)]
pub struct PoseTracker {
    pub user: UserId,
    pub tracked: bool,
    pub joints: HashMap<JointName, Point2D>,
}

impl PoseTracker {
    pub fn new(user: UserId, joints: &[(JointName, (f32, f32))]) -> Self {
        Self {
            user,
            tracked: true,
            joints: joints
                .iter()
                .map(|&(j, (x, y))| (j, Point2D::new(x, y)))
                .collect(),
        }
    }

    pub fn without(mut self, joint: JointName) -> Self {
        self.joints.remove(&joint);
        self
    }
}

impl SkeletonTracker for PoseTracker {
    fn users(&self) -> Vec<UserId> {
        vec![self.user]
    }

    fn is_tracked(&self, user: UserId) -> bool {
        self.tracked && user == self.user
    }

    fn joint_position(&self, user: UserId, joint: JointName) -> Point3D {
        if user != self.user {
            return Point3D::default();
        }
        self.joints
            .get(&joint)
            .map(|p| Point3D::new(p.x + LIFT, p.y + LIFT, LIFT))
            .unwrap_or_default()
    }
}

/// Inverse of the lift applied by [`PoseTracker`].
pub fn pixel_projector(p: Point3D) -> Point2D {
    Point2D::new(p.x - LIFT, p.y - LIFT)
}

/// A standing pose inside a 200×240 frame.
pub fn standing_pose() -> Vec<(JointName, (f32, f32))> {
    use JointName::*;
    vec![
        (Head, (100.0, 40.0)),
        (Neck, (100.0, 62.0)),
        (Torso, (100.0, 100.0)),
        (RightShoulder, (80.0, 70.0)),
        (LeftShoulder, (120.0, 70.0)),
        (RightElbow, (72.0, 110.0)),
        (LeftElbow, (128.0, 110.0)),
        (RightHand, (68.0, 150.0)),
        (LeftHand, (132.0, 150.0)),
        (RightHip, (88.0, 140.0)),
        (LeftHip, (112.0, 140.0)),
        (RightKnee, (86.0, 185.0)),
        (LeftKnee, (114.0, 185.0)),
        (RightFoot, (85.0, 228.0)),
        (LeftFoot, (115.0, 228.0)),
    ]
}

pub const POSE_FRAME: (usize, usize) = (200, 240);

/// Frame where red encodes x, green encodes y and blue is constant.
pub fn gradient_frame(width: usize, height: usize, blue: u8) -> RgbBuffer {
    assert!(width <= 256 && height <= 256, "gradient must fit in u8");
    let mut frame = RgbBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            frame.set(x, y, [x as u8, y as u8, blue]);
        }
    }
    frame
}
