use crate::error::BakeError;
use crate::types::{Point2D, Point3D};
use serde::{Deserialize, Serialize};

/// Skeleton joints reported by the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointName {
    Head,
    Neck,
    Torso,
    LeftShoulder,
    LeftElbow,
    LeftHand,
    RightShoulder,
    RightElbow,
    RightHand,
    LeftHip,
    LeftKnee,
    LeftFoot,
    RightHip,
    RightKnee,
    RightFoot,
}

impl JointName {
    pub const ALL: [JointName; 15] = [
        JointName::Head,
        JointName::Neck,
        JointName::Torso,
        JointName::LeftShoulder,
        JointName::LeftElbow,
        JointName::LeftHand,
        JointName::RightShoulder,
        JointName::RightElbow,
        JointName::RightHand,
        JointName::LeftHip,
        JointName::LeftKnee,
        JointName::LeftFoot,
        JointName::RightHip,
        JointName::RightKnee,
        JointName::RightFoot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JointName::Head => "head",
            JointName::Neck => "neck",
            JointName::Torso => "torso",
            JointName::LeftShoulder => "left_shoulder",
            JointName::LeftElbow => "left_elbow",
            JointName::LeftHand => "left_hand",
            JointName::RightShoulder => "right_shoulder",
            JointName::RightElbow => "right_elbow",
            JointName::RightHand => "right_hand",
            JointName::LeftHip => "left_hip",
            JointName::LeftKnee => "left_knee",
            JointName::LeftFoot => "left_foot",
            JointName::RightHip => "right_hip",
            JointName::RightKnee => "right_knee",
            JointName::RightFoot => "right_foot",
        }
    }
}

/// A joint position together with its camera projection.
///
/// `valid` is false whenever the tracker reported zero on any axis. The
/// tracker emits zeros for joints it could not resolve this frame; a joint
/// genuinely sitting on an axis is rejected too, and downstream layouts rely
/// on that behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointSample {
    pub joint: JointName,
    pub position: Point3D,
    pub projected: Point2D,
    pub valid: bool,
}

impl JointSample {
    pub fn new(joint: JointName, position: Point3D, projected: Point2D) -> Self {
        Self {
            joint,
            position,
            projected,
            valid: is_resolved(&position),
        }
    }

    /// Projected position, or `InvalidJoint` when the sample must not be used.
    pub fn point(&self) -> Result<Point2D, BakeError> {
        if self.valid {
            Ok(self.projected)
        } else {
            Err(BakeError::InvalidJoint { joint: self.joint })
        }
    }
}

#[inline]
pub fn is_resolved(p: &Point3D) -> bool {
    p.x != 0.0 && p.y != 0.0 && p.z != 0.0
}
