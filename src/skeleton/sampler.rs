use super::{JointName, JointSample, Projector, SkeletonTracker, UserId};
use crate::error::BakeError;
use crate::types::Point2D;

/// Reads joints from the tracker and projects them into the camera image.
///
/// Stateless: every call goes back to the tracker, nothing is cached.
#[derive(Clone, Debug)]
pub struct JointSampler<T, P> {
    tracker: T,
    projector: P,
}

impl<T: SkeletonTracker, P: Projector> JointSampler<T, P> {
    pub fn new(tracker: T, projector: P) -> Self {
        Self { tracker, projector }
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn sample(&self, user: UserId, joint: JointName) -> JointSample {
        let position = self.tracker.joint_position(user, joint);
        JointSample::new(joint, position, self.projector.project(position))
    }

    /// Projected position of `joint`, or `InvalidJoint` when it is unresolved.
    pub fn require(&self, user: UserId, joint: JointName) -> Result<Point2D, BakeError> {
        self.sample(user, joint).point()
    }
}
