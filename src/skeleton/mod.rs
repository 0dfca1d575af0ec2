//! Skeleton capabilities consumed by the bake.
//!
//! Tracking and projection are supplied from outside through the
//! [`SkeletonTracker`] and [`Projector`] traits, so the bake itself holds no
//! global state and can be driven by recorded snapshots or test fakes.
pub mod joints;
pub mod projection;
pub mod sampler;
pub mod snapshot;

pub use self::joints::{JointName, JointSample};
pub use self::projection::PinholeProjector;
pub use self::sampler::JointSampler;
pub use self::snapshot::{load_snapshot, SkeletonSnapshot, UserSkeleton};

use crate::error::BakeError;
use crate::types::{Point2D, Point3D};

pub type UserId = u32;

pub trait SkeletonTracker {
    /// Every user currently known to the tracker, in tracker order.
    fn users(&self) -> Vec<UserId>;
    fn is_tracked(&self, user: UserId) -> bool;
    /// Real-world joint position; all zeros when unresolved.
    fn joint_position(&self, user: UserId, joint: JointName) -> Point3D;
}

impl<T: SkeletonTracker + ?Sized> SkeletonTracker for &T {
    fn users(&self) -> Vec<UserId> {
        (**self).users()
    }
    fn is_tracked(&self, user: UserId) -> bool {
        (**self).is_tracked(user)
    }
    fn joint_position(&self, user: UserId, joint: JointName) -> Point3D {
        (**self).joint_position(user, joint)
    }
}

pub trait Projector {
    fn project(&self, p: Point3D) -> Point2D;
}

impl<F> Projector for F
where
    F: Fn(Point3D) -> Point2D,
{
    fn project(&self, p: Point3D) -> Point2D {
        self(p)
    }
}

/// The first user in tracker order whose skeleton is being tracked.
pub fn first_tracked_user<T: SkeletonTracker + ?Sized>(tracker: &T) -> Result<UserId, BakeError> {
    tracker
        .users()
        .into_iter()
        .find(|&u| tracker.is_tracked(u))
        .ok_or(BakeError::NoTrackedUser)
}
