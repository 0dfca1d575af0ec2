//! File-backed tracker: one frame of skeleton data stored as JSON.
//!
//! ```json
//! { "users": [ { "id": 1, "tracked": true,
//!                "joints": { "head": [12.0, 410.0, 2100.0] } } ] }
//! ```
//! Joints missing from the map read as the zero sentinel.
use super::{JointName, SkeletonTracker, UserId};
use crate::types::Point3D;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SkeletonSnapshot {
    #[serde(default)]
    pub users: Vec<UserSkeleton>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSkeleton {
    pub id: UserId,
    #[serde(default = "default_tracked")]
    pub tracked: bool,
    #[serde(default)]
    pub joints: BTreeMap<JointName, [f32; 3]>,
}

fn default_tracked() -> bool {
    true
}

impl SkeletonSnapshot {
    pub fn user(&self, id: UserId) -> Option<&UserSkeleton> {
        self.users.iter().find(|u| u.id == id)
    }
}

impl SkeletonTracker for SkeletonSnapshot {
    fn users(&self) -> Vec<UserId> {
        self.users.iter().map(|u| u.id).collect()
    }

    fn is_tracked(&self, user: UserId) -> bool {
        self.user(user).is_some_and(|u| u.tracked)
    }

    fn joint_position(&self, user: UserId, joint: JointName) -> Point3D {
        self.user(user)
            .and_then(|u| u.joints.get(&joint))
            .map(|&p| Point3D::from(p))
            .unwrap_or_default()
    }
}

pub fn load_snapshot(path: &Path) -> Result<SkeletonSnapshot, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read skeleton {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse skeleton {}: {e}", path.display()))
}
