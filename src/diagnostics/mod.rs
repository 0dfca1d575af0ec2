//! Serializable reports describing what a bake did.
pub mod timing;

pub use self::timing::{StageTiming, TimingBreakdown};

use crate::error::BakeError;
use crate::layout::RegionRecipe;
use crate::skeleton::{JointName, UserId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum RegionStatus {
    Baked,
    InvalidJoint { joint: JointName },
    DegenerateQuad,
}

impl RegionStatus {
    /// Status for a region skipped because of a recoverable error.
    pub fn skipped(err: &BakeError) -> Self {
        match err {
            BakeError::InvalidJoint { joint } => RegionStatus::InvalidJoint { joint: *joint },
            _ => RegionStatus::DegenerateQuad,
        }
    }

    pub fn is_baked(&self) -> bool {
        matches!(self, RegionStatus::Baked)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionReport {
    pub name: &'static str,
    pub offset: (usize, usize),
    pub size: (usize, usize),
    pub status: RegionStatus,
}

impl RegionReport {
    pub fn new(recipe: &RegionRecipe, status: RegionStatus) -> Self {
        Self {
            name: recipe.name,
            offset: recipe.offset,
            size: recipe.size,
            status,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BakeReport {
    pub user: UserId,
    pub baked: usize,
    pub skipped: usize,
    pub elapsed_ms: f64,
    pub regions: Vec<RegionReport>,
}

impl BakeReport {
    pub fn new(user: UserId, regions: Vec<RegionReport>, elapsed_ms: f64) -> Self {
        let baked = regions.iter().filter(|r| r.status.is_baked()).count();
        Self {
            user,
            baked,
            skipped: regions.len() - baked,
            elapsed_ms,
            regions,
        }
    }

    pub fn region(&self, name: &str) -> Option<&RegionReport> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::recipe;

    #[test]
    fn counts_and_serializes_statuses() {
        let regions = vec![
            RegionReport::new(recipe("head_front").unwrap(), RegionStatus::Baked),
            RegionReport::new(
                recipe("arm_top").unwrap(),
                RegionStatus::skipped(&BakeError::InvalidJoint {
                    joint: JointName::RightShoulder,
                }),
            ),
        ];
        let report = BakeReport::new(4, regions, 1.0);
        assert_eq!(report.baked, 1);
        assert_eq!(report.skipped, 1);
        assert!(!report.is_complete());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["elapsedMs"], 1.0);
        assert_eq!(json["regions"][0]["status"]["status"], "baked");
        assert_eq!(json["regions"][1]["status"]["joint"], "right_shoulder");
        assert_eq!(json["regions"][1]["offset"][0], 44);
    }
}
