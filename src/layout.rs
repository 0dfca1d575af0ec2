//! The skin UV layout: which body part lands where in the 64×32 atlas.
//!
//! Offsets and sizes are a compatibility contract with the consumers of the
//! texture and must not change. Entries are baked in table order; the head
//! top is baked twice (top and back) and the torso front is baked twice
//! (front and back).
use crate::geometry::END_HALF_SIZE;
use crate::skeleton::JointName::{self, *};
use crate::types::AtlasRegion;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadFace {
    Front,
    Left,
    Right,
    Top,
    Bottom,
}

/// How a region derives its source quad.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RegionSource {
    /// One face of the head box around the head joint.
    Head { face: HeadFace },
    /// The shoulder/hip quadrilateral.
    Torso,
    /// Strip of `width` px along the `from → to` segment.
    Limb {
        from: JointName,
        to: JointName,
        width: f32,
    },
    /// Square cap of half-size `half_size` around one joint.
    End { joint: JointName, half_size: f32 },
}

impl RegionSource {
    /// Joints that must be resolved for the region to bake.
    pub fn joints(&self) -> Vec<JointName> {
        match *self {
            RegionSource::Head { .. } => vec![Head],
            RegionSource::Torso => vec![LeftShoulder, RightShoulder, LeftHip, RightHip],
            RegionSource::Limb { from, to, .. } => vec![from, to],
            RegionSource::End { joint, .. } => vec![joint],
        }
    }

    /// Head and torso are seen from the front, so their patches are flipped
    /// horizontally to match the texture's left/right convention.
    pub fn is_mirrored(&self) -> bool {
        matches!(self, RegionSource::Head { .. } | RegionSource::Torso)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegionRecipe {
    pub name: &'static str,
    pub source: RegionSource,
    pub offset: (usize, usize),
    pub size: (usize, usize),
}

impl RegionRecipe {
    pub fn region(&self) -> AtlasRegion {
        AtlasRegion::new(self.offset, self.size)
    }
}

const fn head(name: &'static str, face: HeadFace, offset: (usize, usize)) -> RegionRecipe {
    RegionRecipe {
        name,
        source: RegionSource::Head { face },
        offset,
        size: (8, 8),
    }
}

const fn torso(name: &'static str, offset: (usize, usize)) -> RegionRecipe {
    RegionRecipe {
        name,
        source: RegionSource::Torso,
        offset,
        size: (8, 12),
    }
}

const fn limb(
    name: &'static str,
    from: JointName,
    to: JointName,
    width: f32,
    size: (usize, usize),
    offset: (usize, usize),
) -> RegionRecipe {
    RegionRecipe {
        name,
        source: RegionSource::Limb { from, to, width },
        offset,
        size,
    }
}

const fn end(name: &'static str, joint: JointName, offset: (usize, usize)) -> RegionRecipe {
    RegionRecipe {
        name,
        source: RegionSource::End {
            joint,
            half_size: END_HALF_SIZE,
        },
        offset,
        size: (4, 4),
    }
}

const SIDE: (usize, usize) = (4, 12);
const CAP: (usize, usize) = (8, 4);
const LIMB: (usize, usize) = (4, 6);

pub const SKIN_LAYOUT: [RegionRecipe; 32] = [
    // head
    head("head_front", HeadFace::Front, (8, 8)),
    head("head_left", HeadFace::Left, (16, 8)),
    head("head_right", HeadFace::Right, (0, 8)),
    head("head_top", HeadFace::Top, (8, 0)),
    head("head_back", HeadFace::Top, (24, 8)),
    head("head_bottom", HeadFace::Bottom, (16, 0)),
    // torso and sides
    torso("torso_front", (20, 20)),
    torso("torso_back", (32, 20)),
    limb("torso_right", RightShoulder, RightHip, 6.0, SIDE, (16, 20)),
    limb("torso_left", LeftShoulder, LeftHip, 6.0, SIDE, (28, 20)),
    limb("torso_top", RightShoulder, LeftShoulder, 6.0, CAP, (20, 16)),
    limb("torso_bottom", RightHip, LeftHip, 6.0, CAP, (28, 16)),
    // arms, two widths per segment for some texture variety
    limb("right_upper_arm_a", RightShoulder, RightElbow, 7.0, LIMB, (40, 20)),
    limb("right_lower_arm_a", RightElbow, RightHand, 7.0, LIMB, (40, 26)),
    limb("left_upper_arm_a", LeftShoulder, LeftElbow, 8.0, LIMB, (44, 20)),
    limb("left_lower_arm_a", LeftElbow, LeftHand, 8.0, LIMB, (44, 26)),
    limb("right_upper_arm_b", RightShoulder, RightElbow, 8.0, LIMB, (48, 20)),
    limb("right_lower_arm_b", RightElbow, RightHand, 8.0, LIMB, (48, 26)),
    limb("left_upper_arm_b", LeftShoulder, LeftElbow, 7.0, LIMB, (52, 20)),
    limb("left_lower_arm_b", LeftElbow, LeftHand, 7.0, LIMB, (52, 26)),
    end("arm_top", RightShoulder, (44, 16)),
    end("arm_bottom", RightHand, (48, 16)),
    // legs
    limb("right_upper_leg_a", RightHip, RightKnee, 7.0, LIMB, (0, 20)),
    limb("right_lower_leg_a", RightKnee, RightFoot, 7.0, LIMB, (0, 26)),
    limb("left_upper_leg_a", LeftHip, LeftKnee, 8.0, LIMB, (4, 20)),
    limb("left_lower_leg_a", LeftKnee, LeftFoot, 8.0, LIMB, (4, 26)),
    limb("right_upper_leg_b", RightHip, RightKnee, 8.0, LIMB, (8, 20)),
    limb("right_lower_leg_b", RightKnee, RightFoot, 8.0, LIMB, (8, 26)),
    limb("left_upper_leg_b", LeftHip, LeftKnee, 7.0, LIMB, (12, 20)),
    limb("left_lower_leg_b", LeftKnee, LeftFoot, 7.0, LIMB, (12, 26)),
    end("leg_top", RightHip, (4, 16)),
    end("leg_bottom", RightFoot, (8, 16)),
];

pub fn recipe(name: &str) -> Option<&'static RegionRecipe> {
    SKIN_LAYOUT.iter().find(|r| r.name == name)
}
