//! Debug views of the source frame: subject masking and joint markers.
use crate::error::BakeError;
use crate::image::{Rgb, RgbBuffer, BLACK};
use crate::skeleton::{JointName, JointSampler, Projector, SkeletonTracker, UserId};

const MARKER: Rgb = [255, 0, 0];

/// Joints drawn by [`draw_joint_markers`].
pub const MARKER_JOINTS: [JointName; 8] = [
    JointName::Head,
    JointName::Neck,
    JointName::RightShoulder,
    JointName::RightElbow,
    JointName::RightHand,
    JointName::LeftShoulder,
    JointName::LeftElbow,
    JointName::LeftHand,
];

/// Per-pixel user labels from the tracker (0 = background).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u16>,
}

impl LabelMap {
    pub fn new(w: usize, h: usize, data: Vec<u16>) -> Result<Self, BakeError> {
        if data.len() != w * h {
            return Err(BakeError::DimensionMismatch {
                what: "label count",
                expected: w * h,
                found: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }
}

/// Black out every pixel that does not belong to `user`.
pub fn segment_user(frame: &mut RgbBuffer, labels: &LabelMap, user: UserId) -> Result<(), BakeError> {
    if labels.w != frame.width() || labels.h != frame.height() {
        return Err(BakeError::DimensionMismatch {
            what: "label map size",
            expected: frame.width() * frame.height(),
            found: labels.w * labels.h,
        });
    }
    for (px, &label) in frame.pixels_mut().iter_mut().zip(&labels.data) {
        if u32::from(label) != user {
            *px = BLACK;
        }
    }
    Ok(())
}

/// Paint a 3×3 marker on every resolved joint in [`MARKER_JOINTS`].
/// Returns the number of markers drawn; joints projected off the frame
/// are not counted.
pub fn draw_joint_markers<T: SkeletonTracker, P: Projector>(
    frame: &mut RgbBuffer,
    sampler: &JointSampler<T, P>,
    user: UserId,
) -> usize {
    let mut drawn = 0;
    for joint in MARKER_JOINTS {
        let Ok(p) = sampler.require(user, joint) else {
            continue;
        };
        let (w, h) = (frame.width() as f32, frame.height() as f32);
        if !(p.x > -2.0 && p.y > -2.0 && p.x < w + 1.0 && p.y < h + 1.0) {
            continue;
        }
        let (cx, cy) = (p.x as isize, p.y as isize);
        for y in cy - 1..=cy + 1 {
            for x in cx - 1..=cx + 1 {
                if x >= 0 && y >= 0 && (x as usize) < frame.width() && (y as usize) < frame.height()
                {
                    frame.set(x as usize, y as usize, MARKER);
                }
            }
        }
        drawn += 1;
    }
    drawn
}
