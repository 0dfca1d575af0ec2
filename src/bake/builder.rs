//! Full-body bake driven by the skin layout table.
//!
//! For every recipe the builder samples the joints it needs, derives the
//! source quad, warps it to the recipe's patch size and composites the patch
//! at the recipe's atlas offset. A region whose joints are unresolved, or
//! whose quad collapses, is skipped and keeps its initial pixels.
use super::face::paint_eyes;
use super::options::BakeOptions;
use crate::atlas::Atlas;
use crate::diagnostics::{BakeReport, RegionReport, RegionStatus};
use crate::error::BakeError;
use crate::geometry::{end_quad, head_quads, limb_quad};
use crate::image::RgbView;
use crate::layout::{HeadFace, RegionRecipe, RegionSource, SKIN_LAYOUT};
use crate::skeleton::{
    first_tracked_user, JointName, JointSampler, Projector, SkeletonTracker, UserId,
};
use crate::types::Quad;
use crate::warp::warp_quad;
use log::debug;
use std::time::Instant;

/// Result of one bake: the atlas and what happened to each region.
#[derive(Clone, Debug)]
pub struct SkinBake {
    pub atlas: Atlas,
    pub report: BakeReport,
}

pub struct SkinAtlasBuilder<T, P> {
    sampler: JointSampler<T, P>,
    options: BakeOptions,
}

impl<T: SkeletonTracker, P: Projector> SkinAtlasBuilder<T, P> {
    pub fn new(tracker: T, projector: P) -> Self {
        Self::with_options(tracker, projector, BakeOptions::default())
    }

    pub fn with_options(tracker: T, projector: P, options: BakeOptions) -> Self {
        Self {
            sampler: JointSampler::new(tracker, projector),
            options,
        }
    }

    pub fn options(&self) -> &BakeOptions {
        &self.options
    }

    pub fn sampler(&self) -> &JointSampler<T, P> {
        &self.sampler
    }

    /// Bake the first tracked user, or fail with `NoTrackedUser`.
    pub fn bake_tracked(&self, frame: &RgbView<'_>) -> Result<SkinBake, BakeError> {
        let user = first_tracked_user(self.sampler.tracker())?;
        self.bake(frame, user)
    }

    /// Bake `user` into a fresh black atlas.
    pub fn bake(&self, frame: &RgbView<'_>, user: UserId) -> Result<SkinBake, BakeError> {
        let mut atlas = Atlas::new();
        let report = self.bake_into(frame, user, &mut atlas)?;
        Ok(SkinBake { atlas, report })
    }

    /// Bake `user` into an existing atlas. Skipped regions keep whatever the
    /// atlas held before.
    pub fn bake_into(
        &self,
        frame: &RgbView<'_>,
        user: UserId,
        atlas: &mut Atlas,
    ) -> Result<BakeReport, BakeError> {
        check_frame(frame)?;
        let t0 = Instant::now();
        let mut regions = Vec::with_capacity(SKIN_LAYOUT.len());
        for recipe in SKIN_LAYOUT.iter() {
            let status = match self.bake_region(frame, user, recipe, atlas) {
                Ok(()) => RegionStatus::Baked,
                Err(err) if err.is_recoverable() => {
                    debug!("skin bake: skipping {} ({err})", recipe.name);
                    RegionStatus::skipped(&err)
                }
                Err(err) => return Err(err),
            };
            regions.push(RegionReport::new(recipe, status));
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        let report = BakeReport::new(user, regions, elapsed_ms);
        debug!(
            "skin bake: user={} baked={} skipped={} elapsed_ms={:.3}",
            user, report.baked, report.skipped, elapsed_ms
        );
        Ok(report)
    }

    /// Bake a single region: quad, warp, optional face paint, composite.
    pub fn bake_region(
        &self,
        frame: &RgbView<'_>,
        user: UserId,
        recipe: &RegionRecipe,
        atlas: &mut Atlas,
    ) -> Result<(), BakeError> {
        let mut quad = self.source_quad(user, &recipe.source)?;
        if recipe.source.is_mirrored() {
            quad = quad.mirrored_x();
        }
        let mut patch = warp_quad(frame, &quad, recipe.size, self.options.interpolation)?;
        let is_face = matches!(
            recipe.source,
            RegionSource::Head {
                face: HeadFace::Front
            }
        );
        if is_face && self.options.decorate_face {
            paint_eyes(&mut patch);
        }
        atlas.composite(&patch, recipe.offset)
    }

    /// Source-space quad for `source`, in image corner order.
    pub fn source_quad(&self, user: UserId, source: &RegionSource) -> Result<Quad, BakeError> {
        let sample = |joint| self.sampler.sample(user, joint);
        match *source {
            RegionSource::Head { face } => {
                let quads = head_quads(&sample(JointName::Head))?;
                Ok(match face {
                    HeadFace::Front => quads.face,
                    HeadFace::Left => quads.left,
                    HeadFace::Right => quads.right,
                    HeadFace::Top => quads.top,
                    HeadFace::Bottom => quads.bottom,
                })
            }
            RegionSource::Torso => {
                let point = |joint| self.sampler.require(user, joint);
                Ok(Quad::new(
                    point(JointName::LeftShoulder)?,
                    point(JointName::RightShoulder)?,
                    point(JointName::LeftHip)?,
                    point(JointName::RightHip)?,
                ))
            }
            RegionSource::Limb { from, to, width } => {
                limb_quad(&sample(from), &sample(to), width)
            }
            RegionSource::End { joint, half_size } => end_quad(&sample(joint), half_size),
        }
    }
}

fn check_frame(frame: &RgbView<'_>) -> Result<(), BakeError> {
    if frame.w == 0 || frame.h == 0 {
        return Err(BakeError::DimensionMismatch {
            what: "frame pixel count",
            expected: 1,
            found: 0,
        });
    }
    if frame.stride < frame.w {
        return Err(BakeError::DimensionMismatch {
            what: "frame stride",
            expected: frame.w,
            found: frame.stride,
        });
    }
    let needed = frame.stride * (frame.h - 1) + frame.w;
    if frame.data.len() < needed {
        return Err(BakeError::DimensionMismatch {
            what: "frame pixel count",
            expected: needed,
            found: frame.data.len(),
        });
    }
    Ok(())
}
