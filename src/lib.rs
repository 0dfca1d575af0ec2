#![doc = include_str!("../README.md")]

pub mod atlas;
pub mod bake;
pub mod config;
pub mod debug;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod homography;
pub mod image;
pub mod layout;
pub mod skeleton;
pub mod types;
pub mod warp;

// --- High-level re-exports -------------------------------------------------

pub use crate::atlas::{Atlas, ATLAS_HEIGHT, ATLAS_WIDTH};
pub use crate::bake::{BakeOptions, SkinAtlasBuilder, SkinBake};
pub use crate::diagnostics::{BakeReport, RegionReport, RegionStatus};
pub use crate::error::BakeError;
pub use crate::layout::SKIN_LAYOUT;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use skin_baker::prelude::*;
///
/// # fn main() -> Result<(), BakeError> {
/// let snapshot = SkeletonSnapshot::default();
/// let frame = RgbBuffer::new(640, 480);
///
/// let builder = SkinAtlasBuilder::new(&snapshot, PinholeProjector::kinect());
/// let bake = builder.bake_tracked(&frame.as_view())?;
/// println!("baked={} skipped={}", bake.report.baked, bake.report.skipped);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{RgbBuffer, RgbView};
    pub use crate::skeleton::{JointName, PinholeProjector, SkeletonSnapshot, SkeletonTracker};
    pub use crate::{Atlas, BakeError, BakeOptions, SkinAtlasBuilder};
}
