use crate::warp::Interpolation;
use serde::Deserialize;

/// Knobs for a bake. The atlas layout itself is fixed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BakeOptions {
    /// Resampling used when warping source quads into patches.
    pub interpolation: Interpolation,
    /// Paint a pair of eyes onto the front face patch.
    pub decorate_face: bool,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Bilinear,
            decorate_face: true,
        }
    }
}
