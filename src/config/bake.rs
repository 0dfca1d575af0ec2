use crate::bake::BakeOptions;
use crate::skeleton::projection::{KINECT_CX, KINECT_CY, KINECT_FX, KINECT_FY};
use crate::skeleton::PinholeProjector;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BakeToolConfig {
    pub jobs: Vec<BakeJob>,
    #[serde(default)]
    pub options: BakeOptions,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub post: PostConfig,
}

#[derive(Debug, Deserialize)]
pub struct BakeJob {
    /// Colour frame (PNG/JPEG).
    pub frame: PathBuf,
    /// Skeleton snapshot JSON for the same frame.
    pub skeleton: PathBuf,
    /// Optional 16-bit user label image, used for the debug frame.
    #[serde(default)]
    pub labels: Option<PathBuf>,
    /// Bake this user instead of the first tracked one.
    #[serde(default)]
    pub user: Option<u32>,
    pub output: JobOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct JobOutputConfig {
    pub atlas: PathBuf,
    #[serde(default)]
    pub report: Option<PathBuf>,
    #[serde(default)]
    pub debug_frame: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fx: KINECT_FX,
            fy: KINECT_FY,
            cx: KINECT_CX,
            cy: KINECT_CY,
        }
    }
}

impl CameraConfig {
    pub fn projector(&self) -> PinholeProjector {
        PinholeProjector::new(self.fx, self.fy, self.cx, self.cy)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    /// Write unbaked (black) atlas pixels as transparent.
    pub transparent_black: bool,
    pub accessory: Option<AccessoryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AccessoryConfig {
    pub path: PathBuf,
    #[serde(default = "default_accessory_offset")]
    pub offset: (u32, u32),
}

fn default_accessory_offset() -> (u32, u32) {
    (32, 0)
}

pub fn load_config(path: &Path) -> Result<BakeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<BakeToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
