use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use shelf_scan_grid::GridSpec;
use shelf_scan_segment::ColorRange;

/// Per-camera calibration and analysis parameters.
///
/// One value of this struct describes one physical camera/shelf setup, so
/// several calibrations can coexist without shared state. Everything except
/// `corners` has a serde default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Shelf region in the source photo, ordered top-left, top-right,
    /// bottom-right, bottom-left. The order fixes the correspondence to
    /// the canvas corners; a wrong order warps silently rather than
    /// failing.
    pub corners: [[f32; 2]; 4],
    /// Rectified canvas size as `[width, height]`.
    #[serde(default = "default_output_size")]
    pub output_size: [u32; 2],
    #[serde(default)]
    pub color_range: ColorRange,
    #[serde(default)]
    pub grid: GridSpec,
    /// Intensity above which a masked pixel counts as white.
    #[serde(default = "default_white_threshold")]
    pub white_threshold: u8,
}

fn default_output_size() -> [u32; 2] {
    [500, 500]
}

fn default_white_threshold() -> u8 {
    200
}

impl ShelfConfig {
    /// Calibration with the given corners and default values for the rest:
    /// 500x500 canvas, off-white color range, 4x4 grid, threshold 200.
    pub fn with_corners(corners: [[f32; 2]; 4]) -> Self {
        Self {
            corners,
            output_size: default_output_size(),
            color_range: ColorRange::default(),
            grid: GridSpec::default(),
            white_threshold: default_white_threshold(),
        }
    }

    pub(crate) fn corner_points(&self) -> [Point2<f32>; 4] {
        self.corners.map(|[x, y]| Point2::new(x, y))
    }
}
