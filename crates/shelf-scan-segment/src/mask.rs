use crate::hsv::rgb_to_hsv_cv;
use crate::morph::close_binary;
use serde::{Deserialize, Serialize};
use shelf_scan_core::{GrayImage, RgbView};

/// Square closing kernel of side `2 * CLOSE_KERNEL_RADIUS + 1`.
const CLOSE_KERNEL_RADIUS: usize = 2;

/// Inclusive HSV membership bounds, 8-bit convention (H in [0, 180]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    /// Off-white linen: any hue, low saturation, bright.
    pub fn off_white_linen() -> Self {
        Self {
            lower: [0, 0, 180],
            upper: [180, 60, 255],
        }
    }

    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self::off_white_linen()
    }
}

/// Binary mask of the pixels whose HSV value falls inside `range`, cleaned
/// by one morphological closing pass.
///
/// Set pixels are always exactly 255; downstream counting and display
/// assume canonical `{0, 255}` values.
pub fn color_mask(rgb: &RgbView<'_>, range: &ColorRange) -> GrayImage {
    let mut mask = GrayImage::new_fill(rgb.width, rgb.height, 0);
    for y in 0..rgb.height {
        for x in 0..rgb.width {
            let [r, g, b] = rgb.pixel(x, y);
            if range.contains(rgb_to_hsv_cv(r, g, b)) {
                mask.data[y * rgb.width + x] = 255;
            }
        }
    }

    let mut closed = close_binary(&mask.as_view(), CLOSE_KERNEL_RADIUS);
    for v in &mut closed.data {
        *v = if *v > 0 { 255 } else { 0 };
    }
    closed
}
