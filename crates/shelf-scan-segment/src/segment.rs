use crate::mask::{color_mask, ColorRange};
use crate::texture::{texture_histogram, TextureHistogram};
use shelf_scan_core::{gray_from_rgb, GrayImage, GrayImageView, RgbBuffer, RgbView};

/// Output of [`segment_linen`]: the color-matching pixels of the input,
/// the binary mask itself, and the texture signature of the full image.
#[derive(Clone, Debug)]
pub struct Segmentation {
    pub masked: RgbBuffer,
    pub mask: GrayImage,
    pub texture: TextureHistogram,
}

/// Zero out every channel of the pixels the mask does not cover.
pub fn apply_mask(rgb: &RgbView<'_>, mask: &GrayImageView<'_>) -> RgbBuffer {
    debug_assert_eq!(rgb.width, mask.width);
    debug_assert_eq!(rgb.height, mask.height);

    let mut out = RgbBuffer::new_fill(rgb.width, rgb.height, [0, 0, 0]);
    for (i, &m) in mask.data.iter().enumerate() {
        if m != 0 {
            out.data[3 * i..3 * i + 3].copy_from_slice(&rgb.data[3 * i..3 * i + 3]);
        }
    }
    out
}

/// Run color masking and texture extraction on the same rectified image.
///
/// The two extractions are independent; the texture histogram is computed
/// on the unmasked image and carried alongside for downstream use.
pub fn segment_linen(rgb: &RgbView<'_>, range: &ColorRange) -> Segmentation {
    let mask = color_mask(rgb, range);
    let texture = texture_histogram(&gray_from_rgb(rgb).as_view());
    let masked = apply_mask(rgb, &mask.as_view());

    Segmentation {
        masked,
        mask,
        texture,
    }
}
