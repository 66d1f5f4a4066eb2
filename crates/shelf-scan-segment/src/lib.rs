//! Color-plus-texture segmentation of rectified shelf images.
//!
//! ## Quickstart
//!
//! ```
//! use shelf_scan_core::RgbBuffer;
//! use shelf_scan_segment::{segment_linen, ColorRange};
//!
//! let rectified = RgbBuffer::new_fill(64, 64, [245, 244, 240]);
//! let seg = segment_linen(&rectified.as_view(), &ColorRange::default());
//! assert_eq!(seg.mask.data.iter().filter(|&&v| v == 255).count(), 64 * 64);
//! ```
//!
//! The color mask and the texture histogram have no data dependency on each
//! other; [`segment_linen`] runs both on the same input and pairs the
//! results.

mod hsv;
mod mask;
mod morph;
mod segment;
mod texture;

pub use hsv::rgb_to_hsv_cv;
pub use mask::{color_mask, ColorRange};
pub use morph::{close_binary, dilate_binary, erode_binary};
pub use segment::{apply_mask, segment_linen, Segmentation};
pub use texture::{texture_histogram, TextureHistogram, LBP_BINS};
