//! Grid-section analysis of masked shelf images.
//!
//! The rectified, masked, grayscale shelf image is divided into an R×C grid
//! of storage slots; each slot gets a white-pixel ratio and an
//! empty/partial/full status. Linen types are assigned to slots from an
//! operator-maintained layout, and an annotated overlay can be rendered for
//! review.
//!
//! ## Quickstart
//!
//! ```
//! use shelf_scan_core::GrayImage;
//! use shelf_scan_grid::{analyze_sections, FillStatus, GridSpec};
//!
//! let masked = GrayImage::new_fill(200, 200, 255);
//! let sections = analyze_sections(&masked.as_view(), &GridSpec::default(), 200)?;
//! assert_eq!(sections.len(), 16);
//! assert!(sections.iter().all(|s| s.status == FillStatus::Full));
//! # Ok::<(), shelf_scan_grid::GridError>(())
//! ```

mod analyze;
mod layout;
mod overlay;
mod section;
mod spec;

pub use analyze::{analyze_sections, GridError};
pub use layout::{assign_linen_types, LinenLayout};
pub use overlay::{render_overlay, section_label, OverlayFont, OverlayFontError, OverlayStyle};
pub use section::{FillStatus, Section, EMPTY_MAX_RATIO, FULL_MIN_RATIO};
pub use spec::GridSpec;
