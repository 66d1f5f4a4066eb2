//! High-level facade for the `shelf-scan-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying pipeline crates
//! - end-to-end `analyze` helpers that rectify a shelf photograph, segment
//!   linen by color and texture, and classify each grid slot's fill level
//! - a CLI (feature `cli`) that reads a JSON calibration and writes the
//!   annotated review image plus a JSON report
//!
//! ## Quickstart
//!
//! ```no_run
//! use shelf_scan::{analyze_bytes, ShelfConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ShelfConfig::with_corners([
//!     [316.0, 494.0],
//!     [999.0, 526.0],
//!     [945.0, 1505.0],
//!     [315.0, 1512.0],
//! ]);
//! let analysis = analyze_bytes(&std::fs::read("shelf.jpg")?, &cfg)?;
//! for section in &analysis.sections {
//!     println!("({}, {}) -> {}", section.row, section.col, section.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `shelf_scan::core`: pixel buffers, homography and rectification.
//! - `shelf_scan::segment`: HSV color masking and LBP texture features.
//! - `shelf_scan::grid`: grid sections, fill classification, overlays.
//!
//! Analysis results are transient: persistence, upload handling and any web
//! surface belong to the calling service.

pub use shelf_scan_core as core;
pub use shelf_scan_grid as grid;
pub use shelf_scan_segment as segment;

mod analyze;
mod config;
mod report;

pub use analyze::{
    analyze_bytes, analyze_rgb, analyze_rgb_with_observer, rgb_image_from_buffer, rgb_view,
    AnalyzeError, PipelineObserver, ShelfAnalysis,
};
pub use config::ShelfConfig;
pub use report::{section_summary, ShelfReport};

pub use shelf_scan_grid::{
    assign_linen_types, render_overlay, FillStatus, GridError, GridSpec, LinenLayout, OverlayFont,
    OverlayStyle, Section,
};
pub use shelf_scan_segment::{ColorRange, TextureHistogram};
