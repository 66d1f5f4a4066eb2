//! Core pixel and geometry primitives for shelf-scan.
//!
//! This crate is intentionally small and free of image-codec dependencies:
//! it works on raw row-major buffers. Decoding and encoding live in the
//! `shelf-scan` facade crate.

mod homography;
mod image;
mod logger;
mod rectify;

pub use homography::{homography_from_4pt, Homography};
pub use image::{
    gray_from_rgb, sample_bilinear, sample_bilinear_rgb, sample_bilinear_u8, GrayImage,
    GrayImageView, RgbBuffer, RgbView,
};
pub use rectify::{rectify_quad_gray, rectify_quad_rgb, RectifyError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
