use serde::{Deserialize, Serialize};
use shelf_scan_core::{sample_bilinear, GrayImageView};

/// Number of histogram bins: codes 0..=8 for uniform patterns plus one
/// bin for all non-uniform patterns.
pub const LBP_BINS: usize = 10;

const SAMPLE_POINTS: usize = 8;
const RADIUS: f32 = 1.0;
const NORM_EPSILON: f64 = 1e-6;

/// L1-normalized histogram of uniform rotation-invariant LBP codes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureHistogram {
    pub bins: [f64; LBP_BINS],
}

impl TextureHistogram {
    pub fn sum(&self) -> f64 {
        self.bins.iter().sum()
    }
}

// Uniform rotation-invariant code for one pixel: number of set bits when
// the circular bit pattern has at most two 0/1 transitions, else
// SAMPLE_POINTS + 1. Neighbors are sampled on a radius-1 circle with
// bilinear interpolation; samples outside the image read as 0.
fn lbp_code(img: &GrayImageView<'_>, x: usize, y: usize) -> u8 {
    let center = img.data[y * img.width + x] as f32;

    let mut bits = [false; SAMPLE_POINTS];
    for (k, bit) in bits.iter_mut().enumerate() {
        let angle = 2.0 * std::f32::consts::PI * k as f32 / SAMPLE_POINTS as f32;
        let sx = x as f32 + RADIUS * angle.cos();
        let sy = y as f32 - RADIUS * angle.sin();
        *bit = sample_bilinear(img, sx, sy) >= center;
    }

    let mut transitions = 0u32;
    let mut ones = 0u8;
    for k in 0..SAMPLE_POINTS {
        if bits[k] != bits[(k + 1) % SAMPLE_POINTS] {
            transitions += 1;
        }
        if bits[k] {
            ones += 1;
        }
    }

    if transitions <= 2 {
        ones
    } else {
        SAMPLE_POINTS as u8 + 1
    }
}

/// Texture signature of a grayscale image.
///
/// The histogram always has [`LBP_BINS`] entries and sums to 1 up to the
/// epsilon in the normalization denominator (an empty image yields all
/// zeros).
pub fn texture_histogram(img: &GrayImageView<'_>) -> TextureHistogram {
    let mut counts = [0u64; LBP_BINS];
    for y in 0..img.height {
        for x in 0..img.width {
            counts[lbp_code(img, x, y) as usize] += 1;
        }
    }

    let total: u64 = counts.iter().sum();
    let denom = total as f64 + NORM_EPSILON;

    let mut bins = [0.0f64; LBP_BINS];
    for (bin, &c) in bins.iter_mut().zip(counts.iter()) {
        *bin = c as f64 / denom;
    }

    TextureHistogram { bins }
}
