//! Binary morphology with a square structuring element.
//!
//! Pixels are treated as binary with threshold `> 0`; outputs are `0` or
//! `255`. Samples outside the image take the operation's neutral value
//! (unset for dilation, set for erosion), so the image border is never
//! eroded away on its own.

use shelf_scan_core::{GrayImage, GrayImageView};

pub fn dilate_binary(src: &GrayImageView<'_>, radius: usize) -> GrayImage {
    let mut out = GrayImage::new_fill(src.width, src.height, 0);
    if src.width == 0 || src.height == 0 {
        return out;
    }

    let r = radius as isize;
    for y in 0..src.height {
        for x in 0..src.width {
            let mut any_set = false;
            'window: for dy in -r..=r {
                let ny = y as isize + dy;
                if ny < 0 || ny >= src.height as isize {
                    continue;
                }
                for dx in -r..=r {
                    let nx = x as isize + dx;
                    if nx < 0 || nx >= src.width as isize {
                        continue;
                    }
                    if src.data[ny as usize * src.width + nx as usize] != 0 {
                        any_set = true;
                        break 'window;
                    }
                }
            }
            out.data[y * src.width + x] = if any_set { 255 } else { 0 };
        }
    }

    out
}

pub fn erode_binary(src: &GrayImageView<'_>, radius: usize) -> GrayImage {
    let mut out = GrayImage::new_fill(src.width, src.height, 0);
    if src.width == 0 || src.height == 0 {
        return out;
    }

    let r = radius as isize;
    for y in 0..src.height {
        for x in 0..src.width {
            let mut all_set = true;
            'window: for dy in -r..=r {
                let ny = y as isize + dy;
                if ny < 0 || ny >= src.height as isize {
                    continue;
                }
                for dx in -r..=r {
                    let nx = x as isize + dx;
                    if nx < 0 || nx >= src.width as isize {
                        continue;
                    }
                    if src.data[ny as usize * src.width + nx as usize] == 0 {
                        all_set = false;
                        break 'window;
                    }
                }
            }
            out.data[y * src.width + x] = if all_set { 255 } else { 0 };
        }
    }

    out
}

/// Morphological closing: dilation followed by erosion. Fills interior gaps
/// up to the kernel size without materially growing region boundaries.
pub fn close_binary(src: &GrayImageView<'_>, radius: usize) -> GrayImage {
    let dilated = dilate_binary(src, radius);
    erode_binary(&dilated.as_view(), radius)
}
