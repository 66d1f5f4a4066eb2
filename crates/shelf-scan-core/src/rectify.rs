use crate::{
    homography_from_4pt, sample_bilinear_rgb, sample_bilinear_u8, GrayImage, GrayImageView,
    Homography, RgbBuffer, RgbView,
};
use nalgebra::Point2;

#[derive(thiserror::Error, Debug)]
pub enum RectifyError {
    #[error("shelf corners are collinear or coincident (degenerate quadrilateral)")]
    DegenerateCorners,
    #[error("empty target canvas (width={width}, height={height})")]
    EmptyTarget { width: usize, height: usize },
}

// Area of the parallelogram spanned by (b-a) and (c-a); ~0 means collinear.
fn cross2(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Transform mapping canvas coordinates into the source image, so that the
/// canvas corners `(0,0) (w-1,0) (w-1,h-1) (0,h-1)` land on the four source
/// `corners` (ordered top-left, top-right, bottom-right, bottom-left).
fn quad_homography(
    corners: &[Point2<f32>; 4],
    out_w: usize,
    out_h: usize,
) -> Result<Homography, RectifyError> {
    if out_w == 0 || out_h == 0 {
        return Err(RectifyError::EmptyTarget {
            width: out_w,
            height: out_h,
        });
    }

    const MIN_TRIANGLE_CROSS: f32 = 1e-3;
    for (a, b, c) in [(0, 1, 2), (0, 2, 3), (0, 1, 3), (1, 2, 3)] {
        if cross2(corners[a], corners[b], corners[c]).abs() < MIN_TRIANGLE_CROSS {
            return Err(RectifyError::DegenerateCorners);
        }
    }

    let w = (out_w - 1) as f32;
    let h = (out_h - 1) as f32;
    let canvas = [
        Point2::new(0.0, 0.0),
        Point2::new(w, 0.0),
        Point2::new(w, h),
        Point2::new(0.0, h),
    ];

    homography_from_4pt(&canvas, corners).ok_or(RectifyError::DegenerateCorners)
}

/// Warp the quadrilateral `corners` region of `src` onto an
/// `out_w` x `out_h` canvas.
pub fn rectify_quad_gray(
    src: &GrayImageView<'_>,
    corners: &[Point2<f32>; 4],
    out_w: usize,
    out_h: usize,
) -> Result<GrayImage, RectifyError> {
    let h_img_from_rect = quad_homography(corners, out_w, out_h)?;

    let mut out = vec![0u8; out_w * out_h];
    for y in 0..out_h {
        for x in 0..out_w {
            let pi = h_img_from_rect.apply(Point2::new(x as f32, y as f32));
            out[y * out_w + x] = sample_bilinear_u8(src, pi.x, pi.y);
        }
    }

    Ok(GrayImage {
        width: out_w,
        height: out_h,
        data: out,
    })
}

/// RGB variant of [`rectify_quad_gray`]; channels are resampled
/// independently.
pub fn rectify_quad_rgb(
    src: &RgbView<'_>,
    corners: &[Point2<f32>; 4],
    out_w: usize,
    out_h: usize,
) -> Result<RgbBuffer, RectifyError> {
    let h_img_from_rect = quad_homography(corners, out_w, out_h)?;

    let mut out = vec![0u8; 3 * out_w * out_h];
    for y in 0..out_h {
        for x in 0..out_w {
            let pi = h_img_from_rect.apply(Point2::new(x as f32, y as f32));
            let px = sample_bilinear_rgb(src, pi.x, pi.y);
            let i = 3 * (y * out_w + x);
            out[i..i + 3].copy_from_slice(&px);
        }
    }

    Ok(RgbBuffer {
        width: out_w,
        height: out_h,
        data: out,
    })
}
