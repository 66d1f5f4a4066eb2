use crate::section::Section;
use crate::spec::GridSpec;
use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;

/// Label font, parsed from caller-supplied TTF/OTF bytes.
///
/// The renderer works without one; labels are simply omitted, so the
/// overlay can run headless.
pub struct OverlayFont {
    font: FontVec,
}

#[derive(thiserror::Error, Debug)]
pub enum OverlayFontError {
    #[error("font data could not be parsed")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}

impl OverlayFont {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, OverlayFontError> {
        Ok(Self {
            font: FontVec::try_from_vec(bytes)?,
        })
    }
}

/// Colors and geometry of the annotations.
#[derive(Clone, Debug)]
pub struct OverlayStyle {
    pub cell_color: Rgb<u8>,
    pub separator_color: Rgb<u8>,
    pub label_color: Rgb<u8>,
    pub thickness: u32,
    pub label_scale: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            cell_color: Rgb([0, 255, 0]),
            separator_color: Rgb([0, 0, 255]),
            label_color: Rgb([255, 255, 255]),
            thickness: 2,
            label_scale: 14.0,
        }
    }
}

const LABEL_OFFSET_X: i32 = 5;
const LABEL_OFFSET_Y: i32 = 15;

/// Review label for one slot: linen type (when assigned) and fill
/// percentage with one decimal place.
pub fn section_label(section: &Section) -> String {
    let pct = section.white_ratio * 100.0;
    match &section.linen_type {
        Some(linen_type) => format!("{linen_type} ({pct:.1}%)"),
        None => format!("({pct:.1}%)"),
    }
}

/// Draw cell borders, per-slot labels and grid separator lines onto a copy
/// of the rectified image. The input is not mutated.
pub fn render_overlay(
    rectified: &RgbImage,
    sections: &[Section],
    grid: &GridSpec,
    style: &OverlayStyle,
    font: Option<&OverlayFont>,
) -> RgbImage {
    let mut out = rectified.clone();
    if grid.rows == 0 || grid.cols == 0 {
        return out;
    }

    let (width, height) = (rectified.width() as usize, rectified.height() as usize);
    let (cell_w, cell_h) = grid.cell_size(width, height);
    if cell_w == 0 || cell_h == 0 {
        return out;
    }

    for section in sections {
        let (x0, y0) = grid.cell_origin(section.row as usize, section.col as usize, cell_w, cell_h);

        for t in 0..style.thickness {
            let inset = 2 * t;
            if cell_w as u32 <= inset || cell_h as u32 <= inset {
                break;
            }
            let rect = Rect::at(x0 as i32 + t as i32, y0 as i32 + t as i32)
                .of_size(cell_w as u32 - inset, cell_h as u32 - inset);
            draw_hollow_rect_mut(&mut out, rect, style.cell_color);
        }

        if let Some(font) = font {
            draw_text_mut(
                &mut out,
                style.label_color,
                x0 as i32 + LABEL_OFFSET_X,
                y0 as i32 + LABEL_OFFSET_Y,
                PxScale::from(style.label_scale),
                &font.font,
                &section_label(section),
            );
        }
    }

    for row in 1..grid.rows as usize {
        let y = (row * cell_h) as f32;
        for t in 0..style.thickness {
            let y = y + t as f32;
            draw_line_segment_mut(&mut out, (0.0, y), (width as f32, y), style.separator_color);
        }
    }
    for col in 1..grid.cols as usize {
        let x = (col * cell_w) as f32;
        for t in 0..style.thickness {
            let x = x + t as f32;
            draw_line_segment_mut(&mut out, (x, 0.0), (x, height as f32), style.separator_color);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::FillStatus;

    fn section(row: u32, col: u32, ratio: f64, linen_type: Option<&str>) -> Section {
        Section {
            row,
            col,
            white_ratio: ratio,
            status: FillStatus::classify(ratio),
            linen_type: linen_type.map(str::to_string),
        }
    }

    #[test]
    fn label_includes_type_and_one_decimal_percentage() {
        let s = section(0, 0, 0.8342, Some("King"));
        assert_eq!(section_label(&s), "King (83.4%)");
    }

    #[test]
    fn label_without_type_still_shows_percentage() {
        let s = section(0, 0, 0.5, None);
        assert_eq!(section_label(&s), "(50.0%)");
    }

    #[test]
    fn input_image_is_not_mutated() {
        let img = RgbImage::from_pixel(40, 40, Rgb([10, 10, 10]));
        let sections = vec![section(0, 0, 1.0, Some("King"))];
        let grid = GridSpec { rows: 2, cols: 2 };

        let before = img.clone();
        let _ = render_overlay(&img, &sections, &grid, &OverlayStyle::default(), None);
        assert_eq!(img, before);
    }

    #[test]
    fn cell_border_uses_the_cell_color() {
        let img = RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]));
        let sections = vec![section(0, 0, 1.0, None)];
        let grid = GridSpec { rows: 2, cols: 2 };

        let out = render_overlay(&img, &sections, &grid, &OverlayStyle::default(), None);
        assert_eq!(*out.get_pixel(0, 0), Rgb([0, 255, 0]));
    }

    #[test]
    fn separator_lines_are_drawn_between_cells() {
        let img = RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]));
        let grid = GridSpec { rows: 2, cols: 2 };

        let out = render_overlay(&img, &[], &grid, &OverlayStyle::default(), None);
        // Horizontal separator at y = 20, vertical at x = 20.
        assert_eq!(*out.get_pixel(5, 20), Rgb([0, 0, 255]));
        assert_eq!(*out.get_pixel(20, 35), Rgb([0, 0, 255]));
    }

    #[test]
    fn degenerate_grid_returns_a_plain_copy() {
        let img = RgbImage::from_pixel(8, 8, Rgb([7, 7, 7]));
        let grid = GridSpec { rows: 0, cols: 2 };
        let out = render_overlay(&img, &[], &grid, &OverlayStyle::default(), None);
        assert_eq!(out, img);
    }
}
