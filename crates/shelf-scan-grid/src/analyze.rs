use crate::section::{FillStatus, Section};
use crate::spec::GridSpec;
use shelf_scan_core::GrayImageView;

#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error(
        "grid {rows}x{cols} degenerates to zero-pixel cells on a {width}x{height} image"
    )]
    DegenerateGrid {
        rows: u32,
        cols: u32,
        width: usize,
        height: usize,
    },
    #[error("linen type count mismatch: expected {expected} labels, got {got}")]
    TypeCountMismatch { expected: usize, got: usize },
}

/// Partition a masked grayscale image into `grid` cells and classify each
/// cell's fill level from its white-pixel ratio.
///
/// A pixel counts as white when its intensity is strictly greater than
/// `white_threshold`. Records come back in row-major order, one per cell.
pub fn analyze_sections(
    img: &GrayImageView<'_>,
    grid: &GridSpec,
    white_threshold: u8,
) -> Result<Vec<Section>, GridError> {
    let (cell_w, cell_h) = if grid.rows == 0 || grid.cols == 0 {
        (0, 0)
    } else {
        grid.cell_size(img.width, img.height)
    };
    if cell_w == 0 || cell_h == 0 {
        return Err(GridError::DegenerateGrid {
            rows: grid.rows,
            cols: grid.cols,
            width: img.width,
            height: img.height,
        });
    }

    let total = (cell_w * cell_h) as f64;
    let mut sections = Vec::with_capacity(grid.cell_count());

    for row in 0..grid.rows as usize {
        for col in 0..grid.cols as usize {
            let (x0, y0) = grid.cell_origin(row, col, cell_w, cell_h);

            let mut white = 0u64;
            for y in y0..y0 + cell_h {
                let line = &img.data[y * img.width + x0..y * img.width + x0 + cell_w];
                white += line.iter().filter(|&&v| v > white_threshold).count() as u64;
            }

            let white_ratio = white as f64 / total;
            sections.push(Section {
                row: row as u32,
                col: col as u32,
                white_ratio,
                status: FillStatus::classify(white_ratio),
                linen_type: None,
            });
        }
    }

    Ok(sections)
}
