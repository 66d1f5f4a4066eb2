use serde::{Deserialize, Serialize};

/// How an image is partitioned into storage slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default = "default_cols")]
    pub cols: u32,
}

fn default_rows() -> u32 {
    4
}

fn default_cols() -> u32 {
    4
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: 4, cols: 4 }
    }
}

impl GridSpec {
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Uniform cell size for an image, by integer division. When the image
    /// dimensions are not exact multiples of the grid, the remainder strip
    /// at the bottom/right belongs to no cell.
    pub fn cell_size(&self, width: usize, height: usize) -> (usize, usize) {
        (width / self.cols as usize, height / self.rows as usize)
    }

    /// Top-left corner of a cell, given the uniform cell size.
    pub fn cell_origin(&self, row: usize, col: usize, cell_w: usize, cell_h: usize) -> (usize, usize) {
        (col * cell_w, row * cell_h)
    }
}
