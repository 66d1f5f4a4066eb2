use crate::analyze::GridError;
use crate::section::Section;
use crate::spec::GridSpec;
use std::collections::HashMap;

/// Operator-maintained mapping from grid position to linen-type label.
///
/// Built from a row-major label list and validated eagerly against the
/// grid's cell count, so a stale list fails before any section is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinenLayout {
    grid: GridSpec,
    labels: HashMap<(u32, u32), String>,
}

impl LinenLayout {
    /// Labels in row-major order, one per cell.
    pub fn from_row_major<S: Into<String>>(
        grid: GridSpec,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, GridError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let expected = grid.cell_count();
        if labels.len() != expected {
            return Err(GridError::TypeCountMismatch {
                expected,
                got: labels.len(),
            });
        }

        let cols = grid.cols;
        let labels = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| ((i as u32 / cols, i as u32 % cols), label))
            .collect();

        Ok(Self { grid, labels })
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn label(&self, row: u32, col: u32) -> Option<&str> {
        self.labels.get(&(row, col)).map(String::as_str)
    }
}

/// Populate `linen_type` on every section from the layout.
///
/// Fails without mutating anything when the layout's cell count does not
/// match the number of sections.
pub fn assign_linen_types(
    sections: &mut [Section],
    layout: &LinenLayout,
) -> Result<(), GridError> {
    if sections.len() != layout.grid.cell_count() {
        return Err(GridError::TypeCountMismatch {
            expected: sections.len(),
            got: layout.grid.cell_count(),
        });
    }

    for section in sections.iter_mut() {
        section.linen_type = layout.label(section.row, section.col).map(str::to_string);
    }
    Ok(())
}
