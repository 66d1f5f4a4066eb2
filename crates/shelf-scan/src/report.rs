use crate::analyze::ShelfAnalysis;
use serde::Serialize;
use shelf_scan_grid::{GridSpec, Section};
use shelf_scan_segment::TextureHistogram;

/// JSON-serializable summary of one analysis run, for the caller to store
/// or forward.
#[derive(Debug, Clone, Serialize)]
pub struct ShelfReport {
    pub grid: GridSpec,
    pub white_threshold: u8,
    pub sections: Vec<Section>,
    pub texture: TextureHistogram,
}

impl ShelfReport {
    pub fn from_analysis(analysis: &ShelfAnalysis) -> Self {
        Self {
            grid: analysis.grid,
            white_threshold: analysis.white_threshold,
            sections: analysis.sections.clone(),
            texture: analysis.texture.clone(),
        }
    }
}

/// One human-readable line per slot, for terminal output.
pub fn section_summary(section: &Section) -> String {
    format!(
        "Section ({}, {}): {:.1}% white -> {} -> {}",
        section.row,
        section.col,
        section.white_ratio * 100.0,
        section.status,
        section.linen_type.as_deref().unwrap_or("unassigned")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_scan_grid::FillStatus;

    #[test]
    fn summary_line_format() {
        let section = Section {
            row: 2,
            col: 0,
            white_ratio: 0.834,
            status: FillStatus::Full,
            linen_type: Some("Towel".to_string()),
        };
        assert_eq!(
            section_summary(&section),
            "Section (2, 0): 83.4% white -> full -> Towel"
        );
    }

    #[test]
    fn summary_marks_unassigned_slots() {
        let section = Section {
            row: 0,
            col: 1,
            white_ratio: 0.1,
            status: FillStatus::Empty,
            linen_type: None,
        };
        assert_eq!(
            section_summary(&section),
            "Section (0, 1): 10.0% white -> empty -> unassigned"
        );
    }
}
