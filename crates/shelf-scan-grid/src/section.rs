use serde::{Deserialize, Serialize};

/// Ratios strictly above this are full.
pub const FULL_MIN_RATIO: f64 = 0.8;
/// Ratios at or below this are empty.
pub const EMPTY_MAX_RATIO: f64 = 0.2;

/// Fill level of one storage slot, used as a proxy for linen stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStatus {
    Empty,
    Partial,
    Full,
}

impl FillStatus {
    /// Band rule: full iff ratio > 0.8, empty iff ratio <= 0.2, else
    /// partial. Both boundary values land in the lower band.
    pub fn classify(white_ratio: f64) -> Self {
        if white_ratio > FULL_MIN_RATIO {
            FillStatus::Full
        } else if white_ratio > EMPTY_MAX_RATIO {
            FillStatus::Partial
        } else {
            FillStatus::Empty
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FillStatus::Empty => "empty",
            FillStatus::Partial => "partial",
            FillStatus::Full => "full",
        }
    }
}

impl std::fmt::Display for FillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis record for one grid cell. `linen_type` is populated afterwards
/// from the operator's layout; everything else is computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub row: u32,
    pub col: u32,
    pub white_ratio: f64,
    pub status: FillStatus,
    #[serde(default)]
    pub linen_type: Option<String>,
}
