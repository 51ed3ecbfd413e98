//! Comparative Display Selector
//!
//! So sánh input hiện tại với lịch sử có cùng kết quả.
//! Pure presentation-spec generation: no rendering, no failure modes.

use serde::{Deserialize, Serialize};

use super::binning::{BinPolicy, HistogramBin};
use super::fields::{FieldKind, FieldName};
use crate::constants::{BASE_COLOR, HIGHLIGHT_COLOR, MARKER_WIDTH};
use crate::logic::dataset::ReferenceDataset;
use crate::logic::input::{ProductType, RawInput};

// ============================================================================
// VIEW SPEC
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub category: ProductType,
    pub count: usize,
    pub highlighted: bool,
    pub color: String,
}

/// Vertical rule at the operator's value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub value: f64,
    pub color: String,
    pub width: u32,
}

/// Presentation-agnostic chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewSpec {
    Categorical {
        field: FieldName,
        label: u8,
        row_count: usize,
        bars: Vec<CategoryBar>,
    },
    Distribution {
        field: FieldName,
        label: u8,
        row_count: usize,
        bin_policy: BinPolicy,
        bins: Vec<HistogramBin>,
        bar_color: String,
        marker: Marker,
    },
}

impl ViewSpec {
    pub fn field(&self) -> FieldName {
        match self {
            Self::Categorical { field, .. } | Self::Distribution { field, .. } => *field,
        }
    }

    /// Rows that survived the label filter
    pub fn row_count(&self) -> usize {
        match self {
            Self::Categorical { row_count, .. } | Self::Distribution { row_count, .. } => *row_count,
        }
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// Build the comparison view for one field
///
/// Only history whose ground-truth failure flag equals `label` is charted.
pub fn select_view(
    field: FieldName,
    label: u8,
    raw: &RawInput,
    dataset: &ReferenceDataset,
) -> ViewSpec {
    let rows = dataset.filter_by_label(label);
    let spec = field.spec();

    log::debug!(
        "Selecting {:?} view: label={} rows={}/{}",
        field,
        label,
        rows.len(),
        dataset.len()
    );

    match spec.kind {
        FieldKind::Categorical {
            record_category,
            input_category,
        } => {
            let current = input_category(raw);
            let bars = ProductType::ALL
                .iter()
                .map(|&category| {
                    let highlighted = category == current;
                    CategoryBar {
                        category,
                        count: rows.iter().filter(|r| record_category(r) == category).count(),
                        highlighted,
                        color: if highlighted { HIGHLIGHT_COLOR } else { BASE_COLOR }.to_string(),
                    }
                })
                .collect();

            ViewSpec::Categorical {
                field,
                label,
                row_count: rows.len(),
                bars,
            }
        }
        FieldKind::Numeric {
            bins,
            record_value,
            input_value,
        } => {
            let values: Vec<f64> = rows.iter().map(|r| record_value(r)).collect();

            ViewSpec::Distribution {
                field,
                label,
                row_count: rows.len(),
                bin_policy: bins,
                bins: bins.bins(&values),
                bar_color: BASE_COLOR.to_string(),
                marker: Marker {
                    value: input_value(raw),
                    color: HIGHLIGHT_COLOR.to_string(),
                    width: MARKER_WIDTH,
                },
            }
        }
    }
}
