//! Field Table - data-driven dispatch for comparative views
//!
//! One row per selectable field: how to read it from a reference record and
//! from the operator input, and whether it is charted as counts or bins.

use serde::{Deserialize, Serialize};

use super::binning::BinPolicy;
use crate::logic::dataset::ReferenceRecord;
use crate::logic::input::{ProductType, RawInput};

/// Closed set of fields the operator can compare against history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    #[serde(alias = "Type")]
    Type,
    #[serde(alias = "Air Temperature")]
    AirTemperature,
    #[serde(alias = "Process Temperature")]
    ProcessTemperature,
    #[serde(alias = "Rotational Speed")]
    RotationalSpeed,
    #[serde(alias = "Torque")]
    Torque,
    #[serde(alias = "Tool Wear")]
    ToolWear,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Type,
        FieldName::AirTemperature,
        FieldName::ProcessTemperature,
        FieldName::RotationalSpeed,
        FieldName::Torque,
        FieldName::ToolWear,
    ];

    pub fn spec(&self) -> &'static FieldSpec {
        &FIELD_TABLE[*self as usize]
    }
}

impl Default for FieldName {
    fn default() -> Self {
        Self::Type
    }
}

/// How a field is charted
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Count per category, current category highlighted
    Categorical {
        #[serde(skip)]
        record_category: fn(&ReferenceRecord) -> ProductType,
        #[serde(skip)]
        input_category: fn(&RawInput) -> ProductType,
    },
    /// Binned distribution plus a marker at the current value
    Numeric {
        bins: BinPolicy,
        #[serde(skip)]
        record_value: fn(&ReferenceRecord) -> f64,
        #[serde(skip)]
        input_value: fn(&RawInput) -> f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub field: FieldName,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

// ============================================================================
// ACCESSORS
// ============================================================================

fn record_type(r: &ReferenceRecord) -> ProductType {
    r.product_type
}
fn input_type(i: &RawInput) -> ProductType {
    i.product_type
}
fn record_air(r: &ReferenceRecord) -> f64 {
    r.air_temperature
}
fn input_air(i: &RawInput) -> f64 {
    i.air_temperature
}
fn record_process(r: &ReferenceRecord) -> f64 {
    r.process_temperature
}
fn input_process(i: &RawInput) -> f64 {
    i.process_temperature
}
fn record_speed(r: &ReferenceRecord) -> f64 {
    r.rotational_speed as f64
}
fn input_speed(i: &RawInput) -> f64 {
    i.rotational_speed as f64
}
fn record_torque(r: &ReferenceRecord) -> f64 {
    r.torque
}
fn input_torque(i: &RawInput) -> f64 {
    i.torque
}
fn record_wear(r: &ReferenceRecord) -> f64 {
    r.tool_wear as f64
}
fn input_wear(i: &RawInput) -> f64 {
    i.tool_wear as f64
}

// ============================================================================
// TABLE
// ============================================================================

/// Indexed by `FieldName as usize`
pub static FIELD_TABLE: [FieldSpec; 6] = [
    FieldSpec {
        field: FieldName::Type,
        label: "Type",
        unit: None,
        kind: FieldKind::Categorical {
            record_category: record_type,
            input_category: input_type,
        },
    },
    FieldSpec {
        field: FieldName::AirTemperature,
        label: "Air Temperature",
        unit: Some("K"),
        kind: FieldKind::Numeric {
            bins: BinPolicy::DEFAULT,
            record_value: record_air,
            input_value: input_air,
        },
    },
    FieldSpec {
        field: FieldName::ProcessTemperature,
        label: "Process Temperature",
        unit: Some("K"),
        kind: FieldKind::Numeric {
            bins: BinPolicy::DEFAULT,
            record_value: record_process,
            input_value: input_process,
        },
    },
    FieldSpec {
        field: FieldName::RotationalSpeed,
        label: "Rotational Speed",
        unit: Some("RPM"),
        kind: FieldKind::Numeric {
            bins: BinPolicy::DEFAULT,
            record_value: record_speed,
            input_value: input_speed,
        },
    },
    FieldSpec {
        field: FieldName::Torque,
        label: "Torque",
        unit: Some("Nm"),
        kind: FieldKind::Numeric {
            bins: BinPolicy::DEFAULT,
            record_value: record_torque,
            input_value: input_torque,
        },
    },
    FieldSpec {
        field: FieldName::ToolWear,
        label: "Tool Wear",
        unit: Some("min"),
        kind: FieldKind::Numeric {
            bins: BinPolicy::DEFAULT,
            record_value: record_wear,
            input_value: input_wear,
        },
    },
];
