//! Input Schema - declarative description of the operator controls
//!
//! Any form renderer (HTML page, CLI prompt, ...) builds its controls from
//! this table instead of hard-coding ranges.

use serde::Serialize;

use super::types::ProductType;
use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    Select {
        options: Vec<&'static str>,
        default: &'static str,
    },
    Slider {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputControl {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    #[serde(flatten)]
    pub kind: ControlKind,
}

fn slider(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    (min, max, step, default): (f64, f64, f64, f64),
) -> InputControl {
    InputControl {
        key,
        label,
        unit: Some(unit),
        kind: ControlKind::Slider { min, max, step, default },
    }
}

/// Controls in sidebar order
pub fn input_schema() -> Vec<InputControl> {
    vec![
        InputControl {
            key: "type",
            label: "Type",
            unit: None,
            kind: ControlKind::Select {
                options: vec![
                    ProductType::L.as_str(),
                    ProductType::M.as_str(),
                    ProductType::H.as_str(),
                ],
                default: ProductType::default().as_str(),
            },
        },
        slider(
            "air_temperature",
            "Air Temperature",
            "K",
            (AIR_TEMPERATURE_MIN, AIR_TEMPERATURE_MAX, 0.1, AIR_TEMPERATURE_DEFAULT),
        ),
        slider(
            "process_temperature",
            "Process Temperature",
            "K",
            (PROCESS_TEMPERATURE_MIN, PROCESS_TEMPERATURE_MAX, 0.1, PROCESS_TEMPERATURE_DEFAULT),
        ),
        slider(
            "rotational_speed",
            "Rotational Speed",
            "RPM",
            (
                ROTATIONAL_SPEED_MIN as f64,
                ROTATIONAL_SPEED_MAX as f64,
                1.0,
                ROTATIONAL_SPEED_DEFAULT as f64,
            ),
        ),
        slider(
            "torque",
            "Torque",
            "N-m",
            (TORQUE_MIN, TORQUE_MAX, 0.1, TORQUE_DEFAULT),
        ),
        slider(
            "tool_wear",
            "Tool Wear",
            "min",
            (
                TOOL_WEAR_MIN as f64,
                TOOL_WEAR_MAX as f64,
                1.0,
                TOOL_WEAR_DEFAULT as f64,
            ),
        ),
    ]
}
