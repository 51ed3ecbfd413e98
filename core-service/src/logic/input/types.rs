//! Raw Input - operator readings before transformation

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::constants::*;

// ============================================================================
// PRODUCT TYPE
// ============================================================================

/// Product quality variant (low / medium / high)
///
/// Parsing from text is total: `"L"` and `"M"` map to themselves and every
/// other value maps to `H`. The catch-all is the encoding policy the artifact
/// was trained with, so unknown codes are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ProductType {
    H,
    L,
    M,
}

impl ProductType {
    /// Ordinal order used by categorical charts
    pub const ALL: [ProductType; 3] = [ProductType::H, ProductType::L, ProductType::M];

    pub fn from_code(code: &str) -> Self {
        match code {
            "L" => Self::L,
            "M" => Self::M,
            _ => Self::H,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::L => "L",
            Self::M => "M",
        }
    }
}

impl Default for ProductType {
    fn default() -> Self {
        Self::L
    }
}

impl From<String> for ProductType {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<&str> for ProductType {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RAW INPUT
// ============================================================================

/// Six operational readings for one device
///
/// Missing fields deserialize to the default operating point, so a partial
/// request body is a valid starting point for `collect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RawInput {
    #[serde(rename = "type", alias = "Type", alias = "product_type")]
    pub product_type: ProductType,

    /// Kelvin
    #[validate(range(min = AIR_TEMPERATURE_MIN, max = AIR_TEMPERATURE_MAX))]
    pub air_temperature: f64,

    /// Kelvin
    #[validate(range(min = PROCESS_TEMPERATURE_MIN, max = PROCESS_TEMPERATURE_MAX))]
    pub process_temperature: f64,

    /// RPM
    #[validate(range(min = ROTATIONAL_SPEED_MIN, max = ROTATIONAL_SPEED_MAX))]
    pub rotational_speed: u32,

    /// N·m
    #[validate(range(min = TORQUE_MIN, max = TORQUE_MAX))]
    pub torque: f64,

    /// Minutes
    #[validate(range(min = TOOL_WEAR_MIN, max = TOOL_WEAR_MAX))]
    pub tool_wear: u32,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            product_type: ProductType::default(),
            air_temperature: AIR_TEMPERATURE_DEFAULT,
            process_temperature: PROCESS_TEMPERATURE_DEFAULT,
            rotational_speed: ROTATIONAL_SPEED_DEFAULT,
            torque: TORQUE_DEFAULT,
            tool_wear: TOOL_WEAR_DEFAULT,
        }
    }
}

/// One row of the "Input Details" list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputLine {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

impl RawInput {
    /// Human-readable summary of the readings, in sidebar order
    pub fn summary(&self) -> Vec<InputLine> {
        vec![
            InputLine {
                key: "type",
                label: "Type",
                value: self.product_type.to_string(),
                unit: None,
            },
            InputLine {
                key: "air_temperature",
                label: "Air Temperature",
                value: format!("{:?}", self.air_temperature),
                unit: Some("K"),
            },
            InputLine {
                key: "process_temperature",
                label: "Process Temperature",
                value: format!("{:?}", self.process_temperature),
                unit: Some("K"),
            },
            InputLine {
                key: "rotational_speed",
                label: "Rotational Speed",
                value: self.rotational_speed.to_string(),
                unit: Some("RPM"),
            },
            InputLine {
                key: "torque",
                label: "Torque",
                value: format!("{:?}", self.torque),
                unit: Some("Nm"),
            },
            InputLine {
                key: "tool_wear",
                label: "Tool Wear",
                value: self.tool_wear.to_string(),
                unit: Some("min"),
            },
        ]
    }

    fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("air_temperature", self.air_temperature),
            ("process_temperature", self.process_temperature),
            ("torque", self.torque),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
        .collect()
    }
}

// ============================================================================
// COLLECTION
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input out of range: {0}")]
    OutOfRange(#[from] validator::ValidationErrors),

    #[error("input is not a finite number: {}", .0.join(", "))]
    NotFinite(Vec<&'static str>),
}

/// Bounds-check a raw reading set
///
/// This is the only door into the core for external data; everything
/// downstream treats `RawInput` as valid.
pub fn collect(input: RawInput) -> Result<RawInput, InputError> {
    let non_finite = input.non_finite_fields();
    if !non_finite.is_empty() {
        return Err(InputError::NotFinite(non_finite));
    }

    input.validate()?;

    log::debug!(
        "Collected input: type={} air={} process={} rpm={} torque={} wear={}",
        input.product_type,
        input.air_temperature,
        input.process_temperature,
        input.rotational_speed,
        input.torque,
        input.tool_wear
    );

    Ok(input)
}
