//! Central Configuration Constants
//!
//! Single source of truth for artifact locations and operating defaults.
//! To change a default slider position or an artifact name, only edit this file.

/// Default classifier artifact (ONNX export of the trained estimator)
pub const DEFAULT_MODEL_PATH: &str = "predictive_maintenance.onnx";

/// Default historical reference dataset
pub const DEFAULT_DATASET_PATH: &str = "predictive_maintenance.csv";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Predictive Maintenance for Industrial Devices";

/// Tagline shown under the title
pub const APP_TAGLINE: &str =
    "Empowering Manufacturing Efficiency through Smart Maintenance Predictions";

// ============================================
// Input bounds (inclusive) and defaults
// ============================================

pub const AIR_TEMPERATURE_MIN: f64 = 295.0;
pub const AIR_TEMPERATURE_MAX: f64 = 305.0;
pub const AIR_TEMPERATURE_DEFAULT: f64 = 300.0;

pub const PROCESS_TEMPERATURE_MIN: f64 = 305.0;
pub const PROCESS_TEMPERATURE_MAX: f64 = 314.0;
pub const PROCESS_TEMPERATURE_DEFAULT: f64 = 310.0;

pub const ROTATIONAL_SPEED_MIN: u32 = 1168;
pub const ROTATIONAL_SPEED_MAX: u32 = 2886;
pub const ROTATIONAL_SPEED_DEFAULT: u32 = 1500;

pub const TORQUE_MIN: f64 = 3.5;
pub const TORQUE_MAX: f64 = 77.0;
pub const TORQUE_DEFAULT: f64 = 40.0;

pub const TOOL_WEAR_MIN: u32 = 0;
pub const TOOL_WEAR_MAX: u32 = 253;
pub const TOOL_WEAR_DEFAULT: u32 = 108;

// ============================================
// Chart palette
// ============================================

/// Colour of the bar/marker that represents the current input
pub const HIGHLIGHT_COLOR: &str = "orange";

/// Colour shared by every other bar
pub const BASE_COLOR: &str = "steelblue";

/// Stroke width of the vertical marker on distribution views
pub const MARKER_WIDTH: u32 = 3;

/// Upper bound on histogram bins for numeric fields
pub const DEFAULT_MAX_BINS: usize = 10;

/// Allowed drift of `p0 + p1` away from 1.0
pub const PROBABILITY_SUM_TOLERANCE: f32 = 1e-3;
