//! Feature Transformer
//!
//! Pure mapping RawInput → FeatureVector. Two derived numeric features, a
//! one-hot product type, tool wear passed through; the other raw readings
//! are consumed here and dropped.

use std::f64::consts::PI;

use super::layout::FEATURE_VERSION;
use super::vector::FeatureVector;
use crate::logic::input::{ProductType, RawInput};

/// Mechanical power in watts from RPM and N·m
pub fn power(rotational_speed: u32, torque: f64) -> f64 {
    2.0 * PI * rotational_speed as f64 * torque / 60.0
}

/// Heat gap between process and ambient air
pub fn temp_diff(process_temperature: f64, air_temperature: f64) -> f64 {
    process_temperature - air_temperature
}

/// One-hot flags in (H, L, M) order
///
/// Anything that did not parse as L or M is already H (see `ProductType::from_code`).
pub fn one_hot(product_type: ProductType) -> (u8, u8, u8) {
    match product_type {
        ProductType::L => (0, 1, 0),
        ProductType::M => (0, 0, 1),
        ProductType::H => (1, 0, 0),
    }
}

pub fn transform(raw: &RawInput) -> FeatureVector {
    let (type_h, type_l, type_m) = one_hot(raw.product_type);

    FeatureVector {
        version: FEATURE_VERSION,
        power: power(raw.rotational_speed, raw.torque),
        temp_diff: temp_diff(raw.process_temperature, raw.air_temperature),
        type_h,
        type_l,
        type_m,
        tool_wear: raw.tool_wear,
    }
}
