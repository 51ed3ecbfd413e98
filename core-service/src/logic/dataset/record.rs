use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::logic::input::ProductType;

/// One historical reading with its ground-truth outcome
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReferenceRecord {
    pub product_type: ProductType,
    pub air_temperature: f64,
    pub process_temperature: f64,
    pub rotational_speed: u32,
    pub torque: f64,
    pub tool_wear: u32,

    // ✅ Ground truth (0 = ok, 1 = failure)
    pub machine_failure: u8,
}

/// CSV row, positional. Header names are ignored.
#[derive(Deserialize, Debug)]
pub(crate) struct CsvRow {
    pub _udi: IgnoredAny,
    pub _product_id: IgnoredAny,
    pub product_type: String,
    pub air_temperature: f64,
    pub process_temperature: f64,
    pub rotational_speed: u32,
    pub torque: f64,
    pub tool_wear: u32,
    pub machine_failure: u8,
    pub _failure_type: IgnoredAny,
}

/// Columns in the reference file
pub const CSV_COLUMN_COUNT: usize = 10;

impl From<CsvRow> for ReferenceRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            product_type: ProductType::from_code(&row.product_type),
            air_temperature: row.air_temperature,
            process_temperature: row.process_temperature,
            rotational_speed: row.rotational_speed,
            torque: row.torque,
            tool_wear: row.tool_wear,
            machine_failure: row.machine_failure,
        }
    }
}
