//! Input Module - Input Collector
//!
//! Gom và kiểm tra sáu thông số vận hành từ người dùng.
//! Bounds-check + defaults; everything after this trusts `RawInput`.

pub mod types;
pub mod schema;


// Re-export common types
pub use types::{collect, InputError, InputLine, ProductType, RawInput};
pub use schema::{input_schema, ControlKind, InputControl};
