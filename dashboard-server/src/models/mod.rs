//! Request / response models

pub mod evaluation;
pub mod model;

pub use evaluation::*;
pub use model::*;
