//! Maintenance Core - prediction engine for the maintenance dashboard
//!
//! Readings → features → classifier → decision, plus the comparison views
//! built from the labeled history.

pub mod constants;
pub mod logic;

pub use logic::about::{about, AboutInfo};
pub use logic::pipeline::{Engine, EngineConfig, EngineError, EvaluateError, Evaluation};
