//! Dataset Module - Historical Reference Data
//!
//! Loads the labeled history used by the comparative views.
//! Read-only after startup; never used for training here.

pub mod record;
pub mod reader;

#[cfg(test)]
mod tests;

pub use reader::{DatasetError, ReferenceDataset};
pub use record::ReferenceRecord;
