//! View Module - Comparative Display Selector
//!
//! Field table → binning → view spec. The presentation layer renders the
//! spec; nothing here knows about a chart toolkit.

pub mod binning;
pub mod fields;
pub mod selector;

#[cfg(test)]
mod tests;

pub use binning::{BinLayout, BinPolicy, HistogramBin};
pub use fields::{FieldKind, FieldName, FieldSpec, FIELD_TABLE};
pub use selector::{select_view, CategoryBar, Marker, ViewSpec};
