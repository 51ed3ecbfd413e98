//! HTTP handlers

pub mod health;
pub mod dashboard;
pub mod inputs;
pub mod evaluate;
pub mod catalog;
