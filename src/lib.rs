//! Aligner
pub mod core;
pub mod data;
pub mod editing;
pub mod geometry;
pub mod logging;
