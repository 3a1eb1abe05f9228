//! Geometric Primitives and Operations

pub mod axis;

// Re-export commonly used items
pub use axis::Axis;
