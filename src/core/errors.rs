//! Error types for alignment operations

use thiserror::Error;

/// Errors raised while parsing or computing an alignment
///
/// `InsufficientSelection` is not a program failure: the operators turn it into
/// a cancelled outcome and leave the scene untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    #[error("at least {required} selected objects are required, found {found}")]
    InsufficientSelection { required: usize, found: usize },

    #[error("padding must be a finite number, got {0}")]
    InvalidPadding(f32),

    #[error("unknown axis '{0}' (expected x, y or z)")]
    UnknownAxis(String),

    #[error("unknown spacing '{0}' (expected center or border)")]
    UnknownSpacing(String),

    #[error("unknown placement '{0}' (expected positive, centered or negative)")]
    UnknownPlacement(String),
}

impl AlignError {
    /// Whether this error should cancel the operation rather than fail it
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AlignError::InsufficientSelection { .. })
    }
}
