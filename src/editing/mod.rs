//! Editing Functionality
//!
//! This module contains all editing-related functionality:
//! - Selection components and ordering
//! - Axis-based layout of selected objects
//! - The host operators, their menu and the 3D cursor
//! - Undo/redo system for reversible operations

pub mod align;
pub mod cursor;
pub mod operators;
pub mod selection;
pub mod undo;

// Re-export commonly used items
pub use align::{AlignMode, AlignOutcome, AlignmentRequest, Placement, SpacingPolicy};
pub use cursor::{Cursor3d, HostVersion, LegacyCursorLocation};
pub use operators::{AlignOperatorFinished, AlignPlugin, LastAlignOutcome, RunAlignOperator};
pub use selection::{Dimensions, SceneObject, Selected, SelectionPlugin};
pub use undo::{RedoEvent, UndoEvent, UndoHistory};
