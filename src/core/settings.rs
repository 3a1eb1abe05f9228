//! Operator defaults
//!
//! These are the values the parameter dialog starts from. The settings file
//! overrides them and command line flags override both.

use crate::editing::align::{AlignmentRequest, Placement, SpacingPolicy};
use crate::editing::undo::DEFAULT_UNDO_STEPS;
use crate::geometry::Axis;
use bevy::prelude::*;

/// Default padding between objects, in scene units
pub const DEFAULT_PADDING: f32 = 1.0;

/// Operator property defaults and history depth
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AlignSettings {
    pub source_axis: Axis,
    pub target_axis: Axis,
    pub spacing: SpacingPolicy,
    pub padding: f32,
    pub placement: Placement,
    pub undo_steps: usize,
}

impl Default for AlignSettings {
    fn default() -> Self {
        Self {
            source_axis: Axis::X,
            target_axis: Axis::X,
            spacing: SpacingPolicy::Centers,
            padding: DEFAULT_PADDING,
            placement: Placement::Positive,
            undo_steps: DEFAULT_UNDO_STEPS,
        }
    }
}

impl AlignSettings {
    /// Request for the bounds operator using these defaults
    pub fn bounds_request(&self) -> AlignmentRequest {
        AlignmentRequest::bounds(self.source_axis, self.target_axis, self.spacing)
    }

    /// Request for the padding operator using these defaults
    pub fn padding_request(&self) -> AlignmentRequest {
        AlignmentRequest::padding(
            self.source_axis,
            self.target_axis,
            self.spacing,
            self.padding,
            self.placement,
        )
    }
}
