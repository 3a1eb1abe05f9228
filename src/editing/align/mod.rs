//! Axis-based object layout
//!
//! The layout itself is pure arithmetic over [`LayoutItem`] snapshots taken on
//! the target axis. Callers sort their objects with
//! [`sort_by_axis`](crate::editing::selection::sort_by_axis) first, compute the
//! new coordinates with [`compute_layout`] and only then write them back, so a
//! failed request never leaves the scene half-edited.

pub mod bounds;
pub mod padding;

pub use bounds::fit_between_bounds;
pub use padding::pad_from_reference;

use crate::core::errors::AlignError;
use crate::geometry::Axis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum selection size for bounds-fit alignment
pub const MIN_BOUNDS_SELECTION: usize = 2;

/// Whether objects are spaced by their centers or by their bounding-box borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpacingPolicy {
    #[default]
    #[serde(rename = "center")]
    Centers,
    #[serde(rename = "border")]
    Borders,
}

impl SpacingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpacingPolicy::Centers => "center",
            SpacingPolicy::Borders => "border",
        }
    }
}

impl fmt::Display for SpacingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpacingPolicy {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centers" => Ok(SpacingPolicy::Centers),
            "border" | "borders" => Ok(SpacingPolicy::Borders),
            _ => Err(AlignError::UnknownSpacing(s.to_string())),
        }
    }
}

/// Which side of the reference point the objects end up on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Positive,
    Centered,
    Negative,
}

impl Placement {
    pub const ALL: [Placement; 3] = [Placement::Positive, Placement::Centered, Placement::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Positive => "positive",
            Placement::Centered => "centered",
            Placement::Negative => "negative",
        }
    }

    /// Dialog description of the placement
    pub fn description(&self) -> &'static str {
        match self {
            Placement::Positive => "Place objects on positive direction",
            Placement::Centered => "Place objects around cursor",
            Placement::Negative => "Place objects on negative direction",
        }
    }

    /// How far the layout start moves back, as a fraction of its full length
    pub fn back_fraction(&self) -> f32 {
        match self {
            Placement::Positive => 0.0,
            Placement::Centered => 0.5,
            Placement::Negative => 1.0,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "0" => Ok(Placement::Positive),
            "centered" | "center" | "1" => Ok(Placement::Centered),
            "negative" | "2" => Ok(Placement::Negative),
            _ => Err(AlignError::UnknownPlacement(s.to_string())),
        }
    }
}

/// The alignment mode and its mode-specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AlignMode {
    /// Spread objects between the extreme positions of the selection
    Bounds,
    /// Spread objects from the 3D cursor with a fixed padding
    Padding { padding: f32, placement: Placement },
}

/// Everything an alignment operator needs besides the objects themselves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRequest {
    /// Axis that decides the processing order
    pub source: Axis,
    /// Axis along which objects are moved
    pub target: Axis,
    pub spacing: SpacingPolicy,
    #[serde(flatten)]
    pub mode: AlignMode,
}

impl AlignmentRequest {
    pub fn bounds(source: Axis, target: Axis, spacing: SpacingPolicy) -> Self {
        Self {
            source,
            target,
            spacing,
            mode: AlignMode::Bounds,
        }
    }

    pub fn padding(
        source: Axis,
        target: Axis,
        spacing: SpacingPolicy,
        padding: f32,
        placement: Placement,
    ) -> Self {
        Self {
            source,
            target,
            spacing,
            mode: AlignMode::Padding { padding, placement },
        }
    }

    /// Reject parameter values that cannot produce a layout
    pub fn validate(&self) -> Result<(), AlignError> {
        match self.mode {
            AlignMode::Padding { padding, .. } if !padding.is_finite() => {
                Err(AlignError::InvalidPadding(padding))
            }
            _ => Ok(()),
        }
    }
}

/// Snapshot of one object on the target axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutItem {
    /// Current center coordinate
    pub coordinate: f32,
    /// Bounding-box size
    pub extent: f32,
}

impl LayoutItem {
    pub fn new(coordinate: f32, extent: f32) -> Self {
        Self { coordinate, extent }
    }

    pub fn half_extent(&self) -> f32 {
        self.extent * 0.5
    }
}

/// Completion status reported back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignOutcome {
    Finished,
    Cancelled,
}

/// Compute new target-axis coordinates for `items`, already in layout order
///
/// `reference` is the 3D cursor coordinate on the target axis; bounds-fit
/// alignment ignores it. The returned vector is parallel to `items`.
pub fn compute_layout(
    items: &[LayoutItem],
    request: &AlignmentRequest,
    reference: f32,
) -> Result<Vec<f32>, AlignError> {
    request.validate()?;
    match request.mode {
        AlignMode::Bounds => fit_between_bounds(items, request.spacing),
        AlignMode::Padding { padding, placement } => Ok(pad_from_reference(
            items,
            reference,
            padding,
            placement,
            request.spacing,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(coordinates: &[f32]) -> Vec<LayoutItem> {
        coordinates
            .iter()
            .map(|&coordinate| LayoutItem::new(coordinate, 1.0))
            .collect()
    }

    #[test]
    fn test_compute_layout_dispatches_bounds() {
        let request = AlignmentRequest::bounds(Axis::X, Axis::X, SpacingPolicy::Centers);
        let result = compute_layout(&items(&[0.0, 5.0, 2.0]), &request, 100.0).unwrap();
        assert_eq!(result, vec![0.0, 2.5, 5.0]);
    }

    #[test]
    fn test_compute_layout_dispatches_padding() {
        let request = AlignmentRequest::padding(
            Axis::X,
            Axis::Y,
            SpacingPolicy::Centers,
            2.0,
            Placement::Negative,
        );
        let result = compute_layout(&items(&[7.0, 8.0, 9.0]), &request, 10.0).unwrap();
        assert_eq!(result, vec![6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_compute_layout_rejects_non_finite_padding() {
        let request = AlignmentRequest::padding(
            Axis::X,
            Axis::X,
            SpacingPolicy::Borders,
            f32::NAN,
            Placement::Positive,
        );
        assert!(matches!(
            compute_layout(&items(&[1.0]), &request, 0.0),
            Err(AlignError::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_bounds_with_single_item_is_cancellation() {
        let request = AlignmentRequest::bounds(Axis::X, Axis::X, SpacingPolicy::Borders);
        let err = compute_layout(&items(&[3.0]), &request, 0.0).unwrap_err();
        assert!(err.is_cancellation());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("center".parse::<SpacingPolicy>(), Ok(SpacingPolicy::Centers));
        assert_eq!("Border".parse::<SpacingPolicy>(), Ok(SpacingPolicy::Borders));
        assert!(matches!(
            "diagonal".parse::<SpacingPolicy>(),
            Err(AlignError::UnknownSpacing(_))
        ));

        assert_eq!("centered".parse::<Placement>(), Ok(Placement::Centered));
        assert_eq!("2".parse::<Placement>(), Ok(Placement::Negative));
        assert!(matches!(
            "sideways".parse::<Placement>(),
            Err(AlignError::UnknownPlacement(_))
        ));
    }

    #[test]
    fn test_request_serde_shape() {
        let request = AlignmentRequest::padding(
            Axis::Z,
            Axis::X,
            SpacingPolicy::Borders,
            0.5,
            Placement::Centered,
        );
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["mode"], "padding");
        assert_eq!(json["spacing"], "border");
        assert_eq!(json["placement"], "centered");
        let back: AlignmentRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
