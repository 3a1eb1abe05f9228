//! Bounds-fit alignment: spread objects between the selection's extremes

use super::{LayoutItem, SpacingPolicy, MIN_BOUNDS_SELECTION};
use crate::core::errors::AlignError;

/// Distribute `items` between the lowest and highest current coordinate
///
/// With [`SpacingPolicy::Centers`] the first and last items land exactly on
/// the extremes and the rest are spread evenly by index. With
/// [`SpacingPolicy::Borders`] the free space between the extremes is split
/// into equal edge-to-edge gaps.
pub fn fit_between_bounds(
    items: &[LayoutItem],
    spacing: SpacingPolicy,
) -> Result<Vec<f32>, AlignError> {
    if items.len() < MIN_BOUNDS_SELECTION {
        return Err(AlignError::InsufficientSelection {
            required: MIN_BOUNDS_SELECTION,
            found: items.len(),
        });
    }

    let (mn, mx) = coordinate_range(items);
    let layout = match spacing {
        SpacingPolicy::Centers => interpolate_centers(items.len(), mn, mx),
        SpacingPolicy::Borders => distribute_borders(items, mn, mx),
    };
    Ok(layout)
}

fn coordinate_range(items: &[LayoutItem]) -> (f32, f32) {
    items.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(mn, mx), item| {
        (mn.min(item.coordinate), mx.max(item.coordinate))
    })
}

fn interpolate_centers(cnt: usize, mn: f32, mx: f32) -> Vec<f32> {
    let last = (cnt - 1) as f32;
    (0..cnt)
        .map(|i| {
            let i = i as f32;
            mn * (last - i) / last + mx * i / last
        })
        .collect()
}

fn distribute_borders(items: &[LayoutItem], mn: f32, mx: f32) -> Vec<f32> {
    let cnt = items.len();
    let first = items[0];
    let last = items[cnt - 1];

    // The outer halves of the end objects lie outside the span
    let occupied: f32 = items.iter().map(|item| item.extent).sum::<f32>()
        - first.half_extent()
        - last.half_extent();
    let gap = ((mx - mn) - occupied) / (cnt - 1) as f32;

    let mut layout = Vec::with_capacity(cnt);
    let mut center = mn;
    layout.push(center);
    for pair in items.windows(2) {
        center += pair[0].half_extent() + gap + pair[1].half_extent();
        layout.push(center);
    }

    // Pin the last object so accumulated rounding cannot move the far bound
    if let Some(end) = layout.last_mut() {
        *end = mx;
    }
    layout
}
