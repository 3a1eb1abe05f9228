//! Cursor-padding alignment: lay objects out from a reference point

use super::{LayoutItem, Placement, SpacingPolicy};

/// Lay out `items` starting at `reference` with `padding` between them
///
/// With [`SpacingPolicy::Centers`] centers sit at a constant pitch of
/// `padding` and object sizes are ignored. With [`SpacingPolicy::Borders`]
/// objects are packed edge to edge with `padding` between neighbouring
/// borders. `placement` decides whether the run grows away from the reference,
/// is centered on it, or ends on it.
pub fn pad_from_reference(
    items: &[LayoutItem],
    reference: f32,
    padding: f32,
    placement: Placement,
    spacing: SpacingPolicy,
) -> Vec<f32> {
    match spacing {
        SpacingPolicy::Centers => pitch_centers(items.len(), reference, padding, placement),
        SpacingPolicy::Borders => pack_borders(items, reference, padding, placement),
    }
}

fn pitch_centers(cnt: usize, reference: f32, padding: f32, placement: Placement) -> Vec<f32> {
    let shift = cnt.saturating_sub(1) as f32 * placement.back_fraction();
    (0..cnt)
        .map(|i| reference + (i as f32 - shift) * padding)
        .collect()
}

fn pack_borders(
    items: &[LayoutItem],
    reference: f32,
    padding: f32,
    placement: Placement,
) -> Vec<f32> {
    let gaps = items.len().saturating_sub(1) as f32;
    let span = padding * gaps + items.iter().map(|item| item.extent).sum::<f32>();

    let mut cursor = reference - span * placement.back_fraction();
    items
        .iter()
        .map(|item| {
            let center = cursor + item.half_extent();
            cursor += item.extent + padding;
            center
        })
        .collect()
}
