//! Relayout after a spine or wing edit
//!
//! A resize differs from a rebuild in where the spread is pinned. The back
//! cover keeps its absolute left edge, the left wing grows or shrinks
//! outwards from it, and panels right of the spine keep their distance to
//! the spread's trailing edge. The spine absorbs the change and the spread
//! grows or shrinks on its trailing side.

use crate::spec::SpreadSpec;
use crate::types::{RegionId, Result};

use super::SpreadLayout;
use super::regions::{build_layout, panel_widths_mm};

/// Recompute a layout for `new_spec`, pinned to `previous`.
///
/// `new_spec` is expected to differ from the spec behind `previous` only in
/// spine width and/or wing settings. Toggling wings adds or removes the wing
/// regions around covers that stay where they were.
pub fn compute_resized_layout(previous: &SpreadLayout, new_spec: &SpreadSpec) -> Result<SpreadLayout> {
    new_spec.validate()?;

    // Every layout has a back cover; the origin is only a fallback
    let back_cover_left = previous
        .region(RegionId::BackCover)
        .map_or(previous.origin_x, |back| back.position.left);

    let structural = !panel_widths_mm(new_spec)
        .iter()
        .map(|&(id, _)| id)
        .eq(previous.region_ids());
    if structural {
        log::debug!(
            "region set changed (wings {} -> {}), keeping back cover at {:.2}",
            previous.has_wings(),
            new_spec.wing_enabled,
            back_cover_left,
        );
    }

    let layout = build_layout(new_spec, back_cover_left);

    log::debug!(
        "resized spread: spine {:+.2}px, origin {:.2} -> {:.2}, width {:.2}px -> {:.2}px",
        layout.spine_delta_px(previous),
        previous.origin_x,
        layout.origin_x,
        previous.width_px,
        layout.width_px,
    );
    Ok(layout)
}
