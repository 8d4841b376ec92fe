//! Region layout calculation
//!
//! This module turns a [`SpreadSpec`] into the left-to-right sequence of
//! panels, the guide lines at their boundaries and the dimension labels
//! above them.

use crate::constants::{DIMENSION_LABEL_OFFSET_PX, mm_to_px};
use crate::spec::SpreadSpec;
use crate::types::{RegionId, Result};

use super::{DimensionLabel, GuideKind, GuideLineSpec, Rect, SpreadLayout, SpreadRegion, SpreadRegionPosition};

// =============================================================================
// Layout Creation
// =============================================================================

/// Compute the layout of a spread starting at x = 0.
///
/// Fails with [`SpreadError::InvalidSpec`](crate::SpreadError::InvalidSpec)
/// if the spec violates any of its invariants.
pub fn compute_layout(spec: &SpreadSpec) -> Result<SpreadLayout> {
    spec.validate()?;
    let layout = build_layout(spec, mm_to_px(leading_wing_mm(spec), spec.dpi));
    log::debug!(
        "computed spread layout: {} regions, {:.3}mm x {:.3}mm ({:.2}px x {:.2}px)",
        layout.regions.len(),
        layout.width_mm,
        layout.height_mm,
        layout.width_px,
        layout.height_px,
    );
    Ok(layout)
}

/// Build a layout for an already validated spec with the back cover's left
/// edge at `back_cover_left`. The left wing, if any, extends leftwards from it.
pub(crate) fn build_layout(spec: &SpreadSpec, back_cover_left: f64) -> SpreadLayout {
    let panels = panel_widths_mm(spec);
    let height_px = mm_to_px(spec.cover_height_mm, spec.dpi);
    let bleed_px = mm_to_px(spec.cut_size_mm, spec.dpi);
    let safe_px = mm_to_px(spec.safe_size_mm, spec.dpi);

    // Every edge comes from a cumulative millimeter sum, measured from the
    // back cover and converted once, so neighbouring regions share the exact
    // same boundary value and the covers land on the same pixels with or
    // without wings.
    let mut edges = Vec::with_capacity(panels.len() + 1);
    let mut cumulative_mm = -leading_wing_mm(spec);
    edges.push(back_cover_left + mm_to_px(cumulative_mm, spec.dpi));
    for &(_, width_mm) in &panels {
        cumulative_mm += width_mm;
        edges.push(back_cover_left + mm_to_px(cumulative_mm, spec.dpi));
    }

    let regions: Vec<SpreadRegion> = panels
        .iter()
        .zip(edges.windows(2))
        .map(|(&(id, width_mm), edge)| {
            let position = SpreadRegionPosition {
                left: edge[0],
                width: edge[1] - edge[0],
            };
            let bounds = Rect::new(position.left, 0.0, position.width, height_px);
            SpreadRegion {
                id,
                position,
                width_mm,
                bounds,
                safe_bounds: bounds.inset(safe_px),
            }
        })
        .collect();

    let origin_x = edges[0];
    let width_px = edges[edges.len() - 1] - origin_x;
    let trim = Rect::new(origin_x, 0.0, width_px, height_px);
    let bleed_bounds = trim.outset(bleed_px);

    let guides = guide_lines(&regions, &edges);
    let labels = dimension_labels(&regions, bleed_bounds.y - DIMENSION_LABEL_OFFSET_PX);
    let index = SpreadLayout::build_index(&regions);

    SpreadLayout {
        regions,
        guides,
        labels,
        origin_x,
        width_px,
        height_px,
        width_mm: spec.total_width_mm(),
        height_mm: spec.cover_height_mm,
        dpi: spec.dpi,
        bleed_bounds,
        index,
    }
}

/// Width of the panel left of the back cover, 0 without wings
pub(crate) fn leading_wing_mm(spec: &SpreadSpec) -> f64 {
    if spec.wing_enabled {
        spec.wing_width_mm
    } else {
        0.0
    }
}

/// Panels present for a spec, in left-to-right order, with their widths in mm
pub(crate) fn panel_widths_mm(spec: &SpreadSpec) -> Vec<(RegionId, f64)> {
    let mut panels = Vec::with_capacity(5);
    if spec.wing_enabled {
        panels.push((RegionId::WingLeft, spec.wing_width_mm));
    }
    panels.push((RegionId::BackCover, spec.cover_width_mm));
    panels.push((RegionId::Spine, spec.spine_width_mm));
    panels.push((RegionId::FrontCover, spec.cover_width_mm));
    if spec.wing_enabled {
        panels.push((RegionId::WingRight, spec.wing_width_mm));
    }
    panels
}

// =============================================================================
// Guides and Labels
// =============================================================================

/// One guide per edge: outer edges at both ends, folds in between
fn guide_lines(regions: &[SpreadRegion], edges: &[f64]) -> Vec<GuideLineSpec> {
    let last = edges.len() - 1;
    edges
        .iter()
        .enumerate()
        .map(|(i, &x)| GuideLineSpec {
            x,
            kind: if i == 0 || i == last {
                GuideKind::OuterEdge
            } else {
                GuideKind::Fold
            },
            left: i.checked_sub(1).map(|j| regions[j].id),
            right: regions.get(i).map(|r| r.id),
        })
        .collect()
}

fn dimension_labels(regions: &[SpreadRegion], y: f64) -> Vec<DimensionLabel> {
    regions
        .iter()
        .map(|region| DimensionLabel {
            region: region.id,
            x: region.position.center(),
            y,
            width_mm: region.width_mm,
            text: format_mm(region.width_mm),
        })
        .collect()
}

/// Format a millimeter measurement without trailing zeros, e.g. `140mm`, `10.5mm`
pub fn format_mm(mm: f64) -> String {
    let text = format!("{:.2}", mm);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}mm", text)
}

// =============================================================================
// Tests
// =============================================================================
