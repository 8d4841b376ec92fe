//! Region queries
//!
//! Lookups never fail: a miss is an ordinary answer (a point in the bleed,
//! a wing that no longer exists) and comes back as `None`.

use crate::types::RegionId;

use super::{SpreadLayout, SpreadRegion};

/// Find the region containing pixel `x`, using `[left, left + width)`.
pub fn resolve_region_at_x(layout: &SpreadLayout, x: f64) -> Option<&SpreadRegion> {
    // Regions are sorted by left edge; the candidate is the last one starting at or before x
    let after = layout.regions.partition_point(|r| r.position.left <= x);
    let candidate = layout.regions.get(after.checked_sub(1)?)?;
    candidate.position.contains(x).then_some(candidate)
}

/// Find a region by its stable string id (e.g. `"spine"`).
///
/// Returns `None` for unknown ids and for ids this layout doesn't contain.
pub fn resolve_region_ref<'a>(layout: &'a SpreadLayout, region_ref: &str) -> Option<&'a SpreadRegion> {
    let id: RegionId = region_ref.parse().ok()?;
    layout.region(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::spec::SpreadSpec;

    #[test]
    fn test_point_inside_each_region() {
        let layout = compute_layout(&SpreadSpec::default().with_wings(60.0)).unwrap();
        for region in &layout.regions {
            let hit = resolve_region_at_x(&layout, region.position.center()).unwrap();
            assert_eq!(hit.id, region.id);
        }
    }

    #[test]
    fn test_left_edge_inclusive_right_edge_exclusive() {
        let layout = compute_layout(&SpreadSpec::default()).unwrap();
        let spine = layout.region(RegionId::Spine).unwrap();
        assert_eq!(
            resolve_region_at_x(&layout, spine.position.left).unwrap().id,
            RegionId::Spine
        );
        let front = layout.region(RegionId::FrontCover).unwrap();
        assert_eq!(
            resolve_region_at_x(&layout, front.position.left).unwrap().id,
            RegionId::FrontCover
        );
        assert!(resolve_region_at_x(&layout, layout.width_px).is_none());
    }

    #[test]
    fn test_outside_and_nan_miss() {
        let layout = compute_layout(&SpreadSpec::default()).unwrap();
        assert!(resolve_region_at_x(&layout, -1.0).is_none());
        assert!(resolve_region_at_x(&layout, layout.width_px + 1.0).is_none());
        assert!(resolve_region_at_x(&layout, f64::NAN).is_none());
    }

    #[test]
    fn test_zero_width_spine_never_matches() {
        let layout = compute_layout(&SpreadSpec::default().with_spine_width_mm(0.0)).unwrap();
        let front = layout.region(RegionId::FrontCover).unwrap();
        let hit = resolve_region_at_x(&layout, front.position.left).unwrap();
        assert_eq!(hit.id, RegionId::FrontCover);
    }

    #[test]
    fn test_resolve_region_ref() {
        let layout = compute_layout(&SpreadSpec::default()).unwrap();
        assert_eq!(resolve_region_ref(&layout, "spine").unwrap().id, RegionId::Spine);
        assert!(resolve_region_ref(&layout, "wing-left").is_none());
        assert!(resolve_region_ref(&layout, "flap").is_none());
    }
}
