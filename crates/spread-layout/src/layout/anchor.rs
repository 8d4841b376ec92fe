//! Object anchoring across relayouts
//!
//! An anchor records which region an object belongs to and how far it sits
//! from that region's reference edge. Resolving the same anchor against a
//! later layout tells the host where the object has to move.

use crate::types::RegionId;

use super::{SpreadLayout, SpreadRegion, resolve_region_at_x};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An object's logical attachment to a region
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectAnchor {
    /// Region the object was placed in
    pub region: RegionId,
    /// Horizontal offset from the region's reference edge, in pixels
    pub offset_x: f64,
}

impl ObjectAnchor {
    pub fn new(region: RegionId, offset_x: f64) -> Self {
        Self { region, offset_x }
    }

    /// Anchor an object at absolute `x` to whichever region contains it.
    ///
    /// Returns `None` when `x` is outside every region (e.g. in the bleed).
    pub fn capture(layout: &SpreadLayout, x: f64) -> Option<Self> {
        let region = resolve_region_at_x(layout, x)?;
        Some(Self::new(region.id, x - region.reference_x()))
    }

    /// Absolute x of this anchor within `layout`, if its region exists there
    pub fn absolute_x(&self, layout: &SpreadLayout) -> Option<f64> {
        layout
            .region(self.region)
            .map(|r| r.reference_x() + self.offset_x)
    }
}

/// The same anchored region resolved before and after a relayout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRefResult<'a> {
    pub before: &'a SpreadRegion,
    pub after: &'a SpreadRegion,
}

impl RegionRefResult<'_> {
    /// Movement of the region's reference edge
    pub fn delta_x(&self) -> f64 {
        self.after.reference_x() - self.before.reference_x()
    }

    /// Width ratio after / before; 1.0 when either side has no width
    pub fn width_ratio(&self) -> f64 {
        width_ratio(self.before, self.after)
    }
}

pub(crate) fn width_ratio(before: &SpreadRegion, after: &SpreadRegion) -> f64 {
    if before.position.width > 0.0 && after.position.width > 0.0 {
        after.position.width / before.position.width
    } else {
        1.0
    }
}

/// Outcome of repositioning one anchored object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepositionResult {
    /// The anchor resolved in both layouts
    Moved {
        /// New absolute x of the anchor point
        new_x: f64,
        /// Shift to apply to the object's current x
        delta_x: f64,
    },
    /// The anchored region no longer exists (or never did); leave the object alone
    AnchorLost,
}

impl RepositionResult {
    /// Shift to apply, zero when the anchor was lost
    pub fn delta_x(&self) -> f64 {
        match self {
            RepositionResult::Moved { delta_x, .. } => *delta_x,
            RepositionResult::AnchorLost => 0.0,
        }
    }

    pub fn is_anchor_lost(&self) -> bool {
        matches!(self, RepositionResult::AnchorLost)
    }
}

/// Resolve an anchor's region in both layouts
pub fn resolve_region_pair<'a>(
    anchor: &ObjectAnchor,
    old_layout: &'a SpreadLayout,
    new_layout: &'a SpreadLayout,
) -> Option<RegionRefResult<'a>> {
    Some(RegionRefResult {
        before: old_layout.region(anchor.region)?,
        after: new_layout.region(anchor.region)?,
    })
}

/// Compute where an anchored object goes after a relayout.
///
/// A region missing from either layout yields [`RepositionResult::AnchorLost`];
/// the fallback placement is up to the caller.
pub fn compute_object_reposition(
    anchor: &ObjectAnchor,
    old_layout: &SpreadLayout,
    new_layout: &SpreadLayout,
) -> RepositionResult {
    match resolve_region_pair(anchor, old_layout, new_layout) {
        Some(pair) => RepositionResult::Moved {
            new_x: pair.after.reference_x() + anchor.offset_x,
            delta_x: pair.delta_x(),
        },
        None => {
            log::warn!("anchor region '{}' not found, keeping object in place", anchor.region);
            RepositionResult::AnchorLost
        }
    }
}
