//! Layout data types for spreads
//!
//! These types are the derived output of a layout computation. They are
//! recomputed on every spec change and never edited in place.

use crate::types::{ReferenceEdge, RegionId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular area in pixels (canvas coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Shrink by `inset` on every side. Never produces a negative size.
    pub fn inset(&self, inset: f64) -> Rect {
        let width = (self.width - 2.0 * inset).max(0.0);
        let height = (self.height - 2.0 * inset).max(0.0);
        Rect::new(
            self.center_x() - width / 2.0,
            self.y + (self.height - height) / 2.0,
            width,
            height,
        )
    }

    /// Grow by `outset` on every side
    pub fn outset(&self, outset: f64) -> Rect {
        Rect::new(
            self.x - outset,
            self.y - outset,
            self.width + 2.0 * outset,
            self.height + 2.0 * outset,
        )
    }
}

/// Horizontal extent of a region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpreadRegionPosition {
    /// Left edge x coordinate
    pub left: f64,
    /// Width in pixels
    pub width: f64,
}

impl SpreadRegionPosition {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Half-open containment: `[left, left + width)`
    pub fn contains(&self, x: f64) -> bool {
        x >= self.left && x < self.right()
    }
}

/// One named panel of the spread
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpreadRegion {
    /// Stable identity across relayouts
    pub id: RegionId,
    /// Horizontal extent in pixels
    pub position: SpreadRegionPosition,
    /// Width as authored, in millimeters
    pub width_mm: f64,
    /// Full-height trim bounds
    pub bounds: Rect,
    /// Trim bounds inset by the safe margin
    pub safe_bounds: Rect,
}

impl SpreadRegion {
    /// X coordinate of the edge attached objects follow
    pub fn reference_x(&self) -> f64 {
        match self.id.reference_edge() {
            ReferenceEdge::Left => self.position.left,
            ReferenceEdge::Center => self.position.center(),
            ReferenceEdge::Right => self.position.right(),
        }
    }
}

/// What a guide line marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuideKind {
    /// Leftmost or rightmost trim edge of the spread
    OuterEdge,
    /// Boundary between two panels
    Fold,
}

/// A vertical snapping guide at a region boundary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuideLineSpec {
    pub x: f64,
    pub kind: GuideKind,
    /// Region on the left of the guide (None at the leading edge)
    pub left: Option<RegionId>,
    /// Region on the right of the guide (None at the trailing edge)
    pub right: Option<RegionId>,
}

/// A measurement annotation centered above a region
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionLabel {
    pub region: RegionId,
    /// Horizontal midpoint of the region
    pub x: f64,
    /// Baseline, above the bleed box
    pub y: f64,
    pub width_mm: f64,
    pub text: String,
}

/// Complete geometry of a spread
///
/// Only serializable: a layout is always rebuilt from its spec, never read back.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SpreadLayout {
    /// Regions in left-to-right order
    pub regions: Vec<SpreadRegion>,
    /// One guide per region boundary, outer edges included
    pub guides: Vec<GuideLineSpec>,
    /// One label per region
    pub labels: Vec<DimensionLabel>,
    /// X coordinate of the spread's leading trim edge
    pub origin_x: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub dpi: f64,
    /// Trim box grown by the bleed on every side
    pub bleed_bounds: Rect,
    /// Position in `regions` for each id, indexed by `RegionId::ordinal`
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) index: [Option<usize>; 5],
}

impl SpreadLayout {
    /// Look up a region by its stable id
    pub fn region(&self, id: RegionId) -> Option<&SpreadRegion> {
        self.index[id.ordinal()].and_then(|i| self.regions.get(i))
    }

    /// Ids present in this layout, left to right
    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.iter().map(|r| r.id)
    }

    pub fn has_wings(&self) -> bool {
        self.region(RegionId::WingLeft).is_some()
    }

    /// Right trim edge of the spread
    pub fn right_edge(&self) -> f64 {
        self.origin_x + self.width_px
    }

    /// Distance from a region's right edge to the spread's trailing edge
    pub fn trailing_inset(&self, id: RegionId) -> Option<f64> {
        self.region(id)
            .map(|r| self.right_edge() - r.position.right())
    }

    /// Spine width change from `previous` to `self`, in pixels
    pub fn spine_delta_px(&self, previous: &SpreadLayout) -> f64 {
        let width = |layout: &SpreadLayout| {
            layout
                .region(RegionId::Spine)
                .map_or(0.0, |r| r.position.width)
        };
        width(self) - width(previous)
    }

    /// Trim bounds of the whole spread
    pub fn trim_bounds(&self) -> Rect {
        Rect::new(self.origin_x, 0.0, self.width_px, self.height_px)
    }

    pub(crate) fn build_index(regions: &[SpreadRegion]) -> [Option<usize>; 5] {
        let mut index = [None; 5];
        for (i, region) in regions.iter().enumerate() {
            index[region.id.ordinal()] = Some(i);
        }
        index
    }
}
