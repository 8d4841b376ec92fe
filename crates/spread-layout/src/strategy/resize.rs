//! Spine resize strategies
//!
//! Each strategy is a stateless transform from an object's current transform
//! and its region before/after a relayout to the object's new transform.

use crate::layout::{ObjectAnchor, SpreadLayout, SpreadRegion, resolve_region_pair, width_ratio};

use super::{CanvasObject, ObjectCategory, ObjectTransform, classify};

/// How an object follows its region when the spine changes width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeStrategy {
    /// Keep size, keep the offset from the region's center
    Text,
    /// Scale with the region and compensate non-uniform strokes
    Image,
    /// Same policy as text; scaling would distort the embedded glyphs
    GroupWithText,
    /// Scale with the region
    Default,
}

/// Select the strategy for a category. Never fails; unknown objects are
/// classified as [`ObjectCategory::Other`] and get [`ResizeStrategy::Default`].
pub fn get_spine_resize_strategy(category: ObjectCategory) -> ResizeStrategy {
    match category {
        ObjectCategory::Text => ResizeStrategy::Text,
        ObjectCategory::Image => ResizeStrategy::Image,
        ObjectCategory::GroupWithText => ResizeStrategy::GroupWithText,
        ObjectCategory::GroupWithoutText | ObjectCategory::Other => ResizeStrategy::Default,
    }
}

impl ResizeStrategy {
    pub fn name(self) -> &'static str {
        match self {
            ResizeStrategy::Text => "TextResizeStrategy",
            ResizeStrategy::Image => "ImageResizeStrategy",
            ResizeStrategy::GroupWithText => "GroupWithTextResizeStrategy",
            ResizeStrategy::Default => "DefaultResizeStrategy",
        }
    }

    pub fn supports_scale(self) -> bool {
        matches!(self, ResizeStrategy::Image | ResizeStrategy::Default)
    }

    pub fn supports_recenter(self) -> bool {
        matches!(self, ResizeStrategy::Text | ResizeStrategy::GroupWithText)
    }

    pub fn corrects_stroke(self) -> bool {
        matches!(self, ResizeStrategy::Image)
    }

    /// Compute the object's transform after its region went from `before` to `after`
    pub fn apply(
        self,
        transform: &ObjectTransform,
        before: &SpreadRegion,
        after: &SpreadRegion,
    ) -> ObjectTransform {
        if self.supports_recenter() {
            return recenter(transform, before, after);
        }

        let factor = width_ratio(before, after);
        let mut scaled = *transform;
        scaled.scale_x *= factor;
        scaled.scale_y *= factor;
        scaled.left = after.position.left + (transform.left - before.position.left) * factor;

        // A non-uniform stroke scales with the object; shrink it back so the
        // border keeps its on-canvas width
        if self.corrects_stroke() && !transform.stroke_uniform {
            scaled.stroke_width = transform.stroke_width / factor;
        }
        scaled
    }
}

fn recenter(transform: &ObjectTransform, before: &SpreadRegion, after: &SpreadRegion) -> ObjectTransform {
    let offset = transform.center_x() - before.position.center();
    let center = after.position.center() + offset;
    ObjectTransform {
        left: center - transform.scaled_width() / 2.0,
        ..*transform
    }
}

/// Classify `object`, resolve its anchor in both layouts and apply the
/// matching strategy.
///
/// When the anchor's region is gone the object keeps its absolute position.
pub fn apply_spine_resize(
    object: &CanvasObject,
    anchor: &ObjectAnchor,
    old_layout: &SpreadLayout,
    new_layout: &SpreadLayout,
) -> ObjectTransform {
    let current = object.transform();
    match resolve_region_pair(anchor, old_layout, new_layout) {
        Some(pair) => {
            let strategy = get_spine_resize_strategy(classify(object));
            log::trace!("{} for object anchored to {}", strategy.name(), anchor.region);
            strategy.apply(current, pair.before, pair.after)
        }
        None => {
            log::warn!(
                "anchor region '{}' lost, keeping object at x={:.2}",
                anchor.region,
                current.left
            );
            *current
        }
    }
}
