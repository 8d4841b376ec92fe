pub mod constants;
pub mod layout;
mod spec;
pub mod strategy;
mod types;

pub use layout::{
    DimensionLabel, GuideKind, GuideLineSpec, ObjectAnchor, Rect, RegionRefResult,
    RepositionResult, SpreadLayout, SpreadRegion, SpreadRegionPosition, compute_layout,
    compute_object_reposition, compute_resized_layout, resolve_region_at_x, resolve_region_pair,
    resolve_region_ref,
};
pub use spec::*;
pub use strategy::{
    CanvasObject, ObjectCategory, ObjectTransform, ResizeStrategy, apply_spine_resize, classify,
    get_spine_resize_strategy,
};
pub use types::*;
