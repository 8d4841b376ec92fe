//! Layout calculation modules for spreads
//!
//! This module handles all the geometric calculations for a cover spread:
//! - Region layout (panel edges, guides, dimension labels)
//! - Resizing when the spine or wings change
//! - Region queries (by x coordinate, by stable id)
//! - Object anchors and their repositioning across relayouts

mod anchor;
mod lookup;
mod regions;
mod resize;
mod types;

pub use anchor::*;
pub(crate) use anchor::width_ratio;
pub use lookup::*;
pub use regions::{compute_layout, format_mm};
pub use resize::*;
pub use types::*;
