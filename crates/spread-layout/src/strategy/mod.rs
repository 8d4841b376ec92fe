//! Spine resize strategy selection
//!
//! When the spine changes width, every object anchored to a region has to
//! follow it. How it follows depends on what the object is: text must never
//! be scaled, pictures and shapes scale with their region.

mod object;
mod resize;

pub use object::*;
pub use resize::*;
