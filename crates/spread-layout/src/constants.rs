//! Shared constants for spread layout
//!
//! All millimeter to pixel conversions go through [`mm_to_px`] so that every
//! region edge, guide and label agrees on the same scale.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch (exact)
pub const MM_PER_INCH: f64 = 25.4;

/// Convert millimeters to pixels at the given resolution (dots per inch)
#[inline]
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    mm * dpi / MM_PER_INCH
}

/// Convert pixels back to millimeters at the given resolution
#[inline]
pub fn px_to_mm(px: f64, dpi: f64) -> f64 {
    px * MM_PER_INCH / dpi
}

// =============================================================================
// Comparisons
// =============================================================================

/// Tolerance used when comparing pixel coordinates derived from
/// different conversion paths
pub const PX_EPSILON: f64 = 1e-6;

// =============================================================================
// Dimension Labels
// =============================================================================

/// Gap between the top of the bleed box and the dimension label baseline (pixels)
pub const DIMENSION_LABEL_OFFSET_PX: f64 = 16.0;

// =============================================================================
// Spine
// =============================================================================

/// Pages per leaf (front and back)
pub const PAGES_PER_LEAF: u32 = 2;
