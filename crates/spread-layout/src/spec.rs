use crate::constants::{PAGES_PER_LEAF, mm_to_px};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declarative description of a cover spread, in millimeters.
///
/// The spec is the source of truth; layouts are always derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpreadSpec {
    // Panels
    pub cover_width_mm: f64,
    pub cover_height_mm: f64,
    pub spine_width_mm: f64,

    // Wings (flaps)
    pub wing_enabled: bool,
    pub wing_width_mm: f64,

    // Margins
    /// Bleed beyond the trim line
    pub cut_size_mm: f64,
    /// Inset inside each panel that is guaranteed to survive trimming
    pub safe_size_mm: f64,

    /// Output resolution in dots per inch
    pub dpi: f64,
}

impl Default for SpreadSpec {
    fn default() -> Self {
        Self {
            cover_width_mm: 140.0,
            cover_height_mm: 210.0,
            spine_width_mm: 10.0,
            wing_enabled: false,
            wing_width_mm: 0.0,
            cut_size_mm: 3.0,
            safe_size_mm: 5.0,
            dpi: 150.0,
        }
    }
}

impl SpreadSpec {
    /// Create a wingless spec with default margins and resolution
    pub fn new(cover_width_mm: f64, cover_height_mm: f64, spine_width_mm: f64) -> Self {
        Self {
            cover_width_mm,
            cover_height_mm,
            spine_width_mm,
            ..Default::default()
        }
    }

    pub fn with_spine_width_mm(mut self, spine_width_mm: f64) -> Self {
        self.spine_width_mm = spine_width_mm;
        self
    }

    /// Set the spine width from a page count and paper caliper
    pub fn with_page_count(self, page_count: u32, caliper_mm: f64) -> Self {
        self.with_spine_width_mm(spine_width_mm(page_count, caliper_mm))
    }

    pub fn with_wings(mut self, wing_width_mm: f64) -> Self {
        self.wing_enabled = true;
        self.wing_width_mm = wing_width_mm;
        self
    }

    /// Disable wings, keeping the last width so they can be re-enabled
    pub fn without_wings(mut self) -> Self {
        self.wing_enabled = false;
        self
    }

    pub fn with_margins(mut self, cut_size_mm: f64, safe_size_mm: f64) -> Self {
        self.cut_size_mm = cut_size_mm;
        self.safe_size_mm = safe_size_mm;
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Total trim width of the flat spread in millimeters
    pub fn total_width_mm(&self) -> f64 {
        let wings = if self.wing_enabled {
            2.0 * self.wing_width_mm
        } else {
            0.0
        };
        2.0 * self.cover_width_mm + self.spine_width_mm + wings
    }

    /// Validate the spec
    pub fn validate(&self) -> Result<()> {
        positive("cover_width_mm", self.cover_width_mm)?;
        positive("cover_height_mm", self.cover_height_mm)?;
        non_negative("spine_width_mm", self.spine_width_mm)?;
        if self.wing_enabled {
            positive("wing_width_mm", self.wing_width_mm)
                .map_err(|_| SpreadError::invalid("wing_width_mm", "must be > 0 when wings are enabled"))?;
        } else {
            finite("wing_width_mm", self.wing_width_mm)?;
        }
        non_negative("cut_size_mm", self.cut_size_mm)?;
        non_negative("safe_size_mm", self.safe_size_mm)?;
        positive("dpi", self.dpi)?;

        // Each field can be finite while the spread built from them is not
        let total_mm = self.total_width_mm();
        if !total_mm.is_finite() {
            return Err(SpreadError::invalid("total_width_mm", "overflows"));
        }
        let extent_mm = [total_mm, self.cover_height_mm, self.cut_size_mm, self.safe_size_mm]
            .into_iter()
            .fold(0.0, f64::max);
        let extent_px = mm_to_px(extent_mm + 2.0 * self.cut_size_mm, self.dpi);
        if !extent_px.is_finite() {
            return Err(SpreadError::invalid(
                "dpi",
                format!("{} dpi overflows the pixel range for {}mm", self.dpi, extent_mm),
            ));
        }
        Ok(())
    }

    /// Load a spec from a JSON file and validate it
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let spec: SpreadSpec = serde_json::from_slice(&bytes)
            .map_err(|e| SpreadError::Config(format!("Failed to parse spec: {}", e)))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Save the spec to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SpreadError::Config(format!("Failed to serialize spec: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Spine width for a text block of `page_count` pages printed on paper of
/// the given caliper (sheet thickness). A leaf carries two pages, so an odd
/// count still needs a whole leaf.
pub fn spine_width_mm(page_count: u32, caliper_mm: f64) -> f64 {
    let leaves = page_count.div_ceil(PAGES_PER_LEAF);
    leaves as f64 * caliper_mm
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpreadError::invalid(field, format!("must be finite, got {}", value)))
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SpreadError::invalid(field, format!("must be > 0, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SpreadError::invalid(field, format!("must be >= 0, got {}", value)))
    }
}
