use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadError {
    #[error("Invalid spread spec: {field} {reason}")]
    InvalidSpec { field: &'static str, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SpreadError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SpreadError::InvalidSpec {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpreadError>;

/// Stable identity of a spread panel.
///
/// Pixel positions change on every relayout; the id does not, so anchors
/// and lookups key on this rather than on array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum RegionId {
    /// Flap folded behind the back cover
    WingLeft,
    BackCover,
    Spine,
    FrontCover,
    /// Flap folded behind the front cover
    WingRight,
}

impl RegionId {
    /// Every id in left-to-right spread order
    pub const ALL: [RegionId; 5] = [
        RegionId::WingLeft,
        RegionId::BackCover,
        RegionId::Spine,
        RegionId::FrontCover,
        RegionId::WingRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionId::WingLeft => "wing-left",
            RegionId::BackCover => "back-cover",
            RegionId::Spine => "spine",
            RegionId::FrontCover => "front-cover",
            RegionId::WingRight => "wing-right",
        }
    }

    /// Slot in [`RegionId::ALL`], used as the index into a layout's id table
    pub(crate) fn ordinal(self) -> usize {
        match self {
            RegionId::WingLeft => 0,
            RegionId::BackCover => 1,
            RegionId::Spine => 2,
            RegionId::FrontCover => 3,
            RegionId::WingRight => 4,
        }
    }

    /// Which edge of the region an attached object follows
    pub fn reference_edge(self) -> ReferenceEdge {
        match self {
            RegionId::WingLeft | RegionId::BackCover => ReferenceEdge::Left,
            RegionId::Spine => ReferenceEdge::Center,
            RegionId::FrontCover | RegionId::WingRight => ReferenceEdge::Right,
        }
    }

    pub fn is_wing(self) -> bool {
        matches!(self, RegionId::WingLeft | RegionId::WingRight)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RegionId {
    type Err = SpreadError;

    fn from_str(s: &str) -> Result<Self> {
        RegionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SpreadError::Config(format!("Unknown region: {}", s)))
    }
}

/// The edge a region keeps fixed when the spine changes width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceEdge {
    /// Panels left of the spine grow and shrink away from their left edge
    Left,
    /// The spine itself is tracked by its midpoint
    Center,
    /// Panels right of the spine stay attached to the spread's trailing edge
    Right,
}
