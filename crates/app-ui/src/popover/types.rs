//! Core data model for popover placement

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Sizes and Measurements
// =============================================================================

/// Viewport area available for placement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl ScreenSize {
    /// Create a new screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Width/height pair produced by the size constrainer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

/// Trigger position and size in absolute screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMeasurement {
    /// Absolute x of the trigger's left edge
    pub page_x: f32,
    /// Absolute y of the trigger's top edge
    pub page_y: f32,
    /// Trigger width
    pub width: f32,
    /// Trigger height
    pub height: f32,
}

impl TriggerMeasurement {
    /// Create a trigger measurement
    pub fn new(page_x: f32, page_y: f32, width: f32, height: f32) -> Self {
        Self {
            page_x,
            page_y,
            width,
            height,
        }
    }
}

/// Rendered overlay box reported by the layout pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayLayout {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Layout x (not consumed by placement)
    pub x: f32,
    /// Layout y (not consumed by placement)
    pub y: f32,
}

impl OverlayLayout {
    /// Create a layout with the given natural size
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Whether the box has a non-zero area on both axes
    pub fn has_area(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

/// Spacing parameters shared by every placement computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopoverOffsets {
    /// Gap between trigger and overlay
    pub offset: f32,
    /// Arrow triangle size, also consumed as spacing
    pub arrow_size: f32,
    /// Minimum gap kept from every screen edge
    pub edge_offset: f32,
}

impl Default for PopoverOffsets {
    fn default() -> Self {
        Self {
            offset: 0.0,
            arrow_size: 8.0,
            edge_offset: 12.0,
        }
    }
}

// =============================================================================
// Direction and Placement
// =============================================================================

/// Concrete side of the trigger the overlay is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Above the trigger
    Top,
    /// Right of the trigger
    Right,
    /// Below the trigger
    #[default]
    Bottom,
    /// Left of the trigger
    Left,
}

impl Direction {
    /// Arrow rotation in degrees; the unrotated arrow points up
    pub fn arrow_rotation(&self) -> f32 {
        match self {
            Direction::Bottom => 0.0,
            Direction::Left => 90.0,
            Direction::Right => -90.0,
            Direction::Top => 180.0,
        }
    }

    /// Whether the overlay sits beside the trigger
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// Requested placement, resolved to a [`Direction`] before any position math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum Placement {
    /// Always above
    Top,
    /// Always right
    Right,
    /// Always below
    Bottom,
    /// Always left
    Left,
    /// Side with the most room
    #[default]
    Auto,
    /// Top or bottom, whichever has more room
    AutoVertical,
    /// Left or right, whichever has more room
    AutoHorizontal,
}

impl Placement {
    /// The explicit direction, if this placement names one
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Placement::Top => Some(Direction::Top),
            Placement::Right => Some(Direction::Right),
            Placement::Bottom => Some(Direction::Bottom),
            Placement::Left => Some(Direction::Left),
            Placement::Auto | Placement::AutoVertical | Placement::AutoHorizontal => None,
        }
    }

    /// Parse a placement name, `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Placement::Top),
            "right" => Some(Placement::Right),
            "bottom" => Some(Placement::Bottom),
            "left" => Some(Placement::Left),
            "auto" => Some(Placement::Auto),
            "autoVertical" => Some(Placement::AutoVertical),
            "autoHorizontal" => Some(Placement::AutoHorizontal),
            _ => None,
        }
    }
}

impl From<Direction> for Placement {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => Placement::Top,
            Direction::Right => Placement::Right,
            Direction::Bottom => Placement::Bottom,
            Direction::Left => Placement::Left,
        }
    }
}

impl From<String> for Placement {
    fn from(name: String) -> Self {
        Placement::parse(&name).unwrap_or_else(|| {
            tracing::warn!(placement = %name, "Unknown popover placement, using bottom");
            Placement::Bottom
        })
    }
}

// =============================================================================
// Measurement
// =============================================================================

/// Everything known about one open cycle's geometry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Trigger measured at open time
    pub children: TriggerMeasurement,
    /// Overlay layout, constrained once measured
    pub popover: OverlayLayout,
    /// Resolved direction
    pub direction: Direction,
    /// False until the first layout callback fires
    pub measured: bool,
}

impl Measurement {
    /// Whether placement styles may be applied
    pub fn is_placeable(&self) -> bool {
        self.measured && self.popover.has_area()
    }
}

/// Final overlay coordinate and the arrow offset within the overlay box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    /// Overlay left
    pub x: f32,
    /// Overlay top
    pub y: f32,
    /// Arrow left, relative to the overlay
    pub arrow_x: f32,
    /// Arrow top, relative to the overlay
    pub arrow_y: f32,
}
