//! Design tokens used by the overlay components
//!
//! Durations, frame pacing, z-index layers, shadows and overlay colours.

use serde::{Deserialize, Serialize};

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Box shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Android elevation
    pub elevation: f32,
    /// Shadow color
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, opacity: f32, elevation: f32, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
            elevation,
            color: color.to_string(),
        }
    }
}

/// Predefined shadows
pub mod shadows {
    use super::Shadow;

    /// Shadow under floating overlays and their arrow
    pub fn overlay() -> Shadow {
        Shadow::new(4.0, 4.0, 5.0, 0.15, 5.0, "#424242")
    }
}

// =============================================================================
// Overlay Colours and Radii
// =============================================================================

/// Overlay surface tokens
pub mod overlay {
    /// Default popover surface colour
    pub const SURFACE: &str = "white";
    /// Dimmed backdrop behind an open popover
    pub const BACKDROP: &str = "rgba(0, 0, 0, 0.3)";
    /// Transparent backdrop used by the popover service
    pub const TRANSPARENT: &str = "transparent";
    /// Corner radius of the popover surface
    pub const RADIUS: f32 = 4.0;
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Slow (300ms), used by popover open/close
    pub const SLOW: u32 = 300;
}

/// Frame pacing for driven animations
pub mod frame {
    /// One frame at 60 Hz, in milliseconds
    pub const FRAME_60HZ_MS: u64 = 16;
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Popover backdrop
    pub const POPOVER_BACKDROP: i32 = 55;
    /// Popover content
    pub const POPOVER: i32 = 60;
}
