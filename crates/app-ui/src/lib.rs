//! User interface layer for the mobile starter
//!
//! This crate hosts the overlay primitives of the UI layer: the popover
//! placement engine and the design tokens it renders with.
//!
//! # Modules
//!
//! - [`popover`] - Popover geometry, lifecycle state machine and styles
//! - [`tokens`] - Design tokens (durations, z-index layers, shadows, colours)
//!
//! # Example
//!
//! ```rust
//! use app_ui::popover::{resolve_direction, Direction, Placement, ScreenSize, TriggerMeasurement};
//!
//! let screen = ScreenSize::new(300.0, 300.0);
//! let trigger = TriggerMeasurement::new(125.0, 125.0, 50.0, 50.0);
//!
//! // Equal room on every side resolves to the first candidate
//! assert_eq!(resolve_direction(Placement::Auto, &trigger, screen), Direction::Left);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod popover;
pub mod tokens;

// Re-export commonly used types
pub use popover::{
    Direction, Measurement, Placement, Popover, PopoverConfig, PopoverError, PopoverEvent,
    PopoverListener, PopoverPhase, PopoverStyles, ScreenSize, Trigger,
};

pub use tokens::{duration, overlay, shadows, z_index, Shadow};
