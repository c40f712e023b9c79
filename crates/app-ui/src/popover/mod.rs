//! Popover placement engine
//!
//! Decides where a floating overlay renders relative to its trigger and
//! the viewport, and drives the open/close lifecycle around that.
//!
//! # Pipeline
//!
//! 1. A trigger press (or the owner's visibility prop) opens the popover.
//! 2. The overlay renders transparent; the host reports its natural size
//!    through [`Popover::on_layout`].
//! 3. [`resolve_direction`] picks a side, [`constrain_size`] clamps the
//!    overlay to the room on that side, [`compute_position`] places it and
//!    [`compute_transform_adjustments`] anchors the scale animation at
//!    the arrow.
//! 4. [`Popover::styles`] hands the renderer everything for one frame.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use app_ui::popover::{
//!     OverlayLayout, Placement, Popover, PopoverConfig, ScreenSize, StaticElement, Trigger,
//! };
//!
//! let config = PopoverConfig::new().with_placement(Placement::Bottom);
//! let trigger = Trigger::Element(Rc::new(StaticElement::at(100.0, 100.0, 80.0, 40.0)));
//! let mut popover = Popover::new(config, trigger, ScreenSize::new(393.0, 852.0));
//!
//! popover.press_trigger();
//! popover.on_layout(OverlayLayout::sized(200.0, 100.0));
//! popover.finish_transition();
//!
//! let styles = popover.styles();
//! assert_eq!(styles.position(), Some((40.0, 148.0)));
//! ```

pub mod animation;
pub mod back_handler;
pub mod config;
pub mod direction;
pub mod driver;
pub mod geometry;
pub mod size;
pub mod state;
pub mod style;
pub mod transform;
pub mod trigger;
pub mod types;

pub use animation::{AnimatedValue, Easing, Transition};
pub use back_handler::{BackHandler, BackSubscription};
pub use config::{PopoverConfig, PopoverError, Result};
pub use direction::resolve_direction;
pub use driver::{play_transition, DEFAULT_FRAME_INTERVAL};
pub use geometry::{center_on_axis, compute_position, horizontal_center, vertical_center};
pub use size::{constrain_size, max_bounds};
pub use state::{
    EventLog, MountedPopover, NoopListener, Popover, PopoverEvent, PopoverListener, PopoverPhase,
};
pub use style::{compute_popover_styles, Color, PopoverStyles};
pub use transform::{compute_transform_adjustments, ArrowAnchor, TransformStep};
pub use trigger::{LayoutMeasure, Measurable, PressBinding, ResolvedTrigger, StaticElement, Trigger, TriggerRef};
pub use types::{
    Direction, Measurement, OverlayLayout, Placement, PopoverOffsets, PositionResult, ScreenSize,
    Size, TriggerMeasurement,
};
